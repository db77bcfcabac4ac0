//! Run configuration passed to every policy.

use serde::{Deserialize, Serialize};

use super::Policy;
use crate::validation::{validate_quantum, ValidationError};

/// Per-run policy settings.
///
/// Policies ignore the fields they do not use.
///
/// # Defaults
/// - `quantum = 2`
/// - `strict_no_duplicate = true`: the multilevel queue never holds the
///   same process twice. Set it to `false` to reproduce the classic
///   unguarded arrival scan, where a waiting process is re-queued on every
///   pass and may be served (and charged a full burst) more than once.
///   Serving such a stale entry also drops the most recently registered
///   unserved process, which then fails the run with
///   [`EngineError::MissingSegments`](crate::EngineError::MissingSegments).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Round-robin time slice.
    pub quantum: i64,
    /// Membership guard for multilevel queue admission.
    pub strict_no_duplicate: bool,
}

impl RunConfig {
    /// Default round-robin time slice.
    pub const DEFAULT_QUANTUM: i64 = 2;

    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the round-robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets the multilevel queue membership guard.
    pub fn with_strict_no_duplicate(mut self, strict: bool) -> Self {
        self.strict_no_duplicate = strict;
        self
    }

    /// Checks the settings the given policy depends on.
    pub fn validate_for(&self, policy: Policy) -> Result<(), ValidationError> {
        if policy.uses_quantum() {
            validate_quantum(self.quantum)?;
        }
        Ok(())
    }

    /// How many times the policy may dispatch each full burst.
    ///
    /// Only the unguarded multilevel queue serves a process more than once,
    /// and never more often than there are processes.
    pub fn entries_per_process(&self, policy: Policy, process_count: usize) -> i64 {
        if policy == Policy::Multilevel && !self.strict_no_duplicate {
            i64::try_from(process_count).unwrap_or(i64::MAX)
        } else {
            1
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            quantum: Self::DEFAULT_QUANTUM,
            strict_no_duplicate: true,
        }
    }
}
