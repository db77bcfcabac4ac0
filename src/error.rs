//! Run-level errors.
//!
//! Registry rejections are reported as [`ValidationError`]s. A run can
//! additionally fail when its configuration is unusable, when the workload
//! would run the clock past `i64::MAX`, or when a policy leaves a
//! registered process without any execution segment.

use std::fmt;

use crate::validation::ValidationError;

/// Failure of a scheduling run.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// The run configuration was rejected before any policy ran.
    InvalidConfig(ValidationError),
    /// The workload was rejected before any policy ran.
    InvalidWorkload(ValidationError),
    /// A registered process received no execution segment.
    ///
    /// Only the unguarded multilevel queue can drop a process this way.
    MissingSegments {
        /// Process left unscheduled.
        process_id: String,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(e) => write!(f, "invalid run configuration: {e}"),
            Self::InvalidWorkload(e) => write!(f, "invalid workload: {e}"),
            Self::MissingSegments { process_id } => {
                write!(f, "process '{process_id}' has no execution segments")
            }
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidConfig(e) | Self::InvalidWorkload(e) => Some(e),
            Self::MissingSegments { .. } => None,
        }
    }
}

impl From<ValidationError> for EngineError {
    fn from(e: ValidationError) -> Self {
        Self::InvalidConfig(e)
    }
}
