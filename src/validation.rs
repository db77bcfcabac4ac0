//! Input validation for scheduling runs.
//!
//! Checks process specifications and run configuration before anything
//! reaches a policy. Detects:
//! - Empty process IDs
//! - Non-positive burst times
//! - Negative arrival times
//! - Duplicate IDs
//! - Non-positive round-robin quantum
//! - Workloads whose clock would run past `i64::MAX`

use crate::models::Process;
use std::collections::HashSet;
use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A process has an empty ID.
    EmptyId,
    /// A process has `burst_time <= 0`.
    NonPositiveBurst,
    /// A process has `arrival_time < 0`.
    NegativeArrival,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process ID is not registered.
    UnknownProcess,
    /// Round-robin quantum is `<= 0`.
    InvalidQuantum,
    /// The simulated clock could run past `i64::MAX`.
    TimeOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Whether the error describes a malformed process specification.
    pub fn is_invalid_spec(&self) -> bool {
        matches!(
            self.kind,
            ValidationErrorKind::EmptyId
                | ValidationErrorKind::NonPositiveBurst
                | ValidationErrorKind::NegativeArrival
                | ValidationErrorKind::TimeOverflow
        )
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Checks a single process specification in isolation.
///
/// Returns the first problem found, in the order: empty ID, burst, arrival,
/// then whether `arrival + burst` fits the time axis.
pub fn validate_process(process: &Process) -> Result<(), ValidationError> {
    if process.id.trim().is_empty() {
        return Err(ValidationError::new(
            ValidationErrorKind::EmptyId,
            "Process ID must not be empty",
        ));
    }
    if process.burst_time <= 0 {
        return Err(ValidationError::new(
            ValidationErrorKind::NonPositiveBurst,
            format!(
                "Process '{}' has non-positive burst time {}",
                process.id, process.burst_time
            ),
        ));
    }
    if process.arrival_time < 0 {
        return Err(ValidationError::new(
            ValidationErrorKind::NegativeArrival,
            format!(
                "Process '{}' has negative arrival time {}",
                process.id, process.arrival_time
            ),
        ));
    }
    if process.arrival_time.checked_add(process.burst_time).is_none() {
        return Err(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            format!(
                "Process '{}' would finish past the end of the time axis (arrival {}, burst {})",
                process.id, process.arrival_time, process.burst_time
            ),
        ));
    }
    Ok(())
}

/// Validates a batch of processes.
///
/// Checks:
/// 1. Every process passes [`validate_process`]
/// 2. No duplicate process IDs
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for process in processes {
        if let Err(e) = validate_process(process) {
            errors.push(e);
        }
        if !ids.insert(process.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", process.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks a round-robin time quantum.
pub fn validate_quantum(quantum: i64) -> Result<(), ValidationError> {
    if quantum <= 0 {
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            format!("Time quantum must be positive, got {quantum}"),
        ));
    }
    Ok(())
}

/// Upper bound of the clock for a whole run.
///
/// Every policy advances the clock either by dispatching work or by idling
/// up to the latest arrival, so a run ends no later than the latest arrival
/// plus all dispatched work. `entries_per_process` is how many times each
/// burst may be dispatched in full.
///
/// # Errors
/// [`ValidationErrorKind::TimeOverflow`] if that bound exceeds `i64::MAX`.
pub fn validate_time_horizon(
    processes: &[Process],
    entries_per_process: i64,
) -> Result<i64, ValidationError> {
    let overflow = || {
        ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            format!(
                "Workload of {} processes may run past the end of the time axis",
                processes.len()
            ),
        )
    };

    let latest_arrival = processes.iter().map(|p| p.arrival_time).max().unwrap_or(0);
    let total_burst = processes
        .iter()
        .try_fold(0i64, |acc, p| acc.checked_add(p.burst_time))
        .ok_or_else(overflow)?;

    total_burst
        .checked_mul(entries_per_process.max(1))
        .and_then(|work| latest_arrival.checked_add(work))
        .ok_or_else(overflow)
}
