//! Process model.
//!
//! A process is a unit of CPU work described by its arrival time, burst
//! time and priority. It also carries the mutable state a scheduling run
//! works on (remaining time, first start) and the derived metrics filled
//! in after the run.
//!
//! # Time Representation
//! All times are abstract integer ticks relative to t=0. There is no
//! wall-clock meaning attached to a tick.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.1

use serde::{Deserialize, Serialize};

/// Priority assigned when the caller does not provide one.
pub const DEFAULT_PRIORITY: i32 = 1;

/// A process to be scheduled.
///
/// The static description (`id`, `arrival_time`, `burst_time`, `priority`)
/// never changes during a run. Everything else is run state, restored by
/// [`Process::reset`] before each run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: String,
    /// Time the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
    /// Scheduling priority (lower value = higher priority).
    pub priority: i32,
    /// CPU time still owed. Starts at `burst_time`.
    pub remaining_time: i64,
    /// Start of the first execution segment. `None` until the process runs.
    pub start_time: Option<i64>,
    /// Latest segment end (filled by metrics calculation).
    pub completion_time: i64,
    /// `completion_time - arrival_time`.
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time`.
    pub waiting_time: i64,
    /// `start_time - arrival_time`.
    pub response_time: i64,
}

impl Process {
    /// Creates a process with default priority and fresh run state.
    pub fn new(id: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            priority: DEFAULT_PRIORITY,
            remaining_time: burst_time,
            start_time: None,
            completion_time: 0,
            turnaround_time: 0,
            waiting_time: 0,
            response_time: 0,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Restores all run state to its initial values.
    pub fn reset(&mut self) {
        self.remaining_time = self.burst_time;
        self.start_time = None;
        self.completion_time = 0;
        self.turnaround_time = 0;
        self.waiting_time = 0;
        self.response_time = 0;
    }

    /// Whether the process is eligible to run at `time`.
    #[inline]
    pub fn has_arrived(&self, time: i64) -> bool {
        self.arrival_time <= time
    }

    /// Whether the process still owes CPU time.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining_time == 0
    }

    /// Whether the process has been dispatched at least once.
    #[inline]
    pub fn has_started(&self) -> bool {
        self.start_time.is_some()
    }

    /// Records a dispatch of `amount` ticks starting at `time`.
    ///
    /// Freezes `start_time` on the first call. `remaining_time` never
    /// drops below zero.
    pub(crate) fn execute(&mut self, time: i64, amount: i64) {
        if self.start_time.is_none() {
            self.start_time = Some(time);
        }
        self.remaining_time -= amount.min(self.remaining_time);
    }
}
