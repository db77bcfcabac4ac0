//! CPU scheduling policies.
//!
//! Six interchangeable single-CPU policies, each turning a set of
//! processes into an ordered [`Schedule`] of execution segments.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::models::Process;
//! use u_cpusched::policy::{Policy, RunConfig};
//!
//! let mut processes = vec![Process::new("P1", 0, 4), Process::new("P2", 1, 3)];
//! let schedule = Policy::RoundRobin.schedule(&mut processes, &RunConfig::default());
//! assert_eq!(schedule.len(), 4);
//! ```
//!
//! # Time Axis
//!
//! All policies share one discrete clock starting at t=0. While a process
//! runs, the clock advances by the slice length. While nothing is ready,
//! the clock jumps straight to the earliest pending arrival; this yields
//! the same schedule as stepping one tick at a time.
//!
//! # Tie-breaking
//!
//! Selection is a linear scan over processes in registration order, and
//! the first process with the best key wins.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod config;
mod fcfs;
mod multilevel;
mod priority;
mod round_robin;
mod shortest;

pub use config::RunConfig;
pub use fcfs::Fcfs;
pub use multilevel::{MultilevelQueue, QueueLevel};
pub use priority::PriorityScheduling;
pub use round_robin::RoundRobin;
pub use shortest::{ShortestJobFirst, ShortestRemainingTime};

use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};
use std::str::FromStr;

use crate::models::{Process, Schedule, Segment};

/// A CPU scheduling policy.
///
/// # Contract
/// `schedule` expects every process in its freshly reset state
/// (see [`Process::reset`]). It sets `start_time` on first dispatch and
/// consumes `remaining_time`, and returns segments in dispatch order.
/// An empty process slice yields an empty schedule.
pub trait SchedulingPolicy: Send + Sync + Debug {
    /// Policy name (e.g., "FCFS", "SRTF").
    fn name(&self) -> &'static str;

    /// Produces the schedule for the given processes.
    fn schedule(&self, processes: &mut [Process], config: &RunConfig) -> Schedule;

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Selector over the built-in policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// First-Come-First-Serve.
    Fcfs,
    /// Shortest-Job-First (non-preemptive).
    Sjf,
    /// Shortest-Remaining-Time-First (preemptive).
    Srtf,
    /// Round robin with a fixed quantum.
    RoundRobin,
    /// Non-preemptive priority.
    Priority,
    /// Three static priority-level queues.
    Multilevel,
}

impl Policy {
    /// All policies, in presentation order.
    pub const ALL: [Policy; 6] = [
        Policy::Fcfs,
        Policy::Sjf,
        Policy::Srtf,
        Policy::RoundRobin,
        Policy::Priority,
        Policy::Multilevel,
    ];

    /// Short key used for parsing (`"fcfs"`, `"rr"`, ...).
    pub fn key(self) -> &'static str {
        match self {
            Policy::Fcfs => "fcfs",
            Policy::Sjf => "sjf",
            Policy::Srtf => "srtf",
            Policy::RoundRobin => "rr",
            Policy::Priority => "priority",
            Policy::Multilevel => "multilevel",
        }
    }

    /// Human-readable policy name.
    pub fn display_name(self) -> &'static str {
        match self {
            Policy::Fcfs => "First Come First Serve (FCFS)",
            Policy::Sjf => "Shortest Job First (SJF)",
            Policy::Srtf => "Shortest Remaining Time First (SRTF)",
            Policy::RoundRobin => "Round Robin (RR)",
            Policy::Priority => "Priority Scheduling",
            Policy::Multilevel => "Multilevel Queue",
        }
    }

    /// Whether the policy can interrupt a running process.
    pub fn is_preemptive(self) -> bool {
        matches!(self, Policy::Srtf | Policy::RoundRobin)
    }

    /// Whether the policy reads `RunConfig::quantum`.
    pub fn uses_quantum(self) -> bool {
        self == Policy::RoundRobin
    }

    /// Whether the policy reads `Process::priority`.
    pub fn uses_priority(self) -> bool {
        matches!(self, Policy::Priority | Policy::Multilevel)
    }

    /// The policy implementation.
    pub fn implementation(self) -> &'static dyn SchedulingPolicy {
        match self {
            Policy::Fcfs => &Fcfs,
            Policy::Sjf => &ShortestJobFirst,
            Policy::Srtf => &ShortestRemainingTime,
            Policy::RoundRobin => &RoundRobin,
            Policy::Priority => &PriorityScheduling,
            Policy::Multilevel => &MultilevelQueue,
        }
    }

    /// Policy description.
    pub fn description(self) -> &'static str {
        self.implementation().description()
    }

    /// Resets every process, then schedules them with this policy.
    ///
    /// Input is not validated here; see
    /// [`run`](crate::scheduler::run) for the checked entry point.
    pub fn schedule(self, processes: &mut [Process], config: &RunConfig) -> Schedule {
        processes.iter_mut().for_each(Process::reset);
        self.implementation().schedule(processes, config)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Error returned when a policy key is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePolicyError(String);

impl fmt::Display for ParsePolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown scheduling policy '{}'", self.0)
    }
}

impl std::error::Error for ParsePolicyError {}

impl FromStr for Policy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        match key.as_str() {
            "fcfs" => Ok(Policy::Fcfs),
            "sjf" => Ok(Policy::Sjf),
            "srtf" => Ok(Policy::Srtf),
            "rr" | "round_robin" => Ok(Policy::RoundRobin),
            "priority" => Ok(Policy::Priority),
            "multilevel" | "mlq" => Ok(Policy::Multilevel),
            _ => Err(ParsePolicyError(s.to_string())),
        }
    }
}

// ======================== Shared engine helpers ========================

/// Runs `processes[idx]` for `amount` ticks from `now` and records the
/// segment. Returns the new clock value.
///
/// The clock saturates at `i64::MAX`; `run` rejects workloads that could
/// reach it, so only direct policy calls can observe a clamped segment.
pub(crate) fn dispatch(
    processes: &mut [Process],
    idx: usize,
    now: i64,
    amount: i64,
    schedule: &mut Schedule,
) -> i64 {
    let process = &mut processes[idx];
    process.execute(now, amount);
    let end = now.saturating_add(amount);
    trace!(
        "dispatch {} [{}, {}) remaining={}",
        process.id,
        now,
        end,
        process.remaining_time
    );
    schedule.push(Segment::new(process.id.clone(), now, end));
    end
}

/// Advances an idle clock to `next`.
pub(crate) fn idle_until(now: i64, next: i64) -> i64 {
    trace!("cpu idle [{now}, {next})");
    next
}

/// Earliest arrival among `pending`.
pub(crate) fn next_arrival(processes: &[Process], pending: &[usize]) -> Option<i64> {
    pending.iter().map(|&i| processes[i].arrival_time).min()
}

/// Arrived process from `pending` with the smallest key.
///
/// Ties go to the earliest entry of `pending`, which is kept in
/// registration order.
pub(crate) fn select_min_by_key<K, F>(
    processes: &[Process],
    pending: &[usize],
    now: i64,
    key: F,
) -> Option<usize>
where
    K: Ord,
    F: Fn(&Process) -> K,
{
    pending
        .iter()
        .copied()
        .filter(|&i| processes[i].has_arrived(now))
        .min_by_key(|&i| key(&processes[i]))
}

/// Non-preemptive selection loop shared by SJF and priority scheduling.
///
/// At each decision point the arrived process with the smallest key runs
/// its full burst; if nothing has arrived, the clock jumps to the next
/// arrival.
pub(crate) fn schedule_non_preemptive<K, F>(processes: &mut [Process], key: F) -> Schedule
where
    K: Ord,
    F: Fn(&Process) -> K,
{
    let mut schedule = Schedule::new();
    let mut pending: Vec<usize> = (0..processes.len()).collect();
    let mut now = 0;

    while !pending.is_empty() {
        let Some(idx) = select_min_by_key(processes, &pending, now, &key) else {
            let Some(next) = next_arrival(processes, &pending) else {
                break;
            };
            now = idle_until(now, next);
            continue;
        };

        let burst = processes[idx].burst_time;
        now = dispatch(processes, idx, now, burst, &mut schedule);
        pending.retain(|&i| i != idx);
    }

    schedule
}
