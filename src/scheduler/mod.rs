//! Simulation, metrics and timeline.
//!
//! Ties the policies to a process registry and derives the results a
//! consumer displays.
//!
//! # Components
//!
//! - `ProcessRegistry`: caller-owned process specifications.
//! - `Simulator` / `run`: one policy run → `RunReport`.
//! - `compute_metrics` / `RunStatistics`: completion, turnaround, waiting,
//!   response; averages, CPU utilization, throughput.
//! - `Timeline`: per-process rows and time markers for Gantt rendering.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2, 5.8
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 1.2

mod metrics;
mod registry;
mod simulator;
mod timeline;

pub use metrics::{compute_metrics, ProcessResult, RunStatistics};
pub use registry::ProcessRegistry;
pub use simulator::{run, RunReport, Simulator};
pub use timeline::{Timeline, TimelineBlock, TimelineRow};
