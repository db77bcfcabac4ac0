//! CPU process-scheduling simulator.
//!
//! Simulates classic single-CPU scheduling policies over a finite set of
//! processes on an abstract integer time axis, and derives per-process and
//! aggregate performance metrics.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `Segment`, `Schedule`
//! - **`policy`**: FCFS, SJF, SRTF, round robin, priority, multilevel queue
//! - **`scheduler`**: Registry, simulator, metrics, timeline
//! - **`validation`**: Process-spec and configuration checks
//! - **`workload`**: Sample and random workloads
//!
//! # Example
//!
//! ```
//! use u_cpusched::policy::{Policy, RunConfig};
//! use u_cpusched::scheduler::Simulator;
//!
//! let mut sim = Simulator::new();
//! sim.register_process("P1", 0, 8, 1).unwrap();
//! sim.register_process("P2", 1, 4, 1).unwrap();
//!
//! let report = sim.run_schedule(Policy::Srtf, &RunConfig::default()).unwrap();
//! assert_eq!(report.schedule.len(), 3);
//! assert_eq!(report.result("P1").unwrap().completion_time, 12);
//! ```
//!
//! # Scope
//!
//! No I/O bursts, multiple cores, context-switch cost or wall-clock time.
//! Presentation and persistence are left to the consumer; all public types
//! implement `serde` traits for that purpose.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod error;
pub mod models;
pub mod policy;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::EngineError;
