//! Simulation entry point.
//!
//! # Flow
//!
//! 1. Check the run configuration against the chosen policy, and check
//!    that the clock cannot run past `i64::MAX`.
//! 2. Copy the registered processes and reset their run state.
//! 3. Run the policy over the copy to get the schedule.
//! 4. Derive per-process metrics and aggregate statistics.
//!
//! The registry is never mutated by a run, so repeated runs with the same
//! inputs return identical reports.

use log::debug;
use serde::{Deserialize, Serialize};

use super::metrics::{compute_metrics, ProcessResult, RunStatistics};
use super::registry::ProcessRegistry;
use super::timeline::Timeline;
use crate::error::EngineError;
use crate::models::{Process, Schedule};
use crate::policy::{Policy, RunConfig};
use crate::validation::{validate_time_horizon, ValidationError};

/// Everything one scheduling run produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Policy that produced the schedule.
    pub policy: Policy,
    /// Configuration the run used.
    pub config: RunConfig,
    /// Execution segments in dispatch order.
    pub schedule: Schedule,
    /// Per-process metrics, in registration order.
    pub results: Vec<ProcessResult>,
    /// Aggregate statistics.
    pub statistics: RunStatistics,
}

impl RunReport {
    /// Gantt-style view of the schedule.
    pub fn timeline(&self) -> Timeline {
        Timeline::build(&self.schedule)
    }

    /// Result of one process.
    pub fn result(&self, process_id: &str) -> Option<&ProcessResult> {
        self.results.iter().find(|r| r.id == process_id)
    }
}

/// Runs one policy over a set of processes.
///
/// The input is not modified; the policy works on a reset copy.
///
/// # Errors
/// - [`EngineError::InvalidConfig`] for a non-positive round-robin quantum
/// - [`EngineError::InvalidWorkload`] if the run could overflow the clock
/// - [`EngineError::MissingSegments`] if a process was left unscheduled
pub fn run(
    processes: &[Process],
    policy: Policy,
    config: &RunConfig,
) -> Result<RunReport, EngineError> {
    config.validate_for(policy)?;
    let horizon = validate_time_horizon(
        processes,
        config.entries_per_process(policy, processes.len()),
    )
    .map_err(EngineError::InvalidWorkload)?;

    let mut working = processes.to_vec();
    debug!(
        "running {} over {} processes ({:?}, horizon<={})",
        policy.key(),
        working.len(),
        config,
        horizon
    );

    let schedule = policy.schedule(&mut working, config);
    let results = compute_metrics(&mut working, &schedule)?;
    let statistics = RunStatistics::calculate(&results);

    debug!(
        "{} finished: {} segments, total_time={}, avg_waiting={:.2}",
        policy.key(),
        schedule.len(),
        statistics.total_time,
        statistics.avg_waiting
    );

    Ok(RunReport {
        policy,
        config: *config,
        schedule,
        results,
        statistics,
    })
}

/// Scheduling simulator over a process registry.
///
/// # Example
///
/// ```
/// use u_cpusched::policy::{Policy, RunConfig};
/// use u_cpusched::scheduler::Simulator;
///
/// let mut sim = Simulator::new();
/// sim.register_process("P1", 0, 4, 1).unwrap();
/// sim.register_process("P2", 1, 3, 1).unwrap();
/// sim.register_process("P3", 2, 1, 1).unwrap();
///
/// let report = sim.run_schedule(Policy::Fcfs, &RunConfig::default()).unwrap();
/// assert_eq!(report.result("P3").unwrap().waiting_time, 5);
/// assert_eq!(report.statistics.total_time, 8);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    registry: ProcessRegistry,
}

impl Simulator {
    /// Creates a simulator with an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a simulator over an existing registry.
    pub fn with_registry(registry: ProcessRegistry) -> Self {
        Self { registry }
    }

    /// The process registry.
    pub fn registry(&self) -> &ProcessRegistry {
        &self.registry
    }

    /// Mutable access to the process registry.
    pub fn registry_mut(&mut self) -> &mut ProcessRegistry {
        &mut self.registry
    }

    /// Registers a process. See [`ProcessRegistry::register_process`].
    pub fn register_process(
        &mut self,
        id: impl Into<String>,
        arrival_time: i64,
        burst_time: i64,
        priority: i32,
    ) -> Result<(), ValidationError> {
        self.registry
            .register_process(id, arrival_time, burst_time, priority)
    }

    /// Removes a process by ID.
    pub fn remove_process(&mut self, id: &str) -> Result<Process, ValidationError> {
        self.registry.remove_process(id)
    }

    /// Clears the registry.
    pub fn reset_all(&mut self) {
        self.registry.reset_all();
    }

    /// Replaces the registry content with the sample workload.
    pub fn load_sample(&mut self) {
        self.registry.load_sample();
    }

    /// Runs a policy over the registered processes.
    ///
    /// An empty registry yields an empty report.
    pub fn run_schedule(
        &self,
        policy: Policy,
        config: &RunConfig,
    ) -> Result<RunReport, EngineError> {
        run(self.registry.processes(), policy, config)
    }

    /// Runs every policy with the same configuration.
    pub fn compare_all(&self, config: &RunConfig) -> Result<Vec<RunReport>, EngineError> {
        Policy::ALL
            .iter()
            .map(|&policy| self.run_schedule(policy, config))
            .collect()
    }
}
