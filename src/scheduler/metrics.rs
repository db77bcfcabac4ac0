//! Per-process metrics and aggregate run statistics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Completion | Latest segment end of the process |
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first start - arrival |
//! | Total Time | Latest completion across all processes |
//! | CPU Utilization | sum(burst) / total time * 100 |
//! | Throughput | processes / total time |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{Process, Schedule};

/// A process snapshot augmented with its derived metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// Process identifier.
    pub id: String,
    /// Arrival time.
    pub arrival_time: i64,
    /// Burst time.
    pub burst_time: i64,
    /// Priority.
    pub priority: i32,
    /// Start of the first segment.
    pub start_time: i64,
    /// Latest segment end.
    pub completion_time: i64,
    /// completion - arrival.
    pub turnaround_time: i64,
    /// turnaround - burst.
    pub waiting_time: i64,
    /// start - arrival.
    pub response_time: i64,
}

/// Aggregate statistics over one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RunStatistics {
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Mean response time.
    pub avg_response: f64,
    /// Busy share of the total time, in percent.
    pub cpu_utilization: f64,
    /// Completed processes per tick.
    pub throughput: f64,
    /// Latest completion time.
    pub total_time: i64,
}

/// Derives per-process metrics from a finished run.
///
/// Fills the metric fields of every process in place and returns one
/// [`ProcessResult`] per process, in registration order.
///
/// # Errors
/// [`EngineError::MissingSegments`] if a process has no segment in the
/// schedule or was never dispatched.
pub fn compute_metrics(
    processes: &mut [Process],
    schedule: &Schedule,
) -> Result<Vec<ProcessResult>, EngineError> {
    let mut results = Vec::with_capacity(processes.len());

    for process in processes.iter_mut() {
        let missing = || EngineError::MissingSegments {
            process_id: process.id.clone(),
        };
        let completion = schedule.completion_time(&process.id).ok_or_else(missing)?;
        let start = process.start_time.ok_or_else(missing)?;

        process.completion_time = completion;
        process.turnaround_time = completion - process.arrival_time;
        process.waiting_time = process.turnaround_time - process.burst_time;
        process.response_time = start - process.arrival_time;

        results.push(ProcessResult {
            id: process.id.clone(),
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            priority: process.priority,
            start_time: start,
            completion_time: process.completion_time,
            turnaround_time: process.turnaround_time,
            waiting_time: process.waiting_time,
            response_time: process.response_time,
        });
    }

    Ok(results)
}

impl RunStatistics {
    /// Computes aggregate statistics from per-process results.
    ///
    /// An empty result set yields all zeros. A zero total time yields zero
    /// utilization and throughput.
    pub fn calculate(results: &[ProcessResult]) -> Self {
        if results.is_empty() {
            return Self::default();
        }

        let count = results.len() as f64;
        let mean = |f: fn(&ProcessResult) -> i64| {
            results.iter().map(|r| f(r) as f64).sum::<f64>() / count
        };

        let total_burst: f64 = results.iter().map(|r| r.burst_time as f64).sum();
        let total_time = results.iter().map(|r| r.completion_time).max().unwrap_or(0);

        let (cpu_utilization, throughput) = if total_time > 0 {
            (
                total_burst / total_time as f64 * 100.0,
                count / total_time as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            avg_turnaround: mean(|r| r.turnaround_time),
            avg_waiting: mean(|r| r.waiting_time),
            avg_response: mean(|r| r.response_time),
            cpu_utilization,
            throughput,
            total_time,
        }
    }
}
