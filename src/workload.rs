//! Workload generation.
//!
//! Sample and random process sets for simulations and tests. Every
//! generated process passes registry validation.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::Process;

/// Parameters for random workloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadSpec {
    /// Number of processes.
    pub count: usize,
    /// Largest arrival time (inclusive).
    pub max_arrival: i64,
    /// Largest burst time (inclusive, at least 1).
    pub max_burst: i64,
    /// Priorities are drawn from `1..=priority_levels`.
    pub priority_levels: i32,
}

impl WorkloadSpec {
    /// Creates a spec for `count` processes with default ranges.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    /// Sets the largest arrival time.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the largest burst time.
    pub fn with_max_burst(mut self, max_burst: i64) -> Self {
        self.max_burst = max_burst;
        self
    }

    /// Sets the number of priority levels.
    pub fn with_priority_levels(mut self, levels: i32) -> Self {
        self.priority_levels = levels;
        self
    }
}

impl Default for WorkloadSpec {
    fn default() -> Self {
        Self {
            count: 5,
            max_arrival: 10,
            max_burst: 8,
            priority_levels: 3,
        }
    }
}

/// The five-process sample workload: `(id, arrival, burst, priority)`.
const SAMPLE: [(&str, i64, i64, i32); 5] = [
    ("P1", 0, 4, 2),
    ("P2", 1, 3, 1),
    ("P3", 2, 1, 3),
    ("P4", 3, 5, 2),
    ("P5", 4, 2, 1),
];

/// Built-in sample workload.
pub fn sample_processes() -> Vec<Process> {
    SAMPLE
        .iter()
        .map(|&(id, arrival, burst, priority)| {
            Process::new(id, arrival, burst).with_priority(priority)
        })
        .collect()
}

/// Random workload with IDs `P1..Pn`.
///
/// Ranges are clamped so the result is always valid: arrival ≥ 0,
/// burst ≥ 1, priority ≥ 1.
pub fn random_processes<R: Rng>(rng: &mut R, spec: &WorkloadSpec) -> Vec<Process> {
    let max_arrival = spec.max_arrival.max(0);
    let max_burst = spec.max_burst.max(1);
    let levels = spec.priority_levels.max(1);

    (1..=spec.count)
        .map(|n| {
            Process::new(
                format!("P{n}"),
                rng.random_range(0..=max_arrival),
                rng.random_range(1..=max_burst),
            )
            .with_priority(rng.random_range(1..=levels))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_processes;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_sample_processes() {
        let ps = sample_processes();
        assert_eq!(ps.len(), 5);
        assert_eq!(ps[3].id, "P4");
        assert_eq!(ps[3].burst_time, 5);
        assert_eq!(ps[4].priority, 1);
        assert!(validate_processes(&ps).is_ok());
    }

    #[test]
    fn test_random_processes_valid() {
        let mut rng = SmallRng::seed_from_u64(1);
        let spec = WorkloadSpec::new(20)
            .with_max_arrival(5)
            .with_max_burst(3)
            .with_priority_levels(2);
        let ps = random_processes(&mut rng, &spec);
        assert_eq!(ps.len(), 20);
        assert_eq!(ps[19].id, "P20");
        assert!(validate_processes(&ps).is_ok());
        assert!(ps.iter().all(|p| (0..=5).contains(&p.arrival_time)));
        assert!(ps.iter().all(|p| (1..=3).contains(&p.burst_time)));
        assert!(ps.iter().all(|p| (1..=2).contains(&p.priority)));
    }

    #[test]
    fn test_random_processes_deterministic() {
        let spec = WorkloadSpec::default();
        let a = random_processes(&mut SmallRng::seed_from_u64(9), &spec);
        let b = random_processes(&mut SmallRng::seed_from_u64(9), &spec);
        assert_eq!(a, b);
    }

    #[test]
    fn test_degenerate_spec_clamped() {
        let mut rng = SmallRng::seed_from_u64(3);
        let spec = WorkloadSpec::new(4)
            .with_max_arrival(-1)
            .with_max_burst(0)
            .with_priority_levels(0);
        let ps = random_processes(&mut rng, &spec);
        assert!(ps.iter().all(|p| p.arrival_time == 0 && p.burst_time == 1));
        assert!(validate_processes(&ps).is_ok());
    }
}
