//! Shortest-first policies.
//!
//! # Algorithms
//!
//! - **SJF** (non-preemptive): among arrived processes, run the one with the
//!   smallest burst time to completion.
//! - **SRTF** (preemptive): among arrived processes, run the one with the
//!   smallest remaining time until it finishes or the next process arrives,
//!   whichever comes first. Re-deciding at every arrival lets a shorter
//!   newcomer preempt at the earliest possible instant.
//!
//! Ties go to the first process in registration order.
//!
//! # Reference
//! Schrage (1968), "A proof of the optimality of the shortest remaining
//! processing time discipline"

use super::{
    dispatch, idle_until, next_arrival, schedule_non_preemptive, select_min_by_key, RunConfig,
    SchedulingPolicy,
};
use crate::models::{Process, Schedule};

/// Shortest-Job-First (non-preemptive).
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestJobFirst;

impl SchedulingPolicy for ShortestJobFirst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn schedule(&self, processes: &mut [Process], _config: &RunConfig) -> Schedule {
        schedule_non_preemptive(processes, |p| p.burst_time)
    }

    fn description(&self) -> &'static str {
        "Runs the arrived process with the shortest burst time to completion. \
         Minimizes average waiting among non-preemptive policies, but needs \
         burst times in advance."
    }
}

/// Shortest-Remaining-Time-First (preemptive SJF).
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestRemainingTime;

impl SchedulingPolicy for ShortestRemainingTime {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn schedule(&self, processes: &mut [Process], _config: &RunConfig) -> Schedule {
        let mut schedule = Schedule::new();
        let mut pending: Vec<usize> = (0..processes.len()).collect();
        let mut now = 0;

        while !pending.is_empty() {
            let Some(idx) = select_min_by_key(processes, &pending, now, |p| p.remaining_time)
            else {
                let Some(next) = next_arrival(processes, &pending) else {
                    break;
                };
                now = idle_until(now, next);
                continue;
            };

            // Run until done or until the next arrival can contest the CPU.
            let remaining = processes[idx].remaining_time;
            let amount = pending
                .iter()
                .map(|&i| processes[i].arrival_time)
                .filter(|&arrival| arrival > now)
                .min()
                .map_or(remaining, |arrival| remaining.min(arrival - now));

            now = dispatch(processes, idx, now, amount, &mut schedule);
            if processes[idx].is_finished() {
                pending.retain(|&i| i != idx);
            }
        }

        schedule
    }

    fn description(&self) -> &'static str {
        "Preemptive SJF: the arrived process with the least remaining time holds \
         the CPU and is re-evaluated at every arrival. Optimal for average waiting time."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::test_support::{expect, procs, triples};
    use crate::workload::{random_processes, WorkloadSpec};
    use pretty_assertions::assert_eq;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    /// Tick-by-tick version of the selection loop, idling one unit at a time.
    fn unit_step(processes: &mut [Process], preemptive: bool) -> Vec<(String, i64, i64)> {
        let mut out = Vec::new();
        let mut pending: Vec<usize> = (0..processes.len()).collect();
        let mut now = 0;
        while !pending.is_empty() {
            let available: Vec<usize> = pending
                .iter()
                .copied()
                .filter(|&i| processes[i].arrival_time <= now)
                .collect();
            if available.is_empty() {
                now += 1;
                continue;
            }
            let key = |i: usize| {
                if preemptive {
                    processes[i].remaining_time
                } else {
                    processes[i].burst_time
                }
            };
            let mut best = available[0];
            for &i in &available[1..] {
                if key(i) < key(best) {
                    best = i;
                }
            }
            let amount = if preemptive {
                let until = pending
                    .iter()
                    .map(|&i| processes[i].arrival_time)
                    .filter(|&a| a > now)
                    .map(|a| a - now)
                    .min()
                    .unwrap_or(i64::MAX);
                processes[best].remaining_time.min(until)
            } else {
                processes[best].remaining_time
            };
            out.push((processes[best].id.clone(), now, now + amount));
            processes[best].remaining_time -= amount;
            now += amount;
            if processes[best].remaining_time == 0 {
                pending.retain(|&i| i != best);
            }
        }
        out
    }

    #[test]
    fn test_sjf_picks_shortest_arrived() {
        let mut ps = procs(&[("P1", 0, 7, 1), ("P2", 2, 4, 1), ("P3", 4, 1, 1), ("P4", 5, 4, 1)]);
        let s = ShortestJobFirst.schedule(&mut ps, &RunConfig::default());
        assert_eq!(
            triples(&s),
            expect(&[("P1", 0, 7), ("P3", 7, 8), ("P2", 8, 12), ("P4", 12, 16)])
        );
    }

    #[test]
    fn test_sjf_tie_uses_registration_order() {
        // P2 arrives earlier but P1 is registered first.
        let mut ps = procs(&[("P0", 0, 5, 1), ("P1", 3, 2, 1), ("P2", 1, 2, 1)]);
        let s = ShortestJobFirst.schedule(&mut ps, &RunConfig::default());
        assert_eq!(
            triples(&s),
            expect(&[("P0", 0, 5), ("P1", 5, 7), ("P2", 7, 9)])
        );
    }

    #[test]
    fn test_sjf_idle_jump() {
        let mut ps = procs(&[("P1", 4, 2, 1), ("P2", 9, 1, 1)]);
        let s = ShortestJobFirst.schedule(&mut ps, &RunConfig::default());
        assert_eq!(triples(&s), expect(&[("P1", 4, 6), ("P2", 9, 10)]));
    }

    #[test]
    fn test_srtf_preemption() {
        let mut ps = procs(&[("P1", 0, 8, 1), ("P2", 1, 4, 1)]);
        let s = ShortestRemainingTime.schedule(&mut ps, &RunConfig::default());
        assert_eq!(
            triples(&s),
            expect(&[("P1", 0, 1), ("P2", 1, 5), ("P1", 5, 12)])
        );
        assert_eq!(ps[0].start_time, Some(0));
        assert_eq!(ps[1].start_time, Some(1));
        assert!(ps.iter().all(Process::is_finished));
    }

    #[test]
    fn test_srtf_longer_arrival_splits_segment() {
        // P2 does not preempt, but its arrival is still a decision point.
        let mut ps = procs(&[("P1", 0, 3, 1), ("P2", 1, 5, 1)]);
        let s = ShortestRemainingTime.schedule(&mut ps, &RunConfig::default());
        assert_eq!(
            triples(&s),
            expect(&[("P1", 0, 1), ("P1", 1, 3), ("P2", 3, 8)])
        );
    }

    #[test]
    fn test_srtf_tie_keeps_running_first_registered() {
        let mut ps = procs(&[("P1", 0, 4, 1), ("P2", 2, 2, 1)]);
        let s = ShortestRemainingTime.schedule(&mut ps, &RunConfig::default());
        // At t=2 both have 2 left; P1 comes first in registration order.
        assert_eq!(
            triples(&s),
            expect(&[("P1", 0, 2), ("P1", 2, 4), ("P2", 4, 6)])
        );
    }

    #[test]
    fn test_idle_jump_matches_unit_stepping() {
        let mut rng = SmallRng::seed_from_u64(7);
        let spec = WorkloadSpec::new(6).with_max_arrival(30);
        for _ in 0..50 {
            let base = random_processes(&mut rng, &spec);

            let mut a = base.clone();
            let mut b = base.clone();
            let sjf = ShortestJobFirst.schedule(&mut a, &RunConfig::default());
            assert_eq!(triples(&sjf), unit_step(&mut b, false));

            let mut a = base.clone();
            let mut b = base;
            let srtf = ShortestRemainingTime.schedule(&mut a, &RunConfig::default());
            assert_eq!(triples(&srtf), unit_step(&mut b, true));
        }
    }
}
