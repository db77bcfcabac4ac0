//! Multilevel queue.
//!
//! # Algorithm
//!
//! Three static FIFO queues selected by priority value:
//!
//! | Priority | Queue |
//! |----------|-------|
//! | 1 | High |
//! | 2 | Medium |
//! | anything else | Low |
//!
//! Each pass scans unserved processes in registration order and queues the
//! arrived ones. The head of the highest non-empty queue then runs its full
//! burst. No preemption, no aging, no feedback between levels.
//!
//! # Duplicate admission
//!
//! With `RunConfig::strict_no_duplicate` (the default) a process already
//! waiting in its queue is not queued again. Without the guard, every pass
//! re-queues each waiting process. A stale entry served after the process
//! already ran produces an extra full-burst segment for it, and also drops
//! the most recently registered unserved process. A dropped process that
//! was not yet queued never runs, which surfaces as
//! [`EngineError::MissingSegments`](crate::EngineError::MissingSegments)
//! once metrics are derived.
//!
//! Either way each serve made while processes are still unserved removes
//! exactly one of them, so no process is queued more often than there are
//! processes.

use std::collections::VecDeque;

use log::warn;
use serde::{Deserialize, Serialize};

use super::{dispatch, idle_until, next_arrival, RunConfig, SchedulingPolicy};
use crate::models::{Process, Schedule};

/// Queue level of the multilevel policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueueLevel {
    /// Priority 1.
    High,
    /// Priority 2.
    Medium,
    /// Any other priority.
    Low,
}

impl QueueLevel {
    /// Level a priority value maps to.
    pub fn for_priority(priority: i32) -> Self {
        match priority {
            1 => QueueLevel::High,
            2 => QueueLevel::Medium,
            _ => QueueLevel::Low,
        }
    }

    fn index(self) -> usize {
        match self {
            QueueLevel::High => 0,
            QueueLevel::Medium => 1,
            QueueLevel::Low => 2,
        }
    }
}

/// Multilevel queue policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultilevelQueue;

impl SchedulingPolicy for MultilevelQueue {
    fn name(&self) -> &'static str {
        "MLQ"
    }

    fn schedule(&self, processes: &mut [Process], config: &RunConfig) -> Schedule {
        let mut schedule = Schedule::new();
        let mut pending: Vec<usize> = (0..processes.len()).collect();
        let mut queues: [VecDeque<usize>; 3] = Default::default();
        let mut now = 0;

        while !pending.is_empty() || queues.iter().any(|q| !q.is_empty()) {
            for &i in &pending {
                let process = &processes[i];
                if !process.has_arrived(now) {
                    continue;
                }
                let queue = &mut queues[QueueLevel::for_priority(process.priority).index()];
                if config.strict_no_duplicate && queue.contains(&i) {
                    continue;
                }
                queue.push_back(i);
            }

            let Some(idx) = queues.iter_mut().find_map(VecDeque::pop_front) else {
                let Some(next) = next_arrival(processes, &pending) else {
                    break;
                };
                now = idle_until(now, next);
                continue;
            };

            if processes[idx].is_finished() {
                warn!(
                    "multilevel queue served '{}' again at t={} (duplicate queue entry)",
                    processes[idx].id, now
                );
            }
            let burst = processes[idx].burst_time;
            now = dispatch(processes, idx, now, burst, &mut schedule);

            match pending.iter().position(|&i| i == idx) {
                Some(pos) => {
                    pending.remove(pos);
                }
                None => {
                    if let Some(dropped) = pending.pop() {
                        warn!(
                            "multilevel queue dropped '{}' after serving stale entry of '{}'",
                            processes[dropped].id, processes[idx].id
                        );
                    }
                }
            }
        }

        schedule
    }

    fn description(&self) -> &'static str {
        "Splits processes into high, medium and low queues by priority and always \
         serves the highest non-empty queue first, each process to completion."
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

    /// Pass-by-pass version of the queue loop, idling one unit at a time.
    fn unit_step(processes: &mut [Process], strict: bool) -> Vec<(String, i64, i64)> {
        let mut out = Vec::new();
        let mut pending: Vec<usize> = (0..processes.len()).collect();
        let mut levels: [Vec<usize>; 3] = Default::default();
        let mut now = 0;
        loop {
            for &i in &pending {
                if processes[i].arrival_time > now {
                    continue;
                }
                let level = match processes[i].priority {
                    1 => 0,
                    2 => 1,
                    _ => 2,
                };
                if strict && levels[level].contains(&i) {
                    continue;
                }
                levels[level].push(i);
            }
            let Some(level) = levels.iter().position(|q| !q.is_empty()) else {
                if pending.is_empty() {
                    break;
                }
                now += 1;
                continue;
            };
            let idx = levels[level].remove(0);
            let burst = processes[idx].burst_time;
            out.push((processes[idx].id.clone(), now, now + burst));
            now += burst;
            match pending.iter().position(|&i| i == idx) {
                Some(pos) => {
                    pending.remove(pos);
                }
                None => {
                    pending.pop();
                }
            }
        }
        out
    }

    fn strict() -> RunConfig {
        RunConfig::new().with_strict_no_duplicate(true)
    }

    fn unguarded() -> RunConfig {
        RunConfig::new().with_strict_no_duplicate(false)
    }

    #[test]
    fn test_level_mapping() {
        assert_eq!(QueueLevel::for_priority(1), QueueLevel::High);
        assert_eq!(QueueLevel::for_priority(2), QueueLevel::Medium);
        assert_eq!(QueueLevel::for_priority(3), QueueLevel::Low);
        assert_eq!(QueueLevel::for_priority(0), QueueLevel::Low);
        assert_eq!(QueueLevel::for_priority(-4), QueueLevel::Low);
    }

    #[test]
    fn test_high_before_low() {
        let mut ps = procs(&[("low", 0, 2, 3), ("high", 0, 2, 1), ("mid", 0, 2, 2)]);
        let s = MultilevelQueue.schedule(&mut ps, &strict());
        assert_eq!(
            triples(&s),
            expect(&[("high", 0, 2), ("mid", 2, 4), ("low", 4, 6)])
        );
    }

    #[test]
    fn test_non_preemptive() {
        let mut ps = procs(&[("low", 0, 5, 3), ("high", 1, 1, 1)]);
        let s = MultilevelQueue.schedule(&mut ps, &strict());
        assert_eq!(triples(&s), expect(&[("low", 0, 5), ("high", 5, 6)]));
    }

    #[test]
    fn test_strict_mode_one_segment_each() {
        let mut ps = procs(&[("P1", 0, 5, 1), ("P2", 0, 3, 3), ("P3", 1, 2, 2)]);
        let s = MultilevelQueue.schedule(&mut ps, &strict());
        assert_eq!(
            triples(&s),
            expect(&[("P1", 0, 5), ("P3", 5, 7), ("P2", 7, 10)])
        );
    }

    #[test]
    fn test_unguarded_mode_duplicates_waiting_process() {
        let mut ps = procs(&[("P1", 0, 5, 1), ("P2", 0, 3, 3), ("P3", 1, 2, 2)]);
        let s = MultilevelQueue.schedule(&mut ps, &unguarded());
        // P2 is queued on each of the three passes it waits through.
        assert_eq!(
            triples(&s),
            expect(&[
                ("P1", 0, 5),
                ("P3", 5, 7),
                ("P2", 7, 10),
                ("P2", 10, 13),
                ("P2", 13, 16),
            ])
        );
        assert_eq!(ps[1].start_time, Some(7));
        assert_eq!(ps[1].remaining_time, 0);
    }

    #[test]
    fn test_modes_agree_without_waiting() {
        let mut a = procs(&[("P1", 0, 2, 1), ("P2", 3, 2, 2), ("P3", 6, 1, 3)]);
        let mut b = a.clone();
        let guarded = MultilevelQueue.schedule(&mut a, &strict());
        let duplicated = MultilevelQueue.schedule(&mut b, &unguarded());
        assert_eq!(guarded, duplicated);
        assert_eq!(
            triples(&guarded),
            expect(&[("P1", 0, 2), ("P2", 3, 5), ("P3", 6, 7)])
        );
    }

    #[test]
    fn test_unguarded_stale_entry_drops_last_unserved() {
        let mut ps = procs(&[("P1", 0, 1, 1), ("P2", 0, 1, 1), ("P3", 10, 1, 3)]);
        let s = MultilevelQueue.schedule(&mut ps, &unguarded());
        // The second P2 entry is served at t=2 and takes P3 out of the run.
        assert_eq!(
            triples(&s),
            expect(&[("P1", 0, 1), ("P2", 1, 2), ("P2", 2, 3)])
        );
        assert_eq!(ps[2].start_time, None);
        assert_eq!(ps[2].remaining_time, 1);
    }

    #[test]
    fn test_unguarded_dropped_process_already_queued_still_runs() {
        // P3 is queued before being dropped, so its own entry still serves it.
        let mut ps = procs(&[("P1", 0, 2, 1), ("P2", 0, 2, 1), ("P3", 0, 1, 3)]);
        let s = MultilevelQueue.schedule(&mut ps, &unguarded());
        assert_eq!(
            triples(&s),
            expect(&[
                ("P1", 0, 2),
                ("P2", 2, 4),
                ("P2", 4, 6),
                ("P3", 6, 7),
                ("P3", 7, 8),
                ("P3", 8, 9),
            ])
        );
    }

    #[test]
    fn test_idle_jump_matches_unit_stepping() {
        let mut rng = SmallRng::seed_from_u64(11);
        let spec = WorkloadSpec::new(6)
            .with_max_arrival(25)
            .with_priority_levels(4);
        for _ in 0..50 {
            let base = random_processes(&mut rng, &spec);
            for config in [strict(), unguarded()] {
                let mut a = base.clone();
                let mut b = base.clone();
                let s = MultilevelQueue.schedule(&mut a, &config);
                assert_eq!(
                    triples(&s),
                    unit_step(&mut b, config.strict_no_duplicate),
                    "{base:?}"
                );
            }
        }
    }
}
