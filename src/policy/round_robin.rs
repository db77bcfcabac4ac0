//! Round robin.
//!
//! # Algorithm
//!
//! 1. Admit every arrived, unfinished process into a FIFO ready queue,
//!    scanning in registration order and skipping processes already queued.
//! 2. Dequeue the head and run it for `min(remaining, quantum)`.
//! 3. Admit processes that arrived up to the end of that slice.
//! 4. If the process still has work, append it behind those arrivals.
//!
//! When the queue is empty the clock jumps to the next arrival.
//!
//! # Complexity
//! O(s * n) where s = number of slices, n = processes (membership checks
//! scan the queue).

use std::collections::VecDeque;

use super::{dispatch, idle_until, next_arrival, RunConfig, SchedulingPolicy};
use crate::models::{Process, Schedule};

/// Round-robin policy using `RunConfig::quantum`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundRobin;

/// Appends arrived processes from `pending` that are neither queued nor running.
fn admit(
    processes: &[Process],
    pending: &[usize],
    queue: &mut VecDeque<usize>,
    now: i64,
    running: Option<usize>,
) {
    for &i in pending {
        if Some(i) != running && processes[i].has_arrived(now) && !queue.contains(&i) {
            queue.push_back(i);
        }
    }
}

impl SchedulingPolicy for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    /// A non-positive quantum is clamped to 1. The simulator rejects it
    /// before the run starts.
    fn schedule(&self, processes: &mut [Process], config: &RunConfig) -> Schedule {
        let quantum = config.quantum.max(1);
        let mut schedule = Schedule::new();
        let mut pending: Vec<usize> = (0..processes.len()).collect();
        let mut queue: VecDeque<usize> = VecDeque::new();
        let mut now = 0;

        while !pending.is_empty() {
            admit(processes, &pending, &mut queue, now, None);

            let Some(idx) = queue.pop_front() else {
                let Some(next) = next_arrival(processes, &pending) else {
                    break;
                };
                now = idle_until(now, next);
                continue;
            };

            let amount = processes[idx].remaining_time.min(quantum);
            now = dispatch(processes, idx, now, amount, &mut schedule);

            admit(processes, &pending, &mut queue, now, Some(idx));
            if processes[idx].is_finished() {
                pending.retain(|&i| i != idx);
            } else {
                queue.push_back(idx);
            }
        }

        schedule
    }

    fn description(&self) -> &'static str {
        "Each ready process gets at most one time quantum per turn, cycling \
         through a FIFO queue. Fair, starvation-free, good response time."
    }
}
