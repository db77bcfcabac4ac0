//! First-Come-First-Serve.
//!
//! # Algorithm
//!
//! 1. Order processes by arrival time (stable, so ties keep registration order).
//! 2. Run each one for its full burst, idling until it arrives if needed.
//!
//! Non-preemptive: every process gets exactly one segment.

use super::{dispatch, idle_until, RunConfig, SchedulingPolicy};
use crate::models::{Process, Schedule};

/// First-Come-First-Serve policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn schedule(&self, processes: &mut [Process], _config: &RunConfig) -> Schedule {
        let mut order: Vec<usize> = (0..processes.len()).collect();
        order.sort_by_key(|&i| processes[i].arrival_time);

        let mut schedule = Schedule::new();
        let mut now = 0;
        for idx in order {
            let (arrival, burst) = (processes[idx].arrival_time, processes[idx].burst_time);
            if now < arrival {
                now = idle_until(now, arrival);
            }
            now = dispatch(processes, idx, now, burst, &mut schedule);
        }
        schedule
    }

    fn description(&self) -> &'static str {
        "Runs processes in arrival order, each to completion. Simple, but short \
         processes can be stuck behind long ones (convoy effect)."
    }
}
