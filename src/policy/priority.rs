//! Non-preemptive priority scheduling.
//!
//! Same selection loop as SJF, keyed on `priority` (lower value = higher
//! priority). A selected process runs to completion; a later arrival with
//! better priority waits. Without aging, low-priority work can starve.

use super::{schedule_non_preemptive, RunConfig, SchedulingPolicy};
use crate::models::{Process, Schedule};

/// Non-preemptive priority policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityScheduling;

impl SchedulingPolicy for PriorityScheduling {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn schedule(&self, processes: &mut [Process], _config: &RunConfig) -> Schedule {
        schedule_non_preemptive(processes, |p| p.priority)
    }

    fn description(&self) -> &'static str {
        "Runs the arrived process with the best priority (lowest value) to \
         completion. May starve low-priority processes."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::test_support::{expect, procs, triples};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_priority_lower_value_first() {
        let mut ps = procs(&[("P1", 0, 5, 2), ("P2", 0, 3, 1)]);
        let s = PriorityScheduling.schedule(&mut ps, &RunConfig::default());
        assert_eq!(triples(&s), expect(&[("P2", 0, 3), ("P1", 3, 8)]));
    }

    #[test]
    fn test_priority_no_preemption() {
        let mut ps = procs(&[("low", 0, 6, 5), ("high", 1, 2, 0)]);
        let s = PriorityScheduling.schedule(&mut ps, &RunConfig::default());
        assert_eq!(triples(&s), expect(&[("low", 0, 6), ("high", 6, 8)]));
    }

    #[test]
    fn test_priority_tie_uses_registration_order() {
        let mut ps = procs(&[("A", 0, 1, 0), ("B", 1, 4, 3), ("C", 0, 4, 3)]);
        let s = PriorityScheduling.schedule(&mut ps, &RunConfig::default());
        assert_eq!(
            triples(&s),
            expect(&[("A", 0, 1), ("B", 1, 5), ("C", 5, 9)])
        );
    }

    #[test]
    fn test_priority_sample_workload() {
        let mut ps = procs(&[
            ("P1", 0, 4, 2),
            ("P2", 1, 3, 1),
            ("P3", 2, 1, 3),
            ("P4", 3, 5, 2),
            ("P5", 4, 2, 1),
        ]);
        let s = PriorityScheduling.schedule(&mut ps, &RunConfig::default());
        assert_eq!(
            triples(&s),
            expect(&[
                ("P1", 0, 4),
                ("P2", 4, 7),
                ("P5", 7, 9),
                ("P4", 9, 14),
                ("P3", 14, 15),
            ])
        );
    }
}
