//! Schedule (solution) model.
//!
//! A schedule is the ordered list of execution segments a policy
//! produced. Each segment gives one process exclusive use of the CPU
//! over a half-open interval `[start_time, end_time)`.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A complete schedule produced by one policy run.
///
/// Segments are kept in dispatch order, which is non-decreasing in
/// `start_time`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Execution segments in dispatch order.
    pub segments: Vec<Segment>,
}

/// A contiguous slice of CPU time assigned to one process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Process that held the CPU.
    pub process_id: String,
    /// First tick of the slice.
    pub start_time: i64,
    /// End of the slice (exclusive).
    pub end_time: i64,
}

impl Segment {
    /// Creates a new segment.
    pub fn new(process_id: impl Into<String>, start_time: i64, end_time: i64) -> Self {
        Self {
            process_id: process_id.into(),
            start_time,
            end_time,
        }
    }

    /// Length of the slice (end - start).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment.
    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the schedule has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Latest end time across all segments.
    pub fn makespan(&self) -> i64 {
        self.segments.iter().map(|s| s.end_time).max().unwrap_or(0)
    }

    /// Total CPU time covered by all segments.
    pub fn busy_time(&self) -> i64 {
        self.segments.iter().map(Segment::duration).sum()
    }

    /// Segments of one process, in schedule order.
    pub fn segments_for_process(&self, process_id: &str) -> Vec<&Segment> {
        self.segments
            .iter()
            .filter(|s| s.process_id == process_id)
            .collect()
    }

    /// Completion time of a process (latest end of its segments).
    pub fn completion_time(&self, process_id: &str) -> Option<i64> {
        self.segments
            .iter()
            .filter(|s| s.process_id == process_id)
            .map(|s| s.end_time)
            .max()
    }

    /// CPU time received per process.
    pub fn busy_time_by_process(&self) -> HashMap<String, i64> {
        let mut busy: HashMap<String, i64> = HashMap::new();
        for s in &self.segments {
            *busy.entry(s.process_id.clone()).or_insert(0) += s.duration();
        }
        busy
    }

    /// Distinct process IDs in order of first appearance.
    pub fn process_order(&self) -> Vec<&str> {
        let mut order: Vec<&str> = Vec::new();
        for s in &self.segments {
            if !order.contains(&s.process_id.as_str()) {
                order.push(&s.process_id);
            }
        }
        order
    }

    /// Whether segments are in non-decreasing start order and never overlap.
    pub fn is_well_ordered(&self) -> bool {
        self.segments
            .windows(2)
            .all(|w| w[0].start_time <= w[1].start_time && w[0].end_time <= w[1].start_time)
    }
}
