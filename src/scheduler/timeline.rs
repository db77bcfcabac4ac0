//! Gantt-style timeline view of a schedule.
//!
//! Groups segments into one row per process (rows ordered by first
//! appearance in the schedule) and collects the distinct segment
//! boundaries as time markers. Extents are fractions of the last marker,
//! ready for proportional rendering.

use serde::{Deserialize, Serialize};

use crate::models::{Schedule, Segment};

/// Per-process rows plus sorted time markers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    /// One row per process, in order of first appearance.
    pub rows: Vec<TimelineRow>,
    /// Sorted, distinct start and end times of every segment.
    pub markers: Vec<i64>,
}

/// The segments of one process, in schedule order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineRow {
    /// Process identifier.
    pub process_id: String,
    /// Segments of this process.
    pub segments: Vec<Segment>,
}

/// A proportionally placed block of a timeline row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineBlock {
    /// Segment start / horizon (0.0..=1.0).
    pub offset: f64,
    /// Segment duration / horizon (0.0..=1.0).
    pub width: f64,
    /// `"start-end"` label.
    pub label: String,
}

impl Timeline {
    /// Builds the timeline of a schedule.
    ///
    /// # Example
    /// ```
    /// use u_cpusched::models::{Schedule, Segment};
    /// use u_cpusched::scheduler::Timeline;
    ///
    /// let mut schedule = Schedule::new();
    /// schedule.push(Segment::new("P1", 0, 2));
    /// schedule.push(Segment::new("P2", 2, 5));
    /// let timeline = Timeline::build(&schedule);
    /// assert_eq!(timeline.markers, vec![0, 2, 5]);
    /// ```
    pub fn build(schedule: &Schedule) -> Self {
        let rows = schedule
            .process_order()
            .into_iter()
            .map(|id| TimelineRow {
                process_id: id.to_string(),
                segments: schedule
                    .segments_for_process(id)
                    .into_iter()
                    .cloned()
                    .collect(),
            })
            .collect();

        let mut markers: Vec<i64> = schedule
            .segments
            .iter()
            .flat_map(|s| [s.start_time, s.end_time])
            .collect();
        markers.sort_unstable();
        markers.dedup();

        Self { rows, markers }
    }

    /// Largest marker, or 0 for an empty timeline.
    pub fn horizon(&self) -> i64 {
        self.markers.last().copied().unwrap_or(0)
    }

    /// `(offset, width)` of a segment as fractions of the horizon.
    pub fn extent(&self, segment: &Segment) -> (f64, f64) {
        let horizon = self.horizon();
        if horizon <= 0 {
            return (0.0, 0.0);
        }
        let horizon = horizon as f64;
        (
            segment.start_time as f64 / horizon,
            segment.duration() as f64 / horizon,
        )
    }

    /// Proportional blocks of one row.
    pub fn blocks(&self, row: &TimelineRow) -> Vec<TimelineBlock> {
        row.segments
            .iter()
            .map(|s| {
                let (offset, width) = self.extent(s);
                TimelineBlock {
                    offset,
                    width,
                    label: format!("{}-{}", s.start_time, s.end_time),
                }
            })
            .collect()
    }

    /// Row of a process.
    pub fn row(&self, process_id: &str) -> Option<&TimelineRow> {
        self.rows.iter().find(|r| r.process_id == process_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rr_schedule() -> Schedule {
        let mut s = Schedule::new();
        s.push(Segment::new("P2", 0, 2));
        s.push(Segment::new("P1", 2, 4));
        s.push(Segment::new("P2", 4, 6));
        s.push(Segment::new("P1", 6, 8));
        s
    }

    #[test]
    fn test_rows_follow_first_appearance() {
        let t = Timeline::build(&rr_schedule());
        let ids: Vec<&str> = t.rows.iter().map(|r| r.process_id.as_str()).collect();
        assert_eq!(ids, vec!["P2", "P1"]);
        assert_eq!(t.rows[0].segments.len(), 2);
        assert_eq!(t.rows[0].segments[1].start_time, 4);
    }

    #[test]
    fn test_markers_sorted_distinct() {
        let t = Timeline::build(&rr_schedule());
        assert_eq!(t.markers, vec![0, 2, 4, 6, 8]);
        assert_eq!(t.horizon(), 8);
    }

    #[test]
    fn test_markers_include_idle_gaps() {
        let mut s = Schedule::new();
        s.push(Segment::new("P1", 1, 3));
        s.push(Segment::new("P2", 7, 9));
        assert_eq!(Timeline::build(&s).markers, vec![1, 3, 7, 9]);
    }

    #[test]
    fn test_extent_and_blocks() {
        let t = Timeline::build(&rr_schedule());
        let (offset, width) = t.extent(&Segment::new("P1", 2, 4));
        assert!((offset - 0.25).abs() < 1e-10);
        assert!((width - 0.25).abs() < 1e-10);

        let row = t.row("P1").unwrap();
        let blocks = t.blocks(row);
        assert_eq!(blocks[1].label, "6-8");
        assert!((blocks[1].offset - 0.75).abs() < 1e-10);
        assert!(t.row("P9").is_none());
    }

    #[test]
    fn test_empty_timeline() {
        let t = Timeline::build(&Schedule::new());
        assert!(t.rows.is_empty());
        assert!(t.markers.is_empty());
        assert_eq!(t.horizon(), 0);
        assert_eq!(t.extent(&Segment::new("P1", 0, 1)), (0.0, 0.0));
    }
}
