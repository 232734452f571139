use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A half-open time range `[start, end)`. An interval with `end <= start`
/// is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Interval {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// True when the two ranges share any instant. Touching endpoints do
    /// not overlap: `[9:00, 10:00)` and `[10:00, 11:00)` are disjoint.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn contains(&self, other: &Interval) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    pub fn intersect(&self, other: &Interval) -> Option<Interval> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        if start < end {
            Some(Interval { start, end })
        } else {
            None
        }
    }

    /// Sorts intervals by start and coalesces overlapping or adjacent
    /// ones into a minimal set of disjoint intervals. Empty inputs are
    /// dropped. Busy intervals must be merged like this before slot
    /// subtraction, otherwise overlapping appointments would produce
    /// false gaps between them.
    pub fn merge(intervals: Vec<Interval>) -> Vec<Interval> {
        let mut intervals: Vec<Interval> =
            intervals.into_iter().filter(|i| !i.is_empty()).collect();
        intervals.sort_by_key(|i| i.start);

        let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
        for interval in intervals {
            match merged.last_mut() {
                Some(last) if interval.start <= last.end => {
                    last.end = last.end.max(interval.end);
                }
                _ => merged.push(interval),
            }
        }
        merged
    }
}
