use chrono::{DateTime, Duration, Utc};

use crate::models::service::ServiceTiming;
use crate::scheduling::interval::Interval;

/// Default slot discretization when the caller does not ask for one.
pub const DEFAULT_GRANULARITY_MINUTES: i64 = 15;

/// Inputs for one availability computation: the stylist's resolved working
/// window for the date, the requested service's timing, and the stylist's
/// committed busy intervals (buffers already included in each interval).
#[derive(Debug, Clone)]
pub struct SlotQuery {
    pub window: Interval,
    pub timing: ServiceTiming,
    pub busy: Vec<Interval>,
    pub granularity: Duration,
    /// Earliest acceptable internal start, typically "now" plus any
    /// configured lead time. `None` disables the cutoff (useful in tests).
    pub not_before: Option<DateTime<Utc>>,
}

impl SlotQuery {
    pub fn new(window: Interval, timing: ServiceTiming, busy: Vec<Interval>) -> Self {
        Self {
            window,
            timing,
            busy,
            granularity: Duration::minutes(DEFAULT_GRANULARITY_MINUTES),
            not_before: None,
        }
    }

    pub fn with_granularity(mut self, granularity: Duration) -> Self {
        self.granularity = granularity;
        self
    }

    pub fn with_not_before(mut self, not_before: DateTime<Utc>) -> Self {
        self.not_before = Some(not_before);
        self
    }

    /// Builds the lazy sequence of bookable start times. Calling this
    /// again on the same query restarts the walk from the beginning and
    /// yields the identical sequence.
    pub fn slots(&self) -> SlotIter {
        SlotIter {
            cursor: self.window.start,
            window: self.window,
            span: self.timing.occupied_span(),
            buffer_before: self.timing.buffer_before(),
            busy: Interval::merge(self.busy.clone()),
            granularity: self.granularity,
            not_before: self.not_before,
        }
    }
}

/// Lazy iterator over legal slot start times, ascending.
///
/// Each candidate internal start `t` walks the working window in
/// granularity steps. A candidate is emitted iff the full occupied block
/// `[t, t + span)` lies inside the window, touches no busy interval, and
/// `t` is not before the cutoff. The emitted value is the externally
/// visible service start, `t + buffer_before`.
#[derive(Debug, Clone)]
pub struct SlotIter {
    cursor: DateTime<Utc>,
    window: Interval,
    span: Duration,
    buffer_before: Duration,
    busy: Vec<Interval>,
    granularity: Duration,
    not_before: Option<DateTime<Utc>>,
}

impl Iterator for SlotIter {
    type Item = DateTime<Utc>;

    fn next(&mut self) -> Option<DateTime<Utc>> {
        // Degenerate steps would never advance the cursor.
        if self.granularity <= Duration::zero() {
            return None;
        }

        loop {
            let start = self.cursor;
            if start + self.span > self.window.end {
                return None;
            }
            self.cursor = start + self.granularity;

            if let Some(cutoff) = self.not_before {
                if start < cutoff {
                    continue;
                }
            }

            let block = Interval::new(start, start + self.span);
            if self.conflicts(&block) {
                continue;
            }

            return Some(start + self.buffer_before);
        }
    }
}

impl SlotIter {
    fn conflicts(&self, block: &Interval) -> bool {
        // Busy intervals are merged and sorted; stop scanning once they
        // start past the candidate block.
        for busy in &self.busy {
            if busy.start >= block.end {
                return false;
            }
            if busy.overlaps(block) {
                return true;
            }
        }
        false
    }
}
