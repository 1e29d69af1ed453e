//! Overlap classification of a single occurrence against a window.

use serde::Serialize;

use crate::event::TimeInterval;

/// One generated instance of a recurring event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    pub start: i64,
    pub end: i64,
}

/// Which overlap clause an occurrence satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapKind {
    StartsInWindow,
    EndsInWindow,
    SpansWindow,
}

impl Occurrence {
    /// Every occurrence lasts as long as the original event.
    pub fn from_start(start: i64, duration: i64) -> Self {
        Occurrence {
            start,
            end: start.saturating_add(duration),
        }
    }

    /// First matching clause, checked in the order start, end, span. All bounds inclusive.
    pub fn classify(&self, window: &TimeInterval) -> Option<OverlapKind> {
        let in_window = |t: i64| window.start_time <= t && t <= window.end_time;

        if in_window(self.start) {
            Some(OverlapKind::StartsInWindow)
        } else if in_window(self.end) {
            Some(OverlapKind::EndsInWindow)
        } else if self.start <= window.start_time && self.end >= window.end_time {
            Some(OverlapKind::SpansWindow)
        } else {
            None
        }
    }

    pub fn overlaps(&self, window: &TimeInterval) -> bool {
        self.classify(window).is_some()
    }
}
