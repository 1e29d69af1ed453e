//! Recurrence overlap engine.
//!
//! Answers one question: does any occurrence of a recurring event intersect a
//! query window? The rule is normalized against the event start, expanded lazily
//! and each occurrence (carrying the original event's duration) is classified
//! against the window until one matches.

mod overlap;
mod rule;
mod schedule;

pub use overlap::{Occurrence, OverlapKind};
pub use rule::{NormalizedRule, normalize_rule};
pub use schedule::Schedule;

use crate::error::CalvisResult;
use crate::event::TimeInterval;

/// Find the first occurrence of `rule` (anchored at `event_time.start_time`) that
/// overlaps `check_range`.
///
/// An empty rule has no occurrences. Degenerate intervals, unrepresentable
/// timestamps and unparseable rules are reported as errors.
pub fn first_overlap(
    rule: &str,
    event_time: TimeInterval,
    check_range: TimeInterval,
) -> CalvisResult<Option<(Occurrence, OverlapKind)>> {
    event_time.validate()?;
    check_range.validate()?;

    let Some(normalized) = normalize_rule(rule, event_time.start_utc()?) else {
        return Ok(None);
    };
    let schedule = Schedule::parse(&normalized)?;
    let duration = event_time.duration();

    // An occurrence starting up to `duration` before the window can still end inside it.
    let generation_window = TimeInterval::new(
        check_range.start_time.saturating_sub(duration),
        check_range.end_time,
    );

    let found = schedule
        .starts_within(generation_window)
        .map(|start| Occurrence::from_start(start, duration))
        .find_map(|occ| occ.classify(&check_range).map(|kind| (occ, kind)));

    tracing::trace!(rule = %normalized.rrule(), ?found, "Evaluated recurrence");
    Ok(found)
}

/// Whether any occurrence of the event overlaps `check_range`.
///
/// Never fails: errors are logged and count as "no overlap".
pub fn occurs_in_range(rule: &str, event_time: TimeInterval, check_range: TimeInterval) -> bool {
    match first_overlap(rule, event_time, check_range) {
        Ok(found) => found.is_some(),
        Err(e) => {
            tracing::warn!(
                rule,
                event_start = event_time.start_time,
                event_end = event_time.end_time,
                error = %e,
                "Failed to evaluate repetition rule, treating event as not overlapping"
            );
            false
        }
    }
}
