//! Batch visibility filter over upstream event records.
//!
//! Cancelled events never show. One-off events must sit entirely inside the
//! window; recurring events only need one occurrence that overlaps it.

use serde::Serialize;

use crate::event::{RawEvent, TimeInterval};
use crate::recurrence::{Occurrence, OverlapKind, first_overlap};

/// An event that passed the filter, with the occurrence that made it visible.
#[derive(Debug, Clone, Serialize)]
pub struct VisibleEvent<'a> {
    pub event: &'a RawEvent,
    pub occurrence: Occurrence,
    /// None for one-off events, which are matched by containment
    pub overlap: Option<OverlapKind>,
}

/// Decide visibility for one event. Never fails.
pub fn is_visible(event: &RawEvent, window: &TimeInterval) -> bool {
    visibility(event, window).is_some()
}

/// Events visible in `window`, in input order.
pub fn filter_visible<'a>(events: &'a [RawEvent], window: &TimeInterval) -> Vec<&'a RawEvent> {
    events.iter().filter(|e| is_visible(e, window)).collect()
}

/// Like [`filter_visible`], keeping the matching occurrence of each event.
pub fn visible_events<'a>(events: &'a [RawEvent], window: &TimeInterval) -> Vec<VisibleEvent<'a>> {
    events
        .iter()
        .filter_map(|event| {
            visibility(event, window).map(|(occurrence, overlap)| VisibleEvent {
                event,
                occurrence,
                overlap,
            })
        })
        .collect()
}

fn visibility(event: &RawEvent, window: &TimeInterval) -> Option<(Occurrence, Option<OverlapKind>)> {
    if event.is_cancelled() {
        tracing::trace!(event = event.display_name(), "Skipping cancelled event");
        return None;
    }

    let interval = event.interval();

    let Some(rule) = event.rule() else {
        if interval.validate().is_err() || window.validate().is_err() {
            tracing::warn!(
                event = event.display_name(),
                ?interval,
                ?window,
                "Degenerate interval, treating event as not visible"
            );
            return None;
        }
        return window.contains(&interval).then(|| {
            let occurrence = Occurrence::from_start(interval.start_time, interval.duration());
            (occurrence, None)
        });
    };

    match first_overlap(rule, interval, *window) {
        Ok(found) => found.map(|(occ, kind)| (occ, Some(kind))),
        Err(e) => {
            tracing::warn!(
                event = event.display_name(),
                rule,
                error = %e,
                "Failed to evaluate repetition rule, treating event as not visible"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventStatus;
    use tracing_test::traced_test;

    const ANCHOR: i64 = 1_700_000_000;
    const HOUR: i64 = 3_600;
    const DAY: i64 = 86_400;

    fn event(summary: &str, status: EventStatus, rule: Option<&str>, start: i64, end: i64) -> RawEvent {
        RawEvent {
            id: None,
            summary: Some(summary.to_string()),
            status,
            repetition_rule: rule.map(String::from),
            start_timestamp: start,
            end_timestamp: end,
            is_exception: false,
        }
    }

    #[test]
    fn test_cancelled_events_never_visible() {
        let window = TimeInterval::new(ANCHOR - DAY, ANCHOR + DAY);
        let one_off = event("a", EventStatus::Cancelled, None, ANCHOR, ANCHOR + HOUR);
        let series = event("b", EventStatus::Cancelled, Some("FREQ=DAILY"), ANCHOR, ANCHOR + HOUR);
        assert!(!is_visible(&one_off, &window));
        assert!(!is_visible(&series, &window));
    }

    #[test]
    fn test_one_off_requires_full_containment() {
        let window = TimeInterval::new(ANCHOR, ANCHOR + 2 * HOUR);
        let inside = event("in", EventStatus::Confirmed, None, ANCHOR, ANCHOR + 2 * HOUR);
        let straddling = event("out", EventStatus::Confirmed, None, ANCHOR + HOUR, ANCHOR + 3 * HOUR);
        assert!(is_visible(&inside, &window));
        assert!(!is_visible(&straddling, &window));
    }

    #[test]
    fn test_recurring_needs_only_partial_overlap() {
        let window = TimeInterval::new(ANCHOR + DAY + HOUR, ANCHOR + DAY + 3 * HOUR);
        let series = event("standup", EventStatus::Tentative, Some("FREQ=DAILY"), ANCHOR, ANCHOR + 2 * HOUR);
        let one_off = event("meeting", EventStatus::Tentative, None, ANCHOR + DAY, ANCHOR + DAY + 2 * HOUR);
        assert!(is_visible(&series, &window));
        assert!(!is_visible(&one_off, &window));
    }

    #[test]
    fn test_empty_rule_treated_as_one_off() {
        let window = TimeInterval::new(ANCHOR, ANCHOR + HOUR);
        let e = event("blank", EventStatus::Confirmed, Some(""), ANCHOR, ANCHOR + HOUR);
        assert!(is_visible(&e, &window));
    }

    #[test]
    fn test_bad_rule_does_not_stop_batch() {
        let window = TimeInterval::new(ANCHOR - DAY, ANCHOR + DAY);
        let events = vec![
            event("first", EventStatus::Confirmed, None, ANCHOR, ANCHOR + HOUR),
            event("broken", EventStatus::Confirmed, Some("FREQ=BOGUS"), ANCHOR, ANCHOR + HOUR),
            event("backwards", EventStatus::Confirmed, None, ANCHOR + HOUR, ANCHOR),
            event("last", EventStatus::Confirmed, Some("FREQ=WEEKLY"), ANCHOR, ANCHOR + HOUR),
        ];

        let names: Vec<&str> = filter_visible(&events, &window)
            .into_iter()
            .map(RawEvent::display_name)
            .collect();
        assert_eq!(names, vec!["first", "last"]);
    }

    #[test]
    fn test_visible_events_keep_matching_occurrence() {
        let window = TimeInterval::new(ANCHOR + 2 * DAY, ANCHOR + 2 * DAY + HOUR);
        let events = vec![event("daily", EventStatus::Confirmed, Some("FREQ=DAILY;COUNT=5"), ANCHOR, ANCHOR + HOUR)];

        let visible = visible_events(&events, &window);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].occurrence.start, ANCHOR + 2 * DAY);
        assert_eq!(visible[0].occurrence.end, ANCHOR + 2 * DAY + HOUR);
        assert_eq!(visible[0].overlap, Some(OverlapKind::StartsInWindow));
    }

    #[traced_test]
    #[test]
    fn test_failures_logged_per_event() {
        let window = TimeInterval::new(ANCHOR - DAY, ANCHOR + DAY);
        let events = vec![
            event("good", EventStatus::Confirmed, Some("FREQ=DAILY"), ANCHOR, ANCHOR + HOUR),
            event("broken", EventStatus::Confirmed, Some("FREQ=BOGUS"), ANCHOR, ANCHOR + HOUR),
            event("backwards", EventStatus::Confirmed, None, ANCHOR + HOUR, ANCHOR),
        ];

        assert_eq!(filter_visible(&events, &window).len(), 1);

        logs_assert(|lines: &[&str]| {
            let warnings: Vec<&&str> = lines.iter().filter(|l| l.contains("WARN")).collect();
            match warnings.as_slice() {
                [rule, interval] if rule.contains("broken") && interval.contains("backwards") => Ok(()),
                other => Err(format!("unexpected warnings: {other:?}")),
            }
        });
    }
}
