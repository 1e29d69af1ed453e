//! Terminal rendering for calvis-core types.

use calvis_core::{OverlapKind, TimeInterval};
use chrono::{DateTime, Local};
use owo_colors::OwoColorize;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for OverlapKind {
    fn render(&self) -> String {
        let label = match self {
            OverlapKind::StartsInWindow => "starts in window",
            OverlapKind::EndsInWindow => "ends in window",
            OverlapKind::SpansWindow => "spans window",
        };
        label.dimmed().to_string()
    }
}

impl Render for TimeInterval {
    fn render(&self) -> String {
        format!(
            "{} - {}",
            format_timestamp(self.start_time),
            format_timestamp(self.end_time)
        )
    }
}

fn to_local(secs: i64) -> Option<DateTime<Local>> {
    DateTime::from_timestamp(secs, 0).map(|dt| dt.with_timezone(&Local))
}

/// Full local date and time, or the raw number if it is out of chrono's range.
pub fn format_timestamp(secs: i64) -> String {
    to_local(secs)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| secs.to_string())
}

/// Format a date as a human-readable label (e.g. "Today", "Tomorrow", "Wed Feb 25")
pub fn format_date_label(secs: i64) -> String {
    let Some(dt) = to_local(secs) else {
        return secs.to_string();
    };
    let today = Local::now().date_naive();

    match (dt.date_naive() - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => dt.format("%a %b %-d").to_string(),
    }
}

pub fn format_time(secs: i64) -> String {
    match to_local(secs) {
        Some(dt) => format!("{:>7}", dt.format("%H:%M")),
        None => format!("{:>7}", "?"),
    }
}
