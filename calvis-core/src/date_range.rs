//! Query window construction from user input.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::error::{CalvisError, CalvisResult};
use crate::event::TimeInterval;

/// Build a query window from optional bounds.
/// - `from`: YYYY-MM-DD (start of day) or epoch seconds, defaults to `now`
/// - `to`: YYYY-MM-DD (end of day) or epoch seconds, defaults to `now + default_days`
pub fn window_from_args(
    from: Option<&str>,
    to: Option<&str>,
    default_days: i64,
    now: DateTime<Utc>,
) -> CalvisResult<TimeInterval> {
    let start = match from {
        Some(s) => parse_bound(s, false)?,
        None => now.timestamp(),
    };

    let end = match to {
        Some(s) => parse_bound(s, true)?,
        None => (now + Duration::days(default_days)).timestamp(),
    };

    let window = TimeInterval::new(start, end);
    window.validate()?;
    Ok(window)
}

fn parse_bound(s: &str, end_of_day: bool) -> CalvisResult<i64> {
    let s = s.trim();

    if let Ok(secs) = s.parse::<i64>() {
        return Ok(secs);
    }

    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| CalvisError::InvalidDate(s.to_string()))?;

    let time = if end_of_day {
        date.and_hms_opt(23, 59, 59)
    } else {
        date.and_hms_opt(0, 0, 0)
    };

    time.map(|t| t.and_utc().timestamp())
        .ok_or_else(|| CalvisError::InvalidDate(s.to_string()))
}
