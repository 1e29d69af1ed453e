/// Days past "now" covered by a window when no end bound is given.
pub const DEFAULT_RANGE_DAYS: i64 = 3;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Prefix a repetition rule line must carry inside an iCalendar rule set.
pub const RRULE_PREFIX: &str = "RRULE:";
