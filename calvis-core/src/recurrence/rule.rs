//! Repetition rule normalization.

use chrono::{DateTime, Utc};

use crate::constants::RRULE_PREFIX;

/// A repetition rule bound to the instant it repeats from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRule {
    anchor: DateTime<Utc>,
    rrule: String,
}

impl NormalizedRule {
    /// The rule line, always starting with `RRULE:`.
    pub fn rrule(&self) -> &str {
        &self.rrule
    }

    /// Render as the DTSTART + RRULE block understood by the rrule crate parser.
    pub fn to_ics_string(&self) -> String {
        format!(
            "DTSTART:{}\n{}",
            self.anchor.format("%Y%m%dT%H%M%SZ"),
            self.rrule
        )
    }
}

/// Prepare raw rule text for evaluation against `anchor`.
///
/// Returns `None` for empty text. Otherwise the only change made is adding the
/// `RRULE:` prefix when it is missing.
pub fn normalize_rule(raw: &str, anchor: DateTime<Utc>) -> Option<NormalizedRule> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let has_prefix = raw
        .get(..RRULE_PREFIX.len())
        .is_some_and(|p| p.eq_ignore_ascii_case(RRULE_PREFIX));

    let rrule = if has_prefix {
        raw.to_string()
    } else {
        format!("{RRULE_PREFIX}{raw}")
    };

    Some(NormalizedRule { anchor, rrule })
}
