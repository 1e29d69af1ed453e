//! Event records and time intervals.
//!
//! These mirror what an upstream calendar service hands over. The engine only
//! looks at the interval, status and repetition rule; everything else rides along
//! for display.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CalvisError, CalvisResult};

/// A closed interval of seconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeInterval {
    pub start_time: i64,
    pub end_time: i64,
}

impl TimeInterval {
    pub fn new(start_time: i64, end_time: i64) -> Self {
        TimeInterval {
            start_time,
            end_time,
        }
    }

    /// Length in seconds. Zero for instantaneous events.
    pub fn duration(&self) -> i64 {
        self.end_time.saturating_sub(self.start_time)
    }

    /// Whether `other` lies entirely inside this interval, bounds included.
    pub fn contains(&self, other: &TimeInterval) -> bool {
        other.start_time >= self.start_time && other.end_time <= self.end_time
    }

    pub fn validate(&self) -> CalvisResult<()> {
        if self.end_time < self.start_time {
            return Err(CalvisError::DegenerateInterval {
                start: self.start_time,
                end: self.end_time,
            });
        }
        Ok(())
    }

    pub fn start_utc(&self) -> CalvisResult<DateTime<Utc>> {
        timestamp_to_utc(self.start_time)
    }
}

pub fn timestamp_to_utc(secs: i64) -> CalvisResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or(CalvisError::TimestampOutOfRange(secs))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Confirmed,
    Tentative,
    Cancelled,
    #[serde(other)]
    Unknown,
}

/// An event record as supplied by the upstream calendar service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub status: EventStatus,
    /// RRULE text, relative to `start_timestamp`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repetition_rule: Option<String>,
    pub start_timestamp: i64,
    pub end_timestamp: i64,
    /// Set on instances that override a single occurrence of a recurring series
    #[serde(default)]
    pub is_exception: bool,
}

impl RawEvent {
    pub fn interval(&self) -> TimeInterval {
        TimeInterval::new(self.start_timestamp, self.end_timestamp)
    }

    /// The repetition rule, treating empty text as no rule at all.
    pub fn rule(&self) -> Option<&str> {
        self.repetition_rule
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
    }

    pub fn is_recurring(&self) -> bool {
        self.rule().is_some()
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == EventStatus::Cancelled
    }

    pub fn display_name(&self) -> &str {
        self.summary
            .as_deref()
            .or(self.id.as_deref())
            .unwrap_or("(untitled)")
    }
}
