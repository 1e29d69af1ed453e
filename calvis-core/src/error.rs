//! Error types for calvis.

use thiserror::Error;

/// Errors that can occur in calvis operations.
#[derive(Error, Debug)]
pub enum CalvisError {
    #[error("Malformed repetition rule '{rule}': {reason}")]
    MalformedRule { rule: String, reason: String },

    #[error("Degenerate interval: end {end} is before start {start}")]
    DegenerateInterval { start: i64, end: i64 },

    #[error("Timestamp {0} is out of range")]
    TimestampOutOfRange(i64),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD or seconds since epoch")]
    InvalidDate(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for calvis operations.
pub type CalvisResult<T> = Result<T, CalvisError>;
