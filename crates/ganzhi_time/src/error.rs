//! Error types for birth-time parsing and validation.

use thiserror::Error;

/// Errors from timestamp parsing or birth-time validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Timestamp is not valid RFC 3339 / ISO-8601.
    #[error("invalid timestamp '{0}': expected RFC 3339, e.g. 1990-05-17T04:30:00Z")]
    InvalidTimestamp(String),
    /// UTC offset is outside ±14 hours.
    #[error("timezone offset {0} min is outside -840..=840")]
    OffsetOutOfRange(i32),
    /// Day-start hour is neither 0 nor 23.
    #[error("day start hour must be 0 or 23, got {0}")]
    InvalidDayStartHour(i64),
    /// Julian Date cannot be represented as a UTC instant.
    #[error("julian date {0} is outside the representable range")]
    JdOutOfRange(String),
}
