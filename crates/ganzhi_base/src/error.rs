//! Error types for pillar, scoring and luck-cycle computations.

use thiserror::Error;

/// Errors from the pure BaZi calculators.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum BaziError {
    /// Solar month index outside 1..=12.
    #[error("solar month index {0} out of range 1..=12")]
    InvalidMonthIndex(i64),
    /// Local clock hour outside 0..=23.
    #[error("hour {0} out of range 0..=23")]
    InvalidHour(i64),
    /// Requested luck-cycle count outside 1..=max.
    #[error("luck cycle count {count} out of range 1..={max}")]
    InvalidCycleCount { count: usize, max: usize },
    /// Elapsed days to a Jie boundary are negative or not finite.
    #[error("invalid day span to solar-term boundary: {0}")]
    InvalidDaySpan(String),
    /// Annual pillar span outside 1..=MAX_YEAR_SPAN.
    #[error("year span {0} out of range 1..=1000")]
    InvalidYearSpan(i64),
    /// A year run would run past the last representable year.
    #[error("{span} years from {start_year} overflow the year range")]
    YearOutOfRange { start_year: i32, span: i64 },
}
