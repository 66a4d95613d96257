//! Result types for solar-term search.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::solar_term::SolarTerm;

/// A solar term located in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarTermEvent {
    pub term: SolarTerm,
    /// Gregorian year the term was computed for.
    pub year: i32,
    /// Julian Date (UTC) of the instant the Sun reaches the term longitude.
    pub jd: f64,
    pub utc: DateTime<Utc>,
}
