//! Julian Day Number and Julian Date conversions.
//!
//! `julian_day_number` is the integer day count used by the day pillar;
//! `jd_from_datetime` / `datetime_from_jd` carry fractional Julian Dates
//! (UTC) for the solar-term search.

use chrono::{DateTime, Utc};

use crate::error::TimeError;

/// Julian Date of J2000.0 (2000-01-01T12:00:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of the Unix epoch (1970-01-01T00:00:00Z).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Day Number of a proleptic Gregorian calendar date.
///
/// Integer arithmetic only; month is 1-based. The JDN labels the civil
/// day that begins at the preceding midnight, so 2000-01-01 maps to
/// 2_451_545.
pub fn julian_day_number(year: i32, month: u32, day: u32) -> i64 {
    let month = month as i64;
    let a = (14 - month).div_euclid(12);
    let y = year as i64 + 4800 - a;
    let m = month + 12 * a - 3;
    day as i64 + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32_045
}

/// Julian Date (UTC) of an instant, with millisecond resolution.
pub fn jd_from_datetime(dt: &DateTime<Utc>) -> f64 {
    UNIX_EPOCH_JD + dt.timestamp_millis() as f64 / (SECONDS_PER_DAY * 1000.0)
}

/// UTC instant for a Julian Date, rounded to the nearest millisecond.
pub fn datetime_from_jd(jd: f64) -> Result<DateTime<Utc>, TimeError> {
    if !jd.is_finite() {
        return Err(TimeError::JdOutOfRange(jd.to_string()));
    }
    let millis = ((jd - UNIX_EPOCH_JD) * SECONDS_PER_DAY * 1000.0).round();
    if millis.abs() > i64::MAX as f64 {
        return Err(TimeError::JdOutOfRange(jd.to_string()));
    }
    DateTime::<Utc>::from_timestamp_millis(millis as i64)
        .ok_or_else(|| TimeError::JdOutOfRange(jd.to_string()))
}
