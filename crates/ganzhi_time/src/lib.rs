//! Time handling for the ganzhi engine.
//!
//! This crate provides:
//! - Julian Day Number and Julian Date conversions
//! - `BirthTime`, a UTC instant paired with a fixed local offset and the
//!   day-rollover rule used to pick the day pillar's civil date
//!
//! There is no timezone database: callers supply a raw offset in minutes.

pub mod birth;
pub mod error;
pub mod julian;

pub use birth::{BirthTime, DayBoundary, MAX_TZ_OFFSET_MINUTES};
pub use error::TimeError;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, datetime_from_jd, jd_from_datetime,
    julian_day_number,
};
