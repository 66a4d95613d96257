//! Birth instant with a fixed local offset and a day-rollover rule.
//!
//! The UTC instant drives everything astronomical (solar terms, luck-cycle
//! start age). The local wall clock (UTC + offset) drives the day and hour
//! pillars.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::julian_day_number;

/// Largest accepted offset from UTC, in minutes (UTC+14:00).
pub const MAX_TZ_OFFSET_MINUTES: i32 = 14 * 60;

/// When the day pillar rolls over to the next civil day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DayBoundary {
    /// New day at local midnight; 23:00-23:59 keeps the current day stem.
    Midnight,
    /// New day at the start of the Zi hour (local 23:00).
    ZiHour,
}

impl DayBoundary {
    /// Parse the `dayStartHourLocal` wire value (0 or 23).
    pub fn from_start_hour(hour: i64) -> Result<Self, TimeError> {
        match hour {
            0 => Ok(Self::Midnight),
            23 => Ok(Self::ZiHour),
            other => Err(TimeError::InvalidDayStartHour(other)),
        }
    }

    /// Local hour at which the pillar day starts.
    pub const fn start_hour(self) -> u32 {
        match self {
            Self::Midnight => 0,
            Self::ZiHour => 23,
        }
    }
}

/// A validated birth instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthTime {
    utc: DateTime<Utc>,
    tz_offset_minutes: i32,
    day_boundary: DayBoundary,
}

impl BirthTime {
    /// Build from a UTC instant. The offset must lie within ±14 hours.
    pub fn new(
        utc: DateTime<Utc>,
        tz_offset_minutes: i32,
        day_boundary: DayBoundary,
    ) -> Result<Self, TimeError> {
        if tz_offset_minutes.abs() > MAX_TZ_OFFSET_MINUTES {
            return Err(TimeError::OffsetOutOfRange(tz_offset_minutes));
        }
        Ok(Self {
            utc,
            tz_offset_minutes,
            day_boundary,
        })
    }

    /// Parse an RFC 3339 timestamp. Any offset in the string only fixes
    /// the instant; the local clock always comes from `tz_offset_minutes`.
    pub fn parse(
        timestamp: &str,
        tz_offset_minutes: i32,
        day_boundary: DayBoundary,
    ) -> Result<Self, TimeError> {
        let utc = DateTime::parse_from_rfc3339(timestamp.trim())
            .map_err(|_| TimeError::InvalidTimestamp(timestamp.to_string()))?
            .with_timezone(&Utc);
        Self::new(utc, tz_offset_minutes, day_boundary)
    }

    pub fn utc(&self) -> DateTime<Utc> {
        self.utc
    }

    pub fn tz_offset_minutes(&self) -> i32 {
        self.tz_offset_minutes
    }

    pub fn day_boundary(&self) -> DayBoundary {
        self.day_boundary
    }

    /// Local wall-clock time (UTC shifted by the fixed offset).
    pub fn local(&self) -> NaiveDateTime {
        self.utc.naive_utc() + Duration::minutes(self.tz_offset_minutes as i64)
    }

    /// Local clock hour, 0..=23.
    pub fn local_hour(&self) -> u32 {
        self.local().hour()
    }

    /// Civil date that owns the day pillar.
    ///
    /// Under `DayBoundary::ZiHour` a local time of 23:xx already belongs
    /// to the following day.
    pub fn pillar_date(&self) -> NaiveDate {
        let local = self.local();
        let date = local.date();
        if self.day_boundary == DayBoundary::ZiHour && local.hour() >= 23 {
            date.succ_opt().unwrap_or(date)
        } else {
            date
        }
    }

    /// Julian Day Number of [`pillar_date`](Self::pillar_date).
    pub fn pillar_day_number(&self) -> i64 {
        let date = self.pillar_date();
        julian_day_number(date.year(), date.month(), date.day())
    }
}
