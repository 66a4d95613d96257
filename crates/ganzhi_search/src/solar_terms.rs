//! Solar-term instants for a Gregorian year.
//!
//! First guess from the mean solar longitude (target offset over one
//! tropical year), then Newton refinement on the apparent longitude.
//! Calendar grade: documented error bound is ±1 day, with typical error
//! under a quarter of an hour against almanac values for 1901-2100.

use chrono::{DateTime, Datelike, Utc};
use ganzhi_base::TROPICAL_YEAR_DAYS;
use ganzhi_time::{datetime_from_jd, jd_from_datetime, julian_day_number};
use tracing::debug;

use crate::error::SearchError;
use crate::solar_term::{ALL_SOLAR_TERMS, SolarTerm};
use crate::solar_term_types::SolarTermEvent;
use crate::sun::{
    MEAN_DAILY_MOTION_DEG, apparent_longitude_deg, mean_longitude_deg, normalize_deg, wrap_180,
};

/// First year the approximation is validated for.
pub const MIN_SUPPORTED_YEAR: i32 = 1901;
/// Last year the approximation is validated for.
pub const MAX_SUPPORTED_YEAR: i32 = 2100;

const NEWTON_STEPS: usize = 5;
const CONVERGED_DAYS: f64 = 1e-7;

fn check_year(year: i32) -> Result<(), SearchError> {
    if (MIN_SUPPORTED_YEAR..=MAX_SUPPORTED_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(SearchError::UnsupportedYear {
            year,
            min: MIN_SUPPORTED_YEAR,
            max: MAX_SUPPORTED_YEAR,
        })
    }
}

/// JD of the instant the Sun reaches `term` in `year`. No range check;
/// neighbouring years of a supported year go through here.
fn term_jd(year: i32, term: SolarTerm) -> f64 {
    let target = term.longitude_deg();
    let jd0 = julian_day_number(year, 1, 1) as f64 - 0.5;
    let lead = normalize_deg(target - mean_longitude_deg(jd0));
    let mut jd = jd0 + lead / 360.0 * TROPICAL_YEAR_DAYS;
    for _ in 0..NEWTON_STEPS {
        let step = wrap_180(target - apparent_longitude_deg(jd)) / MEAN_DAILY_MOTION_DEG;
        jd += step;
        if step.abs() < CONVERGED_DAYS {
            break;
        }
    }
    jd
}

fn event(year: i32, term: SolarTerm) -> Result<SolarTermEvent, SearchError> {
    let jd = term_jd(year, term);
    Ok(SolarTermEvent {
        term,
        year,
        jd,
        utc: datetime_from_jd(jd)?,
    })
}

/// Instant of one solar term in `year`.
pub fn solar_term_event(year: i32, term: SolarTerm) -> Result<SolarTermEvent, SearchError> {
    check_year(year)?;
    event(year, term)
}

/// All 24 solar terms of `year`, in time order (Minor Cold first).
pub fn solar_terms_for_year(year: i32) -> Result<Vec<SolarTermEvent>, SearchError> {
    check_year(year)?;
    ALL_SOLAR_TERMS.iter().map(|&t| event(year, t)).collect()
}

/// Last term of `year` at or before `instant`.
///
/// An instant before the year's first term (Minor Cold) resolves to the
/// previous year's Winter Solstice; one after the last term stays on it.
pub fn current_solar_term(
    year: i32,
    instant: &DateTime<Utc>,
) -> Result<SolarTermEvent, SearchError> {
    check_year(year)?;
    let jd = jd_from_datetime(instant);
    let found = ALL_SOLAR_TERMS
        .iter()
        .rev()
        .find(|&&t| term_jd(year, t) <= jd);
    match found {
        Some(&t) => event(year, t),
        None => event(year - 1, SolarTerm::WinterSolstice),
    }
}

/// The Jie (month-opening term) in force at `instant`.
///
/// Searches the instant's UTC year, falling back to the previous year's
/// Major Snow when the instant precedes Minor Cold.
pub fn jie_at_or_before(instant: &DateTime<Utc>) -> Result<SolarTermEvent, SearchError> {
    let year = instant.year();
    check_year(year)?;
    let jd = jd_from_datetime(instant);
    let found = ALL_SOLAR_TERMS
        .iter()
        .rev()
        .filter(|t| t.is_jie())
        .find(|&&t| term_jd(year, t) <= jd);
    let ev = match found {
        Some(&t) => event(year, t)?,
        None => event(year - 1, SolarTerm::MajorSnow)?,
    };
    debug!(term = ev.term.name(), year = ev.year, jd = ev.jd, "jie at or before");
    Ok(ev)
}

/// The first Jie strictly after `instant`.
///
/// Rolls over to the next year's Minor Cold after Major Snow.
pub fn next_jie_after(instant: &DateTime<Utc>) -> Result<SolarTermEvent, SearchError> {
    let year = instant.year();
    check_year(year)?;
    let jd = jd_from_datetime(instant);
    let found = ALL_SOLAR_TERMS
        .iter()
        .filter(|t| t.is_jie())
        .find(|&&t| term_jd(year, t) > jd);
    let ev = match found {
        Some(&t) => event(year, t)?,
        None => event(year + 1, SolarTerm::MinorCold)?,
    };
    debug!(term = ev.term.name(), year = ev.year, jd = ev.jd, "next jie");
    Ok(ev)
}
