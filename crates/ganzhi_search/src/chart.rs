//! Four-pillar chart for a birth instant.
//!
//! The UTC instant locates the governing Jie (and thus the BaZi year and
//! solar month); the local wall clock, with the day-rollover rule applied,
//! gives the day and hour pillars.

use ganzhi_base::{Chart, day_pillar, hour_pillar, month_pillar, year_pillar};
use ganzhi_time::{BirthTime, jd_from_datetime};
use serde::Serialize;
use tracing::debug;

use crate::error::SearchError;
use crate::solar_term::SolarTerm;
use crate::solar_term_types::SolarTermEvent;
use crate::solar_terms::jie_at_or_before;

/// A chart together with the calendrical facts it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartInfo {
    pub chart: Chart,
    /// BaZi year: the Gregorian year whose Start of Spring precedes birth.
    pub effective_year: i32,
    /// Solar month 1..=12 (1 = Tiger month).
    pub solar_month: i64,
    /// The Jie that opened the birth month.
    pub month_jie: SolarTermEvent,
    /// Julian Date (UTC) of birth.
    pub birth_jd: f64,
}

/// Effective year and solar month implied by the Jie in force.
///
/// Minor Cold (and a Major Snow carried over from the previous year)
/// still belong to the preceding BaZi year.
pub fn year_and_month(jie: &SolarTermEvent) -> (i32, i64) {
    let month = jie.term.month_index().unwrap_or(12);
    let effective_year = match jie.term {
        SolarTerm::MinorCold => jie.year - 1,
        _ => jie.year,
    };
    (effective_year, month)
}

/// Compose the four pillars for a birth.
pub fn chart_for_birth(birth: &BirthTime) -> Result<ChartInfo, SearchError> {
    let utc = birth.utc();
    let jie = jie_at_or_before(&utc)?;
    let (effective_year, solar_month) = year_and_month(&jie);

    let year = year_pillar(effective_year);
    let month = month_pillar(year.stem(), solar_month)?;
    let day = day_pillar(birth.pillar_day_number());
    let hour = hour_pillar(day.stem(), i64::from(birth.local_hour()))?;

    debug!(
        effective_year,
        solar_month,
        jie = jie.term.name(),
        pillar_date = %birth.pillar_date(),
        "chart resolved"
    );

    Ok(ChartInfo {
        chart: Chart::new(year, month, day, hour),
        effective_year,
        solar_month,
        month_jie: jie,
        birth_jd: jd_from_datetime(&utc),
    })
}
