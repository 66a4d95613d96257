//! Luck cycles for a birth instant.

use ganzhi_base::{
    Gender, LuckCycle, LuckDirection, StartAge, luck_cycles, luck_direction, start_age_from_days,
};
use ganzhi_time::BirthTime;
use serde::Serialize;
use tracing::debug;

use crate::chart::ChartInfo;
use crate::error::SearchError;
use crate::solar_term_types::SolarTermEvent;
use crate::solar_terms::next_jie_after;

/// Direction, start age and cycle list for one birth.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LuckCycleSet {
    pub direction: LuckDirection,
    pub start_age: StartAge,
    /// The Jie the start age was measured to (forward) or from (backward).
    pub boundary: SolarTermEvent,
    pub cycles: Vec<LuckCycle>,
}

/// Generate `count` luck cycles from an already computed chart.
///
/// Forward runs measure the days to the next Jie; backward runs measure
/// the days since the Jie that opened the birth month.
pub fn luck_cycles_for_chart(
    birth: &BirthTime,
    info: &ChartInfo,
    gender: Gender,
    count: usize,
) -> Result<LuckCycleSet, SearchError> {
    let direction = luck_direction(gender, info.chart.year.stem());
    let (boundary, days) = match direction {
        LuckDirection::Forward => {
            let next = next_jie_after(&birth.utc())?;
            (next, next.jd - info.birth_jd)
        }
        LuckDirection::Backward => (info.month_jie, info.birth_jd - info.month_jie.jd),
    };
    let start_age = start_age_from_days(days)?;
    debug!(
        direction = direction.name(),
        boundary = boundary.term.name(),
        days,
        start_age = start_age.years_exact,
        "luck start"
    );
    let cycles = luck_cycles(
        info.chart.month.jiazi,
        direction,
        &start_age,
        info.birth_jd,
        count,
    )?;
    Ok(LuckCycleSet {
        direction,
        start_age,
        boundary,
        cycles,
    })
}

/// Compute the chart and its luck cycles in one step.
pub fn luck_cycles_for_birth(
    birth: &BirthTime,
    gender: Gender,
    count: usize,
) -> Result<LuckCycleSet, SearchError> {
    let info = crate::chart::chart_for_birth(birth)?;
    luck_cycles_for_chart(birth, &info, gender, count)
}
