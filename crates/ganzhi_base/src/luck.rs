//! Luck cycles (DaYun, 大運).
//!
//! Decade-long pillars stepping away from the month pillar. The step
//! direction depends on gender and year-stem polarity, and the first cycle
//! starts at an age derived from the distance between birth and the
//! adjacent Jie boundary (3 days of distance = 1 year of age).

use serde::{Deserialize, Serialize};

use crate::error::BaziError;
use crate::jiazi::JiaZi;
use crate::stem::Stem;

/// Default number of cycles generated.
pub const DEFAULT_LUCK_CYCLE_COUNT: usize = 8;

/// Upper bound on cycles per request.
pub const MAX_LUCK_CYCLE_COUNT: usize = 12;

/// Days of Jie distance that equal one year of start age.
pub const DAYS_PER_LUCK_YEAR: f64 = 3.0;

/// Years covered by one luck cycle.
pub const LUCK_CYCLE_YEARS: u32 = 10;

/// Mean tropical year in days, used to place cycle boundaries in time.
pub const TROPICAL_YEAR_DAYS: f64 = 365.2422;

/// Gender flag for direction selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(other.to_string()),
        }
    }
}

/// Direction in which cycle pillars step through the sexagenary table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LuckDirection {
    Forward,
    Backward,
}

impl LuckDirection {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }

    /// +1 for forward, -1 for backward.
    pub const fn step(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// Forward for yang-year males and yin-year females; backward otherwise.
pub const fn luck_direction(gender: Gender, year_stem: Stem) -> LuckDirection {
    match (gender, year_stem.is_yang()) {
        (Gender::Male, true) | (Gender::Female, false) => LuckDirection::Forward,
        _ => LuckDirection::Backward,
    }
}

/// Age at which the first luck cycle begins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StartAge {
    /// Days between birth and the governing Jie boundary.
    pub days: f64,
    /// `days / 3`, unrounded.
    pub years_exact: f64,
    /// Whole years of `years_exact`.
    pub years: u32,
    /// Remaining whole months.
    pub months: u32,
    /// `years_exact` rounded half up, never below 0.
    pub base_age: u32,
}

/// Convert the Jie distance in days into a start age.
pub fn start_age_from_days(days: f64) -> Result<StartAge, BaziError> {
    if !days.is_finite() || days < 0.0 {
        return Err(BaziError::InvalidDaySpan(days.to_string()));
    }
    let years_exact = days / DAYS_PER_LUCK_YEAR;
    let years = years_exact.floor();
    let months = ((years_exact - years) * 12.0).floor().min(11.0);
    let base_age = (years_exact + 0.5).floor().max(0.0);
    Ok(StartAge {
        days,
        years_exact,
        years: years as u32,
        months: months as u32,
        base_age: base_age as u32,
    })
}

/// One decade-long luck cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LuckCycle {
    /// 0-based position in the sequence.
    pub index: u32,
    /// First age covered (inclusive).
    pub start_age: u32,
    /// Last age covered (inclusive).
    pub end_age: u32,
    pub pillar: JiaZi,
    /// Julian Date (UTC) at which the cycle begins.
    pub start_jd: f64,
    /// Julian Date (UTC) at which the cycle ends.
    pub end_jd: f64,
}

/// Generate `count` luck cycles stepping away from the month pillar.
///
/// Cycle `i` carries `pillar_from_index(M ± (i + 1))`, covers ages
/// `[base + 10i, base + 10i + 9]` and starts `exact + 10i` tropical years
/// after `birth_jd`.
pub fn luck_cycles(
    month_pillar: JiaZi,
    direction: LuckDirection,
    start_age: &StartAge,
    birth_jd: f64,
    count: usize,
) -> Result<Vec<LuckCycle>, BaziError> {
    if count == 0 || count > MAX_LUCK_CYCLE_COUNT {
        return Err(BaziError::InvalidCycleCount {
            count,
            max: MAX_LUCK_CYCLE_COUNT,
        });
    }
    let span_days = f64::from(LUCK_CYCLE_YEARS) * TROPICAL_YEAR_DAYS;
    let cycles = (0..count as u32)
        .map(|i| {
            let start_age_i = start_age.base_age + LUCK_CYCLE_YEARS * i;
            let start_jd = birth_jd
                + (start_age.years_exact + f64::from(LUCK_CYCLE_YEARS * i)) * TROPICAL_YEAR_DAYS;
            LuckCycle {
                index: i,
                start_age: start_age_i,
                end_age: start_age_i + LUCK_CYCLE_YEARS - 1,
                pillar: month_pillar.offset(direction.step() * (i64::from(i) + 1)),
                start_jd,
                end_jd: start_jd + span_days,
            }
        })
        .collect();
    Ok(cycles)
}
