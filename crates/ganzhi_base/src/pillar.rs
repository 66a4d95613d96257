//! Year, month, day and hour pillar calculators.
//!
//! Every calculator here takes already-resolved calendrical inputs: the
//! effective BaZi year, the solar month index, the Julian Day Number of the
//! pillar date and the local clock hour. Locating those from a birth
//! instant is the job of `ganzhi_search::chart`.

use serde::Serialize;

use crate::branch::Branch;
use crate::error::BaziError;
use crate::jiazi::{JiaZi, pillar_from_index, year_cycle_index};
use crate::stem::Stem;

/// Day-pillar calibration: `index = (JDN + 49) mod 60`.
///
/// Anchored on 1949-10-01 (JDN 2433191) being a Jia-Zi day.
pub const DAY_PILLAR_OFFSET: i64 = 49;

/// Which of the four positions a pillar occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PillarRole {
    Year,
    Month,
    Day,
    Hour,
}

impl PillarRole {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Month => "Month",
            Self::Day => "Day",
            Self::Hour => "Hour",
        }
    }
}

/// A sexagenary pair tagged with its chart position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pillar {
    pub role: PillarRole,
    pub jiazi: JiaZi,
}

impl Pillar {
    pub const fn new(role: PillarRole, jiazi: JiaZi) -> Self {
        Self { role, jiazi }
    }

    pub const fn stem(&self) -> Stem {
        self.jiazi.stem()
    }

    pub const fn branch(&self) -> Branch {
        self.jiazi.branch()
    }
}

/// The four pillars of a birth chart, in fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Chart {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl Chart {
    pub const fn new(year: JiaZi, month: JiaZi, day: JiaZi, hour: JiaZi) -> Self {
        Self {
            year: Pillar::new(PillarRole::Year, year),
            month: Pillar::new(PillarRole::Month, month),
            day: Pillar::new(PillarRole::Day, day),
            hour: Pillar::new(PillarRole::Hour, hour),
        }
    }

    /// Pillars in year, month, day, hour order.
    pub const fn pillars(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    /// The day stem ("day master").
    pub const fn day_master(&self) -> Stem {
        self.day.stem()
    }
}

impl std::fmt::Display for Chart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.year.jiazi, self.month.jiazi, self.day.jiazi, self.hour.jiazi
        )
    }
}

/// Year pillar of an effective BaZi year (the year already shifted back
/// when the birth precedes Start of Spring).
pub const fn year_pillar(effective_year: i32) -> JiaZi {
    pillar_from_index(year_cycle_index(effective_year) as i64)
}

/// Stem of the first (Tiger) month for a given year stem.
pub const fn month_start_stem(year_stem: Stem) -> Stem {
    match year_stem {
        Stem::Jia | Stem::Ji => Stem::Bing,
        Stem::Yi | Stem::Geng => Stem::Wu,
        Stem::Bing | Stem::Xin => Stem::Geng,
        Stem::Ding | Stem::Ren => Stem::Ren,
        Stem::Wu | Stem::Gui => Stem::Jia,
    }
}

/// Month pillar for solar month `month_index` (1 = Tiger month starting at
/// Start of Spring, 12 = Ox month starting at Minor Cold).
pub fn month_pillar(year_stem: Stem, month_index: i64) -> Result<JiaZi, BaziError> {
    if !(1..=12).contains(&month_index) {
        return Err(BaziError::InvalidMonthIndex(month_index));
    }
    let start = month_start_stem(year_stem).index() as i64;
    let stem = Stem::from_index(start + month_index - 1);
    let branch = Branch::from_index(2 + month_index - 1);
    Ok(JiaZi::from_matched(stem, branch))
}

/// Day pillar from the Julian Day Number of the pillar date.
pub const fn day_pillar(julian_day_number: i64) -> JiaZi {
    pillar_from_index((julian_day_number + DAY_PILLAR_OFFSET).rem_euclid(60))
}

/// Branch of a local clock hour. Zi spans 23:00-00:59.
pub fn hour_branch(hour: i64) -> Result<Branch, BaziError> {
    if !(0..=23).contains(&hour) {
        return Err(BaziError::InvalidHour(hour));
    }
    Ok(Branch::from_index(((hour + 1) % 24) / 2))
}

/// Stem of the Zi hour for a given day stem.
pub const fn zi_hour_start_stem(day_stem: Stem) -> Stem {
    Stem::from_index((day_stem.index() as i64 % 5) * 2)
}

/// Hour pillar from the day stem and the local clock hour.
pub fn hour_pillar(day_stem: Stem, hour: i64) -> Result<JiaZi, BaziError> {
    let branch = hour_branch(hour)?;
    let start = zi_hour_start_stem(day_stem).index() as i64;
    let stem = Stem::from_index(start + branch.index() as i64);
    Ok(JiaZi::from_matched(stem, branch))
}
