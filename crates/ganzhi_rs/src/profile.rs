//! Profile response and the one-call computation behind it.

use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use ganzhi_base::{
    Branch, ElementVector, JiaZi, LuckCycle, LuckDirection, Pillar, RankedElement, Stem,
    balance_index, score_chart,
};
use ganzhi_search::{chart_for_birth, luck_cycles_for_chart};
use ganzhi_time::datetime_from_jd;
use ganzhi_yijing::{CastResult, cast_hexagram};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::config::ProfileConfig;
use crate::error::ProfileError;
use crate::insight::{ChartBalance, HexagramInsight, combine_chart_and_hexagram};
use crate::request::ProfileRequest;

/// Complete BaZi profile as returned to callers (JSON, camelCase).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub birth_instant_utc: String,
    pub tz_offset_minutes: i32,
    pub day_start_hour_local: u32,
    pub effective_year: i32,
    pub solar_month: i64,
    pub chart: ChartDto,
    pub elements: ElementsDto,
    pub luck_start: LuckStartDto,
    pub luck_cycles: Vec<LuckCycleDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hexagram: Option<CastResult>,
    /// Present whenever `hexagram` is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insight: Option<HexagramInsight>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PillarDto {
    pub stem: Stem,
    pub branch: Branch,
    pub cycle_index: u8,
    /// e.g. "甲子 (Jia-Zi)".
    pub display_label: String,
}

impl From<JiaZi> for PillarDto {
    fn from(jiazi: JiaZi) -> Self {
        Self {
            stem: jiazi.stem(),
            branch: jiazi.branch(),
            cycle_index: jiazi.cycle_index(),
            display_label: jiazi.display_label(),
        }
    }
}

impl From<Pillar> for PillarDto {
    fn from(pillar: Pillar) -> Self {
        pillar.jiazi.into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartDto {
    pub year: PillarDto,
    pub month: PillarDto,
    pub day: PillarDto,
    pub hour: PillarDto,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementsDto {
    pub vector: ElementVector,
    pub normalized_vector: ElementVector,
    /// 0..=100, 100 = perfectly even.
    pub balance_index: f64,
    pub top: Vec<RankedElement>,
    pub bottom: Vec<RankedElement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LuckStartDto {
    pub direction: LuckDirection,
    /// Unrounded start age in years.
    pub start_age_years: f64,
    pub years: u32,
    pub months: u32,
    /// Age at which the first cycle begins.
    pub start_age: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LuckCycleDto {
    pub index: u32,
    pub start_age: u32,
    pub end_age: u32,
    pub pillar: PillarDto,
    pub starts_at: String,
    pub ends_at: String,
}

fn iso(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn iso_from_jd(jd: f64) -> Result<String, ProfileError> {
    Ok(iso(&datetime_from_jd(jd)?))
}

impl TryFrom<&LuckCycle> for LuckCycleDto {
    type Error = ProfileError;

    fn try_from(cycle: &LuckCycle) -> Result<Self, Self::Error> {
        Ok(Self {
            index: cycle.index,
            start_age: cycle.start_age,
            end_age: cycle.end_age,
            pillar: cycle.pillar.into(),
            starts_at: iso_from_jd(cycle.start_jd)?,
            ends_at: iso_from_jd(cycle.end_jd)?,
        })
    }
}

/// Validate `request` and compute its profile.
///
/// The hexagram, when enabled, is cast from `config.hexagram_seed` or
/// from OS entropy.
pub fn compute_profile(
    request: &ProfileRequest,
    config: &ProfileConfig,
) -> Result<Profile, ProfileError> {
    let mut rng = match config.hexagram_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    compute_profile_with_rng(request, config, &mut rng)
}

/// Same as [`compute_profile`] with a caller-supplied RNG.
#[instrument(level = "debug", skip_all)]
pub fn compute_profile_with_rng<R: Rng + ?Sized>(
    request: &ProfileRequest,
    config: &ProfileConfig,
    rng: &mut R,
) -> Result<Profile, ProfileError> {
    config.validate()?;
    let validated = request.validate(config)?;
    let birth = validated.birth;

    let info = chart_for_birth(&birth)?;
    let vector = score_chart(&info.chart);
    let elements = ElementsDto {
        vector,
        normalized_vector: vector.normalized(),
        balance_index: balance_index(&vector),
        top: vector.top_n(config.top_n),
        bottom: vector.bottom_n(config.top_n),
    };

    let luck = luck_cycles_for_chart(&birth, &info, validated.gender, config.luck_cycle_count)?;
    let luck_cycles = luck
        .cycles
        .iter()
        .map(LuckCycleDto::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    let hexagram = config.include_hexagram.then(|| cast_hexagram(rng));
    let insight = hexagram.as_ref().map(|cast| {
        let balance = ChartBalance::from_vector(info.chart.day_master(), &vector, config.top_n);
        let year = config.insight_year.unwrap_or_else(|| Utc::now().year());
        combine_chart_and_hexagram(&balance, cast.original, year)
    });

    debug!(
        chart = %info.chart,
        balance = elements.balance_index,
        cycles = luck_cycles.len(),
        "profile computed"
    );

    Ok(Profile {
        birth_instant_utc: iso(&birth.utc()),
        tz_offset_minutes: birth.tz_offset_minutes(),
        day_start_hour_local: birth.day_boundary().start_hour(),
        effective_year: info.effective_year,
        solar_month: info.solar_month,
        chart: ChartDto {
            year: info.chart.year.into(),
            month: info.chart.month.into(),
            day: info.chart.day.into(),
            hour: info.chart.hour.into(),
        },
        elements,
        luck_start: LuckStartDto {
            direction: luck.direction,
            start_age_years: luck.start_age.years_exact,
            years: luck.start_age.years,
            months: luck.start_age.months,
            start_age: luck.start_age.base_age,
        },
        luck_cycles,
        hexagram,
        insight,
    })
}
