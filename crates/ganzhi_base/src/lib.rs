//! Pure calendrical math for the Four Pillars (BaZi) engine.
//!
//! This crate provides:
//! - Heavenly stems, earthly branches (with weighted hidden stems) and the
//!   Five Elements
//! - The 60-entry sexagenary (JiaZi) cycle
//! - Year / month / day / hour pillar calculators over calendrical inputs
//! - Element scoring, ranking and the balance index
//! - Luck-cycle (DaYun) direction, start age and pillar sequence
//! - Annual pillars (LiuNian) and compass-direction elements
//!
//! Nothing here touches the clock or the sky: solar-term boundaries and
//! birth instants are resolved in `ganzhi_search` and fed in as plain
//! numbers.

pub mod branch;
pub mod direction;
pub mod element;
pub mod error;
pub mod jiazi;
pub mod liunian;
pub mod luck;
pub mod pillar;
pub mod scoring;
pub mod stem;

pub use branch::{ALL_BRANCHES, Branch, HIDDEN_STEM_WEIGHT_TOTAL, HiddenStem};
pub use direction::{ALL_DIRECTIONS, CompassDirection};
pub use element::{ALL_ELEMENTS, Element, Polarity};
pub use error::BaziError;
pub use jiazi::{
    ALL_JIAZI, JIAZI_EPOCH_INDEX, JIAZI_EPOCH_YEAR, JiaZi, index_of_year, pillar_from_index,
    year_cycle_index,
};
pub use liunian::{AnnualPillar, MAX_YEAR_SPAN, annual_pillar, annual_pillars};
pub use luck::{
    DAYS_PER_LUCK_YEAR, DEFAULT_LUCK_CYCLE_COUNT, Gender, LUCK_CYCLE_YEARS, LuckCycle,
    LuckDirection, MAX_LUCK_CYCLE_COUNT, StartAge, TROPICAL_YEAR_DAYS, luck_cycles,
    luck_direction, start_age_from_days,
};
pub use pillar::{
    Chart, DAY_PILLAR_OFFSET, Pillar, PillarRole, day_pillar, hour_branch, hour_pillar,
    month_pillar, month_start_stem, year_pillar, zi_hour_start_stem,
};
pub use scoring::{
    BALANCE_MAX_L1, ElementVector, RankedElement, STEM_WEIGHT, balance_index,
    pillar_contribution, score_chart,
};
pub use stem::{ALL_STEMS, Stem};
