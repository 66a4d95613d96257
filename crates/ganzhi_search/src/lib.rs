//! Solar-term search and chart assembly.
//!
//! This crate provides:
//! - A calendar-grade solar-term approximator (1901-2100)
//! - Jie (month boundary) lookup around an instant
//! - Four-pillar charts from a [`ganzhi_time::BirthTime`]
//! - Luck-cycle start age and sequence for a birth

pub mod chart;
pub mod error;
pub mod luck;
pub mod solar_term;
pub mod solar_term_types;
pub mod solar_terms;
pub mod sun;

pub use chart::{ChartInfo, chart_for_birth, year_and_month};
pub use error::SearchError;
pub use luck::{LuckCycleSet, luck_cycles_for_birth, luck_cycles_for_chart};
pub use solar_term::{ALL_SOLAR_TERMS, SolarTerm};
pub use solar_term_types::SolarTermEvent;
pub use solar_terms::{
    MAX_SUPPORTED_YEAR, MIN_SUPPORTED_YEAR, current_solar_term, jie_at_or_before,
    next_jie_after, solar_term_event, solar_terms_for_year,
};
pub use sun::apparent_longitude_deg;
