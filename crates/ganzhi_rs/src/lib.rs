//! One-call BaZi profile computation.
//!
//! Wraps the lower crates behind a serde request/response contract:
//!
//! ```rust,ignore
//! use ganzhi_rs::*;
//!
//! let request: ProfileRequest = serde_json::from_str(
//!     r#"{"birthInstantUtc":"2024-02-10T04:00:00Z","gender":"male"}"#,
//! )?;
//! let profile = compute_profile(&request, &ProfileConfig::default())?;
//! println!("{}", serde_json::to_string_pretty(&profile)?);
//! ```

pub mod config;
pub mod error;
pub mod insight;
pub mod profile;
pub mod request;

pub use config::ProfileConfig;
pub use error::ProfileError;
pub use insight::{Alignment, ChartBalance, HexagramInsight, combine_chart_and_hexagram};
pub use profile::{
    ChartDto, ElementsDto, LuckCycleDto, LuckStartDto, PillarDto, Profile, compute_profile,
    compute_profile_with_rng,
};
pub use request::{ProfileRequest, ValidatedRequest};

// Re-export the core types so callers don't need the lower crates directly.
pub use ganzhi_base::{Branch, Element, Gender, JiaZi, LuckDirection, Stem};
pub use ganzhi_time::{BirthTime, DayBoundary};
pub use ganzhi_yijing::{CastResult, Hexagram, LineValue};
