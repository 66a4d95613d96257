//! Profile computation settings.
//!
//! Every field has a default, so a config file only needs to list what it
//! changes:
//!
//! ```json
//! { "luckCycleCount": 10, "includeHexagram": true, "hexagramSeed": 42 }
//! ```

use std::path::Path;

use ganzhi_base::{DEFAULT_LUCK_CYCLE_COUNT, MAX_LUCK_CYCLE_COUNT};
use ganzhi_time::{DayBoundary, MAX_TZ_OFFSET_MINUTES};
use serde::{Deserialize, Serialize};

use crate::error::ProfileError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ProfileConfig {
    /// Luck cycles per profile, 1..=12.
    pub luck_cycle_count: usize,
    /// Elements listed as strongest / weakest, 1..=5.
    pub top_n: usize,
    /// Cast a hexagram alongside the chart.
    pub include_hexagram: bool,
    /// Fixed RNG seed for reproducible casts; entropy when absent.
    pub hexagram_seed: Option<u64>,
    /// Year the cast hexagram is read against; the current UTC year when
    /// absent.
    pub insight_year: Option<i32>,
    /// Offset used when a request omits `tzOffsetMinutes`.
    pub default_tz_offset_minutes: i32,
    /// Day-start hour used when a request omits `dayStartHourLocal`.
    pub default_day_start_hour: i64,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            luck_cycle_count: DEFAULT_LUCK_CYCLE_COUNT,
            top_n: 2,
            include_hexagram: false,
            hexagram_seed: None,
            insight_year: None,
            default_tz_offset_minutes: 480,
            default_day_start_hour: 23,
        }
    }
}

impl ProfileConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ProfileError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        if !(1..=MAX_LUCK_CYCLE_COUNT).contains(&self.luck_cycle_count) {
            return Err(ProfileError::InvalidConfig(format!(
                "luckCycleCount {} not in 1..={MAX_LUCK_CYCLE_COUNT}",
                self.luck_cycle_count
            )));
        }
        if !(1..=5).contains(&self.top_n) {
            return Err(ProfileError::InvalidConfig(format!(
                "topN {} not in 1..=5",
                self.top_n
            )));
        }
        if self.default_tz_offset_minutes.abs() > MAX_TZ_OFFSET_MINUTES {
            return Err(ProfileError::InvalidConfig(format!(
                "defaultTzOffsetMinutes {} beyond ±{MAX_TZ_OFFSET_MINUTES}",
                self.default_tz_offset_minutes
            )));
        }
        DayBoundary::from_start_hour(self.default_day_start_hour)
            .map_err(|e| ProfileError::InvalidConfig(e.to_string()))?;
        Ok(())
    }
}
