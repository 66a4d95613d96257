//! Inbound profile request and its validation.

use ganzhi_base::Gender;
use ganzhi_time::{BirthTime, DayBoundary};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::ProfileConfig;
use crate::error::ProfileError;

/// Wire form of a profile request (JSON, camelCase).
///
/// `birthInstantUtc` and `gender` are required; the offset and day-start
/// hour fall back to [`ProfileConfig`] defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRequest {
    /// RFC 3339 birth instant.
    #[serde(default, alias = "birthIsoUtc")]
    pub birth_instant_utc: Option<String>,
    /// "male" or "female".
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub tz_offset_minutes: Option<i32>,
    /// 0 (midnight rollover) or 23 (Zi-hour rollover).
    #[serde(default)]
    pub day_start_hour_local: Option<i64>,
}

/// A request that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub birth: BirthTime,
    pub gender: Gender,
}

impl ProfileRequest {
    pub fn new(birth_instant_utc: impl Into<String>, gender: Gender) -> Self {
        Self {
            birth_instant_utc: Some(birth_instant_utc.into()),
            gender: Some(gender.name().to_string()),
            tz_offset_minutes: None,
            day_start_hour_local: None,
        }
    }

    pub fn with_tz_offset_minutes(mut self, minutes: i32) -> Self {
        self.tz_offset_minutes = Some(minutes);
        self
    }

    pub fn with_day_start_hour(mut self, hour: i64) -> Self {
        self.day_start_hour_local = Some(hour);
        self
    }

    /// Check every field before any calculation runs.
    pub fn validate(&self, config: &ProfileConfig) -> Result<ValidatedRequest, ProfileError> {
        self.validate_inner(config).inspect_err(|e| {
            warn!(error = %e, "profile request rejected");
        })
    }

    fn validate_inner(&self, config: &ProfileConfig) -> Result<ValidatedRequest, ProfileError> {
        let instant = self
            .birth_instant_utc
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or(ProfileError::MissingField("birthInstantUtc"))?;
        let gender = self
            .gender
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or(ProfileError::MissingField("gender"))?
            .parse::<Gender>()
            .map_err(ProfileError::InvalidGender)?;
        let tz = self
            .tz_offset_minutes
            .unwrap_or(config.default_tz_offset_minutes);
        let boundary = DayBoundary::from_start_hour(
            self.day_start_hour_local
                .unwrap_or(config.default_day_start_hour),
        )?;
        let birth = BirthTime::parse(instant, tz, boundary)?;
        Ok(ValidatedRequest { birth, gender })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ganzhi_time::TimeError;

    #[test]
    fn defaults_fill_missing_offset_and_boundary() {
        let req: ProfileRequest =
            serde_json::from_str(r#"{"birthInstantUtc":"2024-02-10T04:00:00Z","gender":"male"}"#)
                .unwrap();
        let v = req.validate(&ProfileConfig::default()).unwrap();
        assert_eq!(v.birth.tz_offset_minutes(), 480);
        assert_eq!(v.birth.day_boundary(), DayBoundary::ZiHour);
        assert_eq!(v.gender, Gender::Male);
    }

    #[test]
    fn accepts_legacy_field_name() {
        let req: ProfileRequest =
            serde_json::from_str(r#"{"birthIsoUtc":"2024-02-10T04:00:00Z","gender":"female"}"#)
                .unwrap();
        assert!(req.validate(&ProfileConfig::default()).is_ok());
    }

    #[test]
    fn missing_fields_fail_fast() {
        let req = ProfileRequest {
            gender: Some("male".into()),
            ..Default::default()
        };
        assert!(matches!(
            req.validate(&ProfileConfig::default()),
            Err(ProfileError::MissingField("birthInstantUtc"))
        ));
        let req = ProfileRequest {
            birth_instant_utc: Some("2024-02-10T04:00:00Z".into()),
            gender: Some("  ".into()),
            ..Default::default()
        };
        assert!(matches!(
            req.validate(&ProfileConfig::default()),
            Err(ProfileError::MissingField("gender"))
        ));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let cfg = ProfileConfig::default();
        let bad_gender = ProfileRequest {
            birth_instant_utc: Some("2024-02-10T04:00:00Z".into()),
            gender: Some("x".into()),
            ..Default::default()
        };
        assert!(matches!(bad_gender.validate(&cfg), Err(ProfileError::InvalidGender(_))));

        let bad_hour = ProfileRequest::new("2024-02-10T04:00:00Z", Gender::Male).with_day_start_hour(5);
        assert!(matches!(
            bad_hour.validate(&cfg),
            Err(ProfileError::Time(TimeError::InvalidDayStartHour(5)))
        ));

        let bad_ts = ProfileRequest::new("yesterday", Gender::Male);
        assert!(matches!(
            bad_ts.validate(&cfg),
            Err(ProfileError::Time(TimeError::InvalidTimestamp(_)))
        ));

        let bad_tz = ProfileRequest::new("2024-02-10T04:00:00Z", Gender::Male).with_tz_offset_minutes(900);
        assert!(matches!(
            bad_tz.validate(&cfg),
            Err(ProfileError::Time(TimeError::OffsetOutOfRange(900)))
        ));
    }
}
