//! Error type for the profile facade.

use ganzhi_base::BaziError;
use ganzhi_search::SearchError;
use ganzhi_time::TimeError;
use ganzhi_yijing::YijingError;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProfileError {
    /// A required request field is absent or empty.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("invalid gender `{0}` (expected \"male\" or \"female\")")]
    InvalidGender(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error(transparent)]
    Bazi(#[from] BaziError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error(transparent)]
    Yijing(#[from] YijingError),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
