//! Error types for solar-term search and chart assembly.

use ganzhi_base::BaziError;
use ganzhi_time::TimeError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// Year outside the range the solar-term approximation is validated for.
    #[error("year {year} outside supported range {min}..={max}")]
    UnsupportedYear { year: i32, min: i32, max: i32 },
    #[error(transparent)]
    Bazi(#[from] BaziError),
    #[error(transparent)]
    Time(#[from] TimeError),
}
