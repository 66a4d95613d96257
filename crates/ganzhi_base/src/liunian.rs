//! Annual pillars (LiuNian, 流年).

use serde::Serialize;

use crate::error::BaziError;
use crate::jiazi::JiaZi;
use crate::pillar::year_pillar;

/// The pillar ruling one Gregorian year (from its Start of Spring).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnnualPillar {
    pub year: i32,
    pub pillar: JiaZi,
}

pub const fn annual_pillar(year: i32) -> AnnualPillar {
    AnnualPillar {
        year,
        pillar: year_pillar(year),
    }
}

/// Longest run of years [`annual_pillars`] will produce.
pub const MAX_YEAR_SPAN: i64 = 1000;

/// Pillars for `span` consecutive years starting at `start_year`.
///
/// `span` must lie in `1..=MAX_YEAR_SPAN` and the last year must fit in
/// an `i32`; every returned year is distinct.
pub fn annual_pillars(start_year: i32, span: i64) -> Result<Vec<AnnualPillar>, BaziError> {
    if !(1..=MAX_YEAR_SPAN).contains(&span) {
        return Err(BaziError::InvalidYearSpan(span));
    }
    let last = i64::from(start_year) + span - 1;
    if i32::try_from(last).is_err() {
        return Err(BaziError::YearOutOfRange { start_year, span });
    }
    Ok((0..span)
        .filter_map(|k| i32::try_from(i64::from(start_year) + k).ok())
        .map(annual_pillar)
        .collect())
}
