//! How well a cast hexagram fits a chart in a given year.
//!
//! The score starts at [`BASE_SUPPORT`] and moves with three signals:
//! whether the upper trigram's element is one the chart lacks or one it
//! already has too much of, whether both trigrams match, and whether the
//! year's stem shares the day master's element. The result is clamped to
//! 0..=100.

use ganzhi_base::{Element, ElementVector, Stem, annual_pillar};
use ganzhi_yijing::Hexagram;
use serde::Serialize;

use crate::profile::PillarDto;

pub const BASE_SUPPORT: i32 = 50;
pub const FAVORABLE_BONUS: i32 = 40;
pub const UNFAVORABLE_PENALTY: i32 = 30;
pub const MATCHED_TRIGRAM_BONUS: i32 = 15;
pub const STEM_RESONANCE_BONUS: i32 = 10;

/// Lowest score rated [`Alignment::High`].
pub const HIGH_ALIGNMENT: u8 = 75;
/// Lowest score rated [`Alignment::Moderate`].
pub const MODERATE_ALIGNMENT: u8 = 45;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    High,
    Moderate,
    Low,
}

impl Alignment {
    pub const fn from_score(score: u8) -> Self {
        if score >= HIGH_ALIGNMENT {
            Self::High
        } else if score >= MODERATE_ALIGNMENT {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}

/// Chart side of the comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartBalance {
    pub day_master: Stem,
    /// Elements the chart is short of.
    pub favorable: Vec<Element>,
    /// Elements the chart already carries most of.
    pub unfavorable: Vec<Element>,
}

impl ChartBalance {
    /// Weakest `n` elements are favorable, strongest `n` unfavorable.
    pub fn from_vector(day_master: Stem, vector: &ElementVector, n: usize) -> Self {
        Self {
            day_master,
            favorable: vector.bottom_n(n).into_iter().map(|r| r.element).collect(),
            unfavorable: vector.top_n(n).into_iter().map(|r| r.element).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HexagramInsight {
    pub year: i32,
    pub year_pillar: PillarDto,
    pub hexagram_element: Element,
    /// 0..=100.
    pub support_score: u8,
    pub alignment: Alignment,
    /// One line per signal that moved the score.
    pub rationale: Vec<String>,
}

/// Score `hexagram` against `balance` for Gregorian `year`.
pub fn combine_chart_and_hexagram(
    balance: &ChartBalance,
    hexagram: Hexagram,
    year: i32,
) -> HexagramInsight {
    let annual = annual_pillar(year);
    let element = hexagram.upper().element();
    let mut score = BASE_SUPPORT;
    let mut rationale = Vec::new();

    if balance.favorable.contains(&element) {
        score += FAVORABLE_BONUS;
        rationale.push(format!(
            "Hexagram element {} is one the chart needs.",
            element.name()
        ));
    }
    if balance.unfavorable.contains(&element) {
        score -= UNFAVORABLE_PENALTY;
        rationale.push(format!(
            "Hexagram element {} is already dominant in the chart.",
            element.name()
        ));
    }
    if hexagram.upper() == hexagram.lower() {
        score += MATCHED_TRIGRAM_BONUS;
        rationale.push(format!(
            "Doubled {} trigram gives a steady theme.",
            hexagram.upper().name()
        ));
    }
    let year_stem = annual.pillar.stem();
    if year_stem.element() == balance.day_master.element() {
        score += STEM_RESONANCE_BONUS;
        rationale.push(format!(
            "Year stem {} shares the day master's {} element.",
            year_stem.name(),
            year_stem.element().name()
        ));
    }

    let support_score = score.clamp(0, 100) as u8;
    HexagramInsight {
        year,
        year_pillar: annual.pillar.into(),
        hexagram_element: element,
        support_score,
        alignment: Alignment::from_score(support_score),
        rationale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alignment_thresholds() {
        assert_eq!(Alignment::from_score(100), Alignment::High);
        assert_eq!(Alignment::from_score(75), Alignment::High);
        assert_eq!(Alignment::from_score(74), Alignment::Moderate);
        assert_eq!(Alignment::from_score(45), Alignment::Moderate);
        assert_eq!(Alignment::from_score(44), Alignment::Low);
        assert_eq!(Alignment::from_score(0), Alignment::Low);
    }

    #[test]
    fn balance_splits_weakest_and_strongest() {
        let v = ElementVector {
            wood: 3.2,
            fire: 2.0,
            earth: 1.6,
            metal: 1.0,
            water: 0.2,
        };
        let b = ChartBalance::from_vector(Stem::Jia, &v, 2);
        assert_eq!(b.favorable, vec![Element::Water, Element::Metal]);
        assert_eq!(b.unfavorable, vec![Element::Wood, Element::Fire]);
    }

    #[test]
    fn element_in_both_sets_nets_out() {
        let b = ChartBalance {
            day_master: Stem::Geng,
            favorable: vec![Element::Earth],
            unfavorable: vec![Element::Earth],
        };
        // Kun over Zhen: Earth upper, no doubled trigram; 2024 is Wood.
        let hex = ganzhi_yijing::from_trigrams(
            ganzhi_yijing::Trigram::Zhen,
            ganzhi_yijing::Trigram::Kun,
        );
        let insight = combine_chart_and_hexagram(&b, hex, 2024);
        assert_eq!(insight.support_score, 60);
        assert_eq!(insight.rationale.len(), 2);
    }
}
