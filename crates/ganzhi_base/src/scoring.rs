//! Five-Element scoring of a chart.
//!
//! Each pillar contributes its visible stem at [`STEM_WEIGHT`] plus the
//! hidden stems of its branch at their table weights (a branch totals 1.0).
//! A four-pillar chart therefore always scores 8.0 in raw total.

use serde::Serialize;

use crate::element::{ALL_ELEMENTS, Element};
use crate::pillar::{Chart, Pillar};

/// Weight of a pillar's visible stem.
pub const STEM_WEIGHT: f64 = 1.0;

/// Largest possible L1 distance between a share vector and the uniform
/// distribution over five elements (all weight in one element).
pub const BALANCE_MAX_L1: f64 = 1.6;

const UNIFORM_SHARE: f64 = 1.0 / 5.0;

/// Non-negative score per element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementVector {
    pub wood: f64,
    pub fire: f64,
    pub earth: f64,
    pub metal: f64,
    pub water: f64,
}

/// One element with its score, as produced by ranking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedElement {
    pub element: Element,
    pub score: f64,
}

impl ElementVector {
    pub const ZERO: Self = Self {
        wood: 0.0,
        fire: 0.0,
        earth: 0.0,
        metal: 0.0,
        water: 0.0,
    };

    /// Build from scores in canonical element order.
    pub const fn from_array(a: [f64; 5]) -> Self {
        Self {
            wood: a[0],
            fire: a[1],
            earth: a[2],
            metal: a[3],
            water: a[4],
        }
    }

    pub const fn to_array(&self) -> [f64; 5] {
        [self.wood, self.fire, self.earth, self.metal, self.water]
    }

    pub const fn get(&self, element: Element) -> f64 {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    fn slot(&mut self, element: Element) -> &mut f64 {
        match element {
            Element::Wood => &mut self.wood,
            Element::Fire => &mut self.fire,
            Element::Earth => &mut self.earth,
            Element::Metal => &mut self.metal,
            Element::Water => &mut self.water,
        }
    }

    /// Add `amount` to one element.
    pub fn add(&mut self, element: Element, amount: f64) {
        *self.slot(element) += amount;
    }

    /// Sum of all five scores.
    pub fn total(&self) -> f64 {
        self.to_array().iter().sum()
    }

    /// Scores divided by their sum; the zero vector when the sum is not
    /// positive.
    pub fn normalized(&self) -> Self {
        let total = self.total();
        if total <= 0.0 {
            return Self::ZERO;
        }
        Self::from_array(self.to_array().map(|v| v / total))
    }

    /// All five elements, highest score first, ties in canonical order.
    pub fn ranked(&self) -> [RankedElement; 5] {
        let mut out = ALL_ELEMENTS.map(|element| RankedElement {
            element,
            score: self.get(element),
        });
        // Stable sort keeps canonical order among equal scores.
        out.sort_by(|a, b| b.score.total_cmp(&a.score));
        out
    }

    /// The `n` strongest elements.
    pub fn top_n(&self, n: usize) -> Vec<RankedElement> {
        self.ranked().into_iter().take(n).collect()
    }

    /// The `n` weakest elements, weakest first, ties in canonical order.
    pub fn bottom_n(&self, n: usize) -> Vec<RankedElement> {
        let mut out = ALL_ELEMENTS.map(|element| RankedElement {
            element,
            score: self.get(element),
        });
        out.sort_by(|a, b| a.score.total_cmp(&b.score));
        out.into_iter().take(n).collect()
    }
}

impl std::ops::Add for ElementVector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let (a, b) = (self.to_array(), rhs.to_array());
        Self::from_array(std::array::from_fn(|i| a[i] + b[i]))
    }
}

/// Contribution of a single pillar: stem plus weighted hidden stems.
pub fn pillar_contribution(pillar: &Pillar) -> ElementVector {
    let mut v = ElementVector::ZERO;
    v.add(pillar.stem().element(), STEM_WEIGHT);
    for hidden in pillar.branch().hidden_stems() {
        v.add(hidden.stem.element(), hidden.weight());
    }
    v
}

/// Raw element vector of a chart.
pub fn score_chart(chart: &Chart) -> ElementVector {
    chart
        .pillars()
        .iter()
        .map(pillar_contribution)
        .fold(ElementVector::ZERO, |acc, v| acc + v)
}

/// Evenness of the element distribution on a 0..=100 scale.
///
/// `100 * (1 - L1 / 1.6)` where L1 is the distance of the normalized
/// shares from 0.2 each. Perfectly even scores 100, a single element
/// scores 0, and so does the zero vector.
pub fn balance_index(vector: &ElementVector) -> f64 {
    if vector.total() <= 0.0 {
        return 0.0;
    }
    let l1: f64 = vector
        .normalized()
        .to_array()
        .iter()
        .map(|s| (s - UNIFORM_SHARE).abs())
        .sum();
    (100.0 * (1.0 - l1 / BALANCE_MAX_L1)).clamp(0.0, 100.0)
}
