//! The 60-entry sexagenary (JiaZi, 甲子) cycle.
//!
//! Stems cycle with period 10 and branches with period 12, so pairing them
//! in lock-step yields 60 combinations, each with a matching stem/branch
//! parity. Index 0 is Jia-Zi, index 59 is Gui-Hai.
//!
//! Year pillars count from the canonical epoch 1984 (a Jia-Zi year).

use serde::Serialize;

use crate::branch::Branch;
use crate::element::Element;
use crate::stem::Stem;

/// Gregorian year whose pillar is Jia-Zi.
pub const JIAZI_EPOCH_YEAR: i32 = 1984;

/// Cycle index of the epoch year.
pub const JIAZI_EPOCH_INDEX: i64 = 0;

/// A parity-matched stem/branch pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct JiaZi {
    stem: Stem,
    branch: Branch,
}

const fn build_all() -> [JiaZi; 60] {
    let mut out = [JiaZi {
        stem: Stem::Jia,
        branch: Branch::Zi,
    }; 60];
    let mut i = 0;
    while i < 60 {
        out[i] = pillar_from_index(i as i64);
        i += 1;
    }
    out
}

/// All 60 pairs in cycle order.
pub const ALL_JIAZI: [JiaZi; 60] = build_all();

impl JiaZi {
    /// Pair a stem with a branch. `None` when their parities differ,
    /// since such a pair never occurs in the cycle.
    pub const fn new(stem: Stem, branch: Branch) -> Option<Self> {
        if stem.index() % 2 == branch.index() % 2 {
            Some(Self { stem, branch })
        } else {
            None
        }
    }

    /// Pair built from a stem and branch already known to share parity.
    pub(crate) const fn from_matched(stem: Stem, branch: Branch) -> Self {
        debug_assert!(stem.index() % 2 == branch.index() % 2);
        Self { stem, branch }
    }

    pub const fn stem(self) -> Stem {
        self.stem
    }

    pub const fn branch(self) -> Branch {
        self.branch
    }

    /// Position in the cycle, 0..=59.
    ///
    /// Solves `i ≡ s (mod 10)`, `i ≡ b (mod 12)` as `(6s - 5b) mod 60`.
    pub const fn cycle_index(self) -> u8 {
        let s = self.stem.index() as i32;
        let b = self.branch.index() as i32;
        (6 * s - 5 * b).rem_euclid(60) as u8
    }

    /// Element of the stem.
    pub const fn element(self) -> Element {
        self.stem.element()
    }

    /// Pinyin label, e.g. "Jia-Zi".
    pub fn name(self) -> String {
        format!("{}-{}", self.stem.name(), self.branch.name())
    }

    /// Chinese label, e.g. "甲子".
    pub fn chinese(self) -> String {
        format!("{}{}", self.stem.chinese(), self.branch.chinese())
    }

    /// Combined label, e.g. "甲子 (Jia-Zi)".
    pub fn display_label(self) -> String {
        format!("{} ({})", self.chinese(), self.name())
    }

    /// The pair `k` steps later in the cycle (negative `k` goes back).
    pub const fn offset(self, k: i64) -> Self {
        pillar_from_index(self.cycle_index() as i64 + k)
    }
}

impl std::fmt::Display for JiaZi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.chinese(), self.branch.chinese())
    }
}

/// Pair at any integer position in the cycle. Total over all integers.
pub const fn pillar_from_index(i: i64) -> JiaZi {
    JiaZi {
        stem: Stem::from_index(i),
        branch: Branch::from_index(i),
    }
}

/// Cycle position of `year` relative to a chosen epoch.
///
/// The result is not reduced; feed it to [`pillar_from_index`].
pub const fn index_of_year(year: i32, epoch_year: i32, epoch_index: i64) -> i64 {
    (year as i64 - epoch_year as i64) + epoch_index
}

/// Cycle index (0..=59) of a year on the canonical 1984 epoch.
pub const fn year_cycle_index(year: i32) -> u8 {
    index_of_year(year, JIAZI_EPOCH_YEAR, JIAZI_EPOCH_INDEX).rem_euclid(60) as u8
}
