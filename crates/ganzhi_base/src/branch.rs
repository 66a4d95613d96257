//! The twelve Earthly Branches (地支) and their hidden stems.

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::stem::Stem;
use crate::stem::Stem::{Bing, Ding, Geng, Gui, Ji, Jia, Ren, Xin, Yi};

/// Sum of hidden-stem weights within one branch, in per-mille.
pub const HIDDEN_STEM_WEIGHT_TOTAL: u16 = 1000;

/// A stem concealed inside a branch, with its share of the branch weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HiddenStem {
    pub stem: Stem,
    /// Share in per-mille (1000 = whole branch).
    pub weight_permille: u16,
}

impl HiddenStem {
    const fn new(stem: Stem, weight_permille: u16) -> Self {
        Self {
            stem,
            weight_permille,
        }
    }

    /// Weight as a fraction of 1.0.
    pub fn weight(self) -> f64 {
        f64::from(self.weight_permille) / f64::from(HIDDEN_STEM_WEIGHT_TOTAL)
    }
}

/// The 12 earthly branches, Zi first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in cycle order (index 0 = Zi).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

const HIDDEN_STEMS: [&[HiddenStem]; 12] = [
    &[HiddenStem::new(Gui, 1000)],
    &[
        HiddenStem::new(Ji, 600),
        HiddenStem::new(Gui, 300),
        HiddenStem::new(Xin, 100),
    ],
    &[
        HiddenStem::new(Jia, 600),
        HiddenStem::new(Bing, 300),
        HiddenStem::new(Stem::Wu, 100),
    ],
    &[HiddenStem::new(Yi, 1000)],
    &[
        HiddenStem::new(Stem::Wu, 600),
        HiddenStem::new(Yi, 300),
        HiddenStem::new(Gui, 100),
    ],
    &[
        HiddenStem::new(Bing, 600),
        HiddenStem::new(Stem::Wu, 300),
        HiddenStem::new(Geng, 100),
    ],
    &[HiddenStem::new(Ding, 700), HiddenStem::new(Ji, 300)],
    &[
        HiddenStem::new(Ji, 600),
        HiddenStem::new(Ding, 300),
        HiddenStem::new(Yi, 100),
    ],
    &[
        HiddenStem::new(Geng, 600),
        HiddenStem::new(Ren, 300),
        HiddenStem::new(Stem::Wu, 100),
    ],
    &[HiddenStem::new(Xin, 1000)],
    &[
        HiddenStem::new(Stem::Wu, 600),
        HiddenStem::new(Xin, 300),
        HiddenStem::new(Ding, 100),
    ],
    &[HiddenStem::new(Ren, 700), HiddenStem::new(Jia, 300)],
];

const fn hidden_weights_balanced() -> bool {
    let mut b = 0;
    while b < HIDDEN_STEMS.len() {
        let row = HIDDEN_STEMS[b];
        if row.is_empty() || row.len() > 3 {
            return false;
        }
        let mut sum = 0u16;
        let mut i = 0;
        while i < row.len() {
            sum += row[i].weight_permille;
            i += 1;
        }
        if sum != HIDDEN_STEM_WEIGHT_TOTAL {
            return false;
        }
        b += 1;
    }
    true
}

const _: () = assert!(
    hidden_weights_balanced(),
    "every branch must hold 1-3 hidden stems weighing 1000 per-mille"
);

impl Branch {
    /// Branch at any integer position; wraps modulo 12.
    pub const fn from_index(i: i64) -> Self {
        ALL_BRANCHES[i.rem_euclid(12) as usize]
    }

    /// 0-based index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// Zodiac animal.
    pub const fn animal(self) -> &'static str {
        match self {
            Self::Zi => "Rat",
            Self::Chou => "Ox",
            Self::Yin => "Tiger",
            Self::Mao => "Rabbit",
            Self::Chen => "Dragon",
            Self::Si => "Snake",
            Self::Wu => "Horse",
            Self::Wei => "Goat",
            Self::Shen => "Monkey",
            Self::You => "Rooster",
            Self::Xu => "Dog",
            Self::Hai => "Pig",
        }
    }

    /// Primary element.
    pub const fn element(self) -> Element {
        match self {
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Chou | Self::Chen | Self::Wei | Self::Xu => Element::Earth,
            Self::Shen | Self::You => Element::Metal,
            Self::Hai | Self::Zi => Element::Water,
        }
    }

    /// Hidden stems, main qi first.
    pub const fn hidden_stems(self) -> &'static [HiddenStem] {
        HIDDEN_STEMS[self.index() as usize]
    }

    /// The dominant (first) hidden stem.
    pub const fn main_qi(self) -> Stem {
        self.hidden_stems()[0].stem
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
