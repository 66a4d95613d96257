//! The eight trigrams (八卦).
//!
//! A trigram's id is its 3-bit line pattern read bottom-up, bit set for a
//! yang line: Kun (☷) = 0b000, Qian (☰) = 0b111.

use ganzhi_base::{Element, Polarity};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Trigram {
    Kun,
    Zhen,
    Kan,
    Dui,
    Gen,
    Li,
    Xun,
    Qian,
}

/// All eight trigrams ordered by line pattern (index = bits).
pub const ALL_TRIGRAMS: [Trigram; 8] = [
    Trigram::Kun,
    Trigram::Zhen,
    Trigram::Kan,
    Trigram::Dui,
    Trigram::Gen,
    Trigram::Li,
    Trigram::Xun,
    Trigram::Qian,
];

/// Polarity of line `i` (0 = bottom) in a bit pattern.
pub(crate) const fn line_at(bits: u8, i: u8) -> Polarity {
    if bits & (1 << i) != 0 {
        Polarity::Yang
    } else {
        Polarity::Yin
    }
}

impl Trigram {
    /// Trigram of the low three bits of `bits`.
    pub const fn from_bits(bits: u8) -> Self {
        ALL_TRIGRAMS[(bits & 0b111) as usize]
    }

    /// Trigram from three lines, bottom first.
    pub const fn from_lines(lines: [Polarity; 3]) -> Self {
        let mut bits = 0u8;
        let mut i = 0;
        while i < 3 {
            if matches!(lines[i], Polarity::Yang) {
                bits |= 1 << i;
            }
            i += 1;
        }
        Self::from_bits(bits)
    }

    pub const fn bits(self) -> u8 {
        match self {
            Self::Kun => 0,
            Self::Zhen => 1,
            Self::Kan => 2,
            Self::Dui => 3,
            Self::Gen => 4,
            Self::Li => 5,
            Self::Xun => 6,
            Self::Qian => 7,
        }
    }

    /// Lines bottom to top.
    pub const fn lines(self) -> [Polarity; 3] {
        let b = self.bits();
        [line_at(b, 0), line_at(b, 1), line_at(b, 2)]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Kun => "Kun",
            Self::Zhen => "Zhen",
            Self::Kan => "Kan",
            Self::Dui => "Dui",
            Self::Gen => "Gen",
            Self::Li => "Li",
            Self::Xun => "Xun",
            Self::Qian => "Qian",
        }
    }

    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Kun => "坤",
            Self::Zhen => "震",
            Self::Kan => "坎",
            Self::Dui => "兌",
            Self::Gen => "艮",
            Self::Li => "離",
            Self::Xun => "巽",
            Self::Qian => "乾",
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Kun => "☷",
            Self::Zhen => "☳",
            Self::Kan => "☵",
            Self::Dui => "☱",
            Self::Gen => "☶",
            Self::Li => "☲",
            Self::Xun => "☴",
            Self::Qian => "☰",
        }
    }

    /// Natural image.
    pub const fn image(self) -> &'static str {
        match self {
            Self::Kun => "Earth",
            Self::Zhen => "Thunder",
            Self::Kan => "Water",
            Self::Dui => "Lake",
            Self::Gen => "Mountain",
            Self::Li => "Fire",
            Self::Xun => "Wind",
            Self::Qian => "Heaven",
        }
    }

    /// Feng Shui element.
    pub const fn element(self) -> Element {
        match self {
            Self::Kun | Self::Gen => Element::Earth,
            Self::Zhen | Self::Xun => Element::Wood,
            Self::Kan => Element::Water,
            Self::Dui | Self::Qian => Element::Metal,
            Self::Li => Element::Fire,
        }
    }
}
