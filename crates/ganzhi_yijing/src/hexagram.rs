//! The 64 hexagrams (六十四卦) in King Wen order.
//!
//! A hexagram is identified by its 6-bit line pattern: bit `i` is line `i`
//! counted from the bottom, set for yang. The lower trigram is the low three
//! bits, the upper trigram the high three. King Wen numbers (1..=64) are the
//! canonical display numbering; the pattern <-> number tables are built at
//! compile time and checked to be a bijection.

use ganzhi_base::Polarity;
use serde::{Serialize, Serializer};

use crate::error::YijingError;
use crate::trigram::{Trigram, line_at};

/// Static description of one hexagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HexagramInfo {
    /// King Wen sequence number, 1..=64.
    pub number: u8,
    /// Line pattern, bottom line in bit 0.
    pub pattern: u8,
    pub symbol: &'static str,
    pub chinese: &'static str,
    pub pinyin: &'static str,
    /// Literal English title.
    pub name: &'static str,
    /// Conventional English gloss.
    pub meaning: &'static str,
}

const fn info(
    number: u8,
    pattern: u8,
    symbol: &'static str,
    chinese: &'static str,
    pinyin: &'static str,
    name: &'static str,
    meaning: &'static str,
) -> HexagramInfo {
    HexagramInfo {
        number,
        pattern,
        symbol,
        chinese,
        pinyin,
        name,
        meaning,
    }
}

/// All 64 hexagrams, indexed by King Wen number minus one.
pub const HEXAGRAMS: [HexagramInfo; 64] = [
    info(1, 0b111111, "䷀", "乾", "Qián", "Force", "The Creative"),
    info(2, 0b000000, "䷁", "坤", "Kūn", "Field", "The Receptive"),
    info(3, 0b010001, "䷂", "屯", "Zhūn", "Sprouting", "Difficulty at the Beginning"),
    info(4, 0b100010, "䷃", "蒙", "Méng", "Enveloping", "Youthful Folly"),
    info(5, 0b010111, "䷄", "需", "Xū", "Attending", "Waiting"),
    info(6, 0b111010, "䷅", "訟", "Sòng", "Arguing", "Conflict"),
    info(7, 0b000010, "䷆", "師", "Shī", "Leading", "The Army"),
    info(8, 0b010000, "䷇", "比", "Bǐ", "Grouping", "Holding Together"),
    info(9, 0b110111, "䷈", "小畜", "Xiǎo Chù", "Small Accumulating", "Small Taming"),
    info(10, 0b111011, "䷉", "履", "Lǚ", "Treading", "Conduct"),
    info(11, 0b000111, "䷊", "泰", "Tài", "Pervading", "Peace"),
    info(12, 0b111000, "䷋", "否", "Pǐ", "Obstruction", "Standstill"),
    info(13, 0b111101, "䷌", "同人", "Tóng Rén", "Concording People", "Fellowship"),
    info(14, 0b101111, "䷍", "大有", "Dà Yǒu", "Great Possessing", "Great Possession"),
    info(15, 0b000100, "䷎", "謙", "Qiān", "Humbling", "Modesty"),
    info(16, 0b001000, "䷏", "豫", "Yù", "Providing-For", "Enthusiasm"),
    info(17, 0b011001, "䷐", "隨", "Suí", "Following", "Following"),
    info(18, 0b100110, "䷑", "蠱", "Gǔ", "Correcting", "Work on What Has Been Spoiled"),
    info(19, 0b000011, "䷒", "臨", "Lín", "Nearing", "Approach"),
    info(20, 0b110000, "䷓", "觀", "Guān", "Viewing", "Contemplation"),
    info(21, 0b101001, "䷔", "噬嗑", "Shì Kè", "Gnawing Bite", "Biting Through"),
    info(22, 0b100101, "䷕", "賁", "Bì", "Adorning", "Grace"),
    info(23, 0b100000, "䷖", "剝", "Bō", "Stripping", "Splitting Apart"),
    info(24, 0b000001, "䷗", "復", "Fù", "Returning", "Return"),
    info(25, 0b111001, "䷘", "無妄", "Wú Wàng", "Without Embroiling", "Innocence"),
    info(26, 0b100111, "䷙", "大畜", "Dà Chù", "Great Accumulating", "Great Taming"),
    info(27, 0b100001, "䷚", "頤", "Yí", "Swallowing", "Nourishment"),
    info(28, 0b011110, "䷛", "大過", "Dà Guò", "Great Exceeding", "Great Preponderance"),
    info(29, 0b010010, "䷜", "坎", "Kǎn", "Gorge", "The Abysmal"),
    info(30, 0b101101, "䷝", "離", "Lí", "Radiance", "The Clinging, Fire"),
    info(31, 0b011100, "䷞", "咸", "Xián", "Conjoining", "Influence"),
    info(32, 0b001110, "䷟", "恆", "Héng", "Persevering", "Duration"),
    info(33, 0b111100, "䷠", "遯", "Dùn", "Retiring", "Retreat"),
    info(34, 0b001111, "䷡", "大壯", "Dà Zhuàng", "Great Invigorating", "Great Power"),
    info(35, 0b101000, "䷢", "晉", "Jìn", "Prospering", "Progress"),
    info(36, 0b000101, "䷣", "明夷", "Míng Yí", "Darkening of the Light", "Darkening of the Light"),
    info(37, 0b110101, "䷤", "家人", "Jiā Rén", "Dwelling People", "The Family"),
    info(38, 0b101011, "䷥", "睽", "Kuí", "Polarising", "Opposition"),
    info(39, 0b010100, "䷦", "蹇", "Jiǎn", "Limping", "Obstruction"),
    info(40, 0b001010, "䷧", "解", "Xiè", "Taking-Apart", "Deliverance"),
    info(41, 0b100011, "䷨", "損", "Sǔn", "Diminishing", "Decrease"),
    info(42, 0b110001, "䷩", "益", "Yì", "Augmenting", "Increase"),
    info(43, 0b011111, "䷪", "夬", "Guài", "Parting", "Breakthrough"),
    info(44, 0b111110, "䷫", "姤", "Gòu", "Coupling", "Coming to Meet"),
    info(45, 0b011000, "䷬", "萃", "Cuì", "Clustering", "Gathering Together"),
    info(46, 0b000110, "䷭", "升", "Shēng", "Ascending", "Pushing Upward"),
    info(47, 0b011010, "䷮", "困", "Kùn", "Confining", "Oppression"),
    info(48, 0b010110, "䷯", "井", "Jǐng", "Welling", "The Well"),
    info(49, 0b011101, "䷰", "革", "Gé", "Skinning", "Revolution"),
    info(50, 0b101110, "䷱", "鼎", "Dǐng", "Holding", "The Cauldron"),
    info(51, 0b001001, "䷲", "震", "Zhèn", "Shake", "The Arousing, Thunder"),
    info(52, 0b100100, "䷳", "艮", "Gèn", "Bound", "Keeping Still, Mountain"),
    info(53, 0b110100, "䷴", "漸", "Jiàn", "Infiltrating", "Development"),
    info(54, 0b001011, "䷵", "歸妹", "Guī Mèi", "Converting the Maiden", "The Marrying Maiden"),
    info(55, 0b001101, "䷶", "豐", "Fēng", "Abounding", "Abundance"),
    info(56, 0b101100, "䷷", "旅", "Lǚ", "Sojourning", "The Wanderer"),
    info(57, 0b110110, "䷸", "巽", "Xùn", "Ground", "The Gentle, Wind"),
    info(58, 0b011011, "䷹", "兌", "Duì", "Open", "The Joyous, Lake"),
    info(59, 0b110010, "䷺", "渙", "Huàn", "Dispersing", "Dispersion"),
    info(60, 0b010011, "䷻", "節", "Jié", "Articulating", "Limitation"),
    info(61, 0b110011, "䷼", "中孚", "Zhōng Fú", "Center Confirming", "Inner Truth"),
    info(62, 0b001100, "䷽", "小過", "Xiǎo Guò", "Small Exceeding", "Small Preponderance"),
    info(63, 0b010101, "䷾", "既濟", "Jì Jì", "Already Fording", "After Completion"),
    info(64, 0b101010, "䷿", "未濟", "Wèi Jì", "Not-Yet Fording", "Before Completion"),
];

const fn invert_patterns() -> [u8; 64] {
    let mut by_pattern = [0u8; 64];
    let mut i = 0;
    while i < 64 {
        let p = HEXAGRAMS[i].pattern as usize;
        assert!(p < 64, "pattern exceeds six bits");
        assert!(by_pattern[p] == 0, "pattern assigned twice");
        assert!(HEXAGRAMS[i].number as usize == i + 1, "table out of King Wen order");
        by_pattern[p] = HEXAGRAMS[i].number;
        i += 1;
    }
    by_pattern
}

/// King Wen number of each 6-bit pattern.
pub const KING_WEN_BY_PATTERN: [u8; 64] = invert_patterns();

/// A hexagram, stored as its line pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hexagram {
    pattern: u8,
}

impl Hexagram {
    /// Line pattern, 0..=63.
    pub const fn pattern(self) -> u8 {
        self.pattern
    }

    /// King Wen number, 1..=64.
    pub const fn number(self) -> u8 {
        KING_WEN_BY_PATTERN[self.pattern as usize]
    }

    pub const fn info(self) -> &'static HexagramInfo {
        let table: &'static [HexagramInfo; 64] = &HEXAGRAMS;
        &table[self.number() as usize - 1]
    }

    /// Lines bottom to top.
    pub const fn lines(self) -> [Polarity; 6] {
        let p = self.pattern;
        [
            line_at(p, 0),
            line_at(p, 1),
            line_at(p, 2),
            line_at(p, 3),
            line_at(p, 4),
            line_at(p, 5),
        ]
    }

    /// Lines 0-2.
    pub const fn lower(self) -> Trigram {
        Trigram::from_bits(self.pattern & 0b111)
    }

    /// Lines 3-5.
    pub const fn upper(self) -> Trigram {
        Trigram::from_bits(self.pattern >> 3)
    }

    /// Same hexagram with the line at `position` inverted.
    pub fn flip(self, position: usize) -> Result<Self, YijingError> {
        if position > 5 {
            return Err(YijingError::InvalidLinePosition(position));
        }
        Ok(Self {
            pattern: self.pattern ^ (1 << position),
        })
    }
}

impl std::fmt::Display for Hexagram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let i = self.info();
        write!(f, "{} {} {} ({})", i.number, i.symbol, i.chinese, i.meaning)
    }
}

impl Serialize for Hexagram {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.info().serialize(serializer)
    }
}

/// Hexagram for six lines listed bottom to top. Total: every pattern is a
/// hexagram.
pub const fn lookup_hexagram(lines: [Polarity; 6]) -> Hexagram {
    let mut pattern = 0u8;
    let mut i = 0;
    while i < 6 {
        if matches!(lines[i], Polarity::Yang) {
            pattern |= 1 << i;
        }
        i += 1;
    }
    Hexagram { pattern }
}

pub fn hexagram_from_pattern(pattern: u8) -> Result<Hexagram, YijingError> {
    if pattern > 63 {
        return Err(YijingError::InvalidPattern(pattern));
    }
    Ok(Hexagram { pattern })
}

/// Hexagram with King Wen number `number` (1..=64).
pub fn hexagram_by_number(number: u8) -> Result<Hexagram, YijingError> {
    if !(1..=64).contains(&number) {
        return Err(YijingError::InvalidKingWenNumber(number));
    }
    Ok(Hexagram {
        pattern: HEXAGRAMS[number as usize - 1].pattern,
    })
}

/// Hexagram stacked from two trigrams.
pub const fn from_trigrams(lower: Trigram, upper: Trigram) -> Hexagram {
    Hexagram {
        pattern: (upper.bits() << 3) | lower.bits(),
    }
}
