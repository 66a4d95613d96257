//! I Ching (Yijing) hexagram engine.
//!
//! Independent of the BaZi chart: trigram and King Wen hexagram tables,
//! three-coin line casting with an injected RNG, and the changing-line
//! transformation to a relating hexagram.

pub mod cast;
pub mod error;
pub mod hexagram;
pub mod trigram;

pub use cast::{
    CastResult, HEADS, LineValue, TAILS, cast_from_lines, cast_hexagram, cast_line,
    relating_hexagram, toss_coin,
};
pub use error::YijingError;
pub use hexagram::{
    HEXAGRAMS, Hexagram, HexagramInfo, KING_WEN_BY_PATTERN, from_trigrams, hexagram_by_number,
    hexagram_from_pattern, lookup_hexagram,
};
pub use trigram::{ALL_TRIGRAMS, Trigram};
