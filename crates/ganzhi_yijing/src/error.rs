//! Error types for hexagram lookup and casting.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum YijingError {
    /// A coin toss must be 2 (tails) or 3 (heads).
    #[error("coin toss value {0} is not 2 or 3")]
    InvalidToss(u8),
    /// Line values are 6, 7, 8 or 9.
    #[error("line value {0} is not one of 6, 7, 8, 9")]
    InvalidLineValue(u8),
    /// Line positions are 0 (bottom) ..= 5 (top).
    #[error("line position {0} out of range 0..=5")]
    InvalidLinePosition(usize),
    /// Six-bit patterns are 0..=63.
    #[error("hexagram pattern {0} out of range 0..=63")]
    InvalidPattern(u8),
    /// King Wen numbers are 1..=64.
    #[error("King Wen number {0} out of range 1..=64")]
    InvalidKingWenNumber(u8),
}
