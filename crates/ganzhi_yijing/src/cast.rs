//! Three-coin casting and changing-line transformation.
//!
//! Each line is the sum of three tosses (tails 2, heads 3):
//! 6 old yin, 7 young yang, 8 young yin, 9 old yang. Old lines are
//! "changing" and flip polarity in the relating hexagram.

use ganzhi_base::Polarity;
use rand::Rng;
use serde::Serialize;

use crate::error::YijingError;
use crate::hexagram::{Hexagram, lookup_hexagram};

pub const TAILS: u8 = 2;
pub const HEADS: u8 = 3;

/// Traditional line value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u8")]
pub enum LineValue {
    OldYin,
    YoungYang,
    YoungYin,
    OldYang,
}

impl LineValue {
    pub fn from_value(value: u8) -> Result<Self, YijingError> {
        match value {
            6 => Ok(Self::OldYin),
            7 => Ok(Self::YoungYang),
            8 => Ok(Self::YoungYin),
            9 => Ok(Self::OldYang),
            other => Err(YijingError::InvalidLineValue(other)),
        }
    }

    pub const fn value(self) -> u8 {
        match self {
            Self::OldYin => 6,
            Self::YoungYang => 7,
            Self::YoungYin => 8,
            Self::OldYang => 9,
        }
    }

    pub const fn polarity(self) -> Polarity {
        match self {
            Self::YoungYang | Self::OldYang => Polarity::Yang,
            Self::OldYin | Self::YoungYin => Polarity::Yin,
        }
    }

    pub const fn is_changing(self) -> bool {
        matches!(self, Self::OldYin | Self::OldYang)
    }

    /// Value after change: old yin becomes young yang, old yang young yin.
    pub const fn changed(self) -> Self {
        match self {
            Self::OldYin => Self::YoungYang,
            Self::OldYang => Self::YoungYin,
            other => other,
        }
    }
}

impl From<LineValue> for u8 {
    fn from(v: LineValue) -> u8 {
        v.value()
    }
}

/// Line from three coin tosses, each 2 (tails) or 3 (heads).
pub fn cast_line(tosses: [u8; 3]) -> Result<LineValue, YijingError> {
    let mut sum = 0u8;
    for t in tosses {
        if t != TAILS && t != HEADS {
            return Err(YijingError::InvalidToss(t));
        }
        sum += t;
    }
    LineValue::from_value(sum)
}

/// One fair coin toss.
pub fn toss_coin<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    if rng.gen_bool(0.5) { HEADS } else { TAILS }
}

/// `original` with each listed position (0..=5) flipped.
///
/// An empty list returns `original` unchanged. Repeated positions flip
/// once per occurrence.
pub fn relating_hexagram(
    original: Hexagram,
    changing_positions: &[usize],
) -> Result<Hexagram, YijingError> {
    changing_positions
        .iter()
        .try_fold(original, |h, &pos| h.flip(pos))
}

/// Outcome of a six-line cast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CastResult {
    /// Line values bottom to top.
    pub lines: [LineValue; 6],
    /// Positions (0 = bottom) of old lines, ascending.
    pub changing_positions: Vec<usize>,
    pub original: Hexagram,
    pub relating: Hexagram,
}

impl CastResult {
    pub fn has_changes(&self) -> bool {
        !self.changing_positions.is_empty()
    }
}

/// Build a cast result from six line values, bottom first.
pub fn cast_from_lines(lines: [LineValue; 6]) -> CastResult {
    let original = lookup_hexagram(lines.map(LineValue::polarity));
    let relating = lookup_hexagram(lines.map(|l| l.changed().polarity()));
    let changing_positions = lines
        .iter()
        .enumerate()
        .filter(|(_, l)| l.is_changing())
        .map(|(i, _)| i)
        .collect();
    CastResult {
        lines,
        changing_positions,
        original,
        relating,
    }
}

/// Cast six lines with the three-coin method, bottom line first.
pub fn cast_hexagram<R: Rng + ?Sized>(rng: &mut R) -> CastResult {
    let lines = std::array::from_fn(|_| {
        let tosses = [toss_coin(rng), toss_coin(rng), toss_coin(rng)];
        match cast_line(tosses) {
            Ok(line) => line,
            // toss_coin only yields TAILS or HEADS, whose triples sum to 6..=9.
            Err(e) => unreachable!("toss_coin produced an invalid toss: {e}"),
        }
    });
    cast_from_lines(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;

    #[test]
    fn coin_sums() {
        assert_eq!(cast_line([2, 2, 2]).unwrap(), LineValue::OldYin);
        assert_eq!(cast_line([2, 2, 3]).unwrap(), LineValue::YoungYang);
        assert_eq!(cast_line([3, 2, 3]).unwrap(), LineValue::YoungYin);
        assert_eq!(cast_line([3, 3, 3]).unwrap(), LineValue::OldYang);
        assert_eq!(cast_line([3, 4, 3]), Err(YijingError::InvalidToss(4)));
    }

    #[test]
    fn line_value_semantics() {
        assert_eq!(LineValue::OldYin.changed(), LineValue::YoungYang);
        assert_eq!(LineValue::OldYang.changed(), LineValue::YoungYin);
        assert_eq!(LineValue::YoungYin.changed(), LineValue::YoungYin);
        assert!(LineValue::OldYang.is_changing());
        assert!(!LineValue::YoungYang.is_changing());
        assert_eq!(LineValue::OldYang.polarity(), Polarity::Yang);
        assert_eq!(LineValue::from_value(5), Err(YijingError::InvalidLineValue(5)));
    }

    #[test]
    fn all_old_yang_turns_qian_into_kun() {
        let r = cast_from_lines([LineValue::OldYang; 6]);
        assert_eq!(r.original.number(), 1);
        assert_eq!(r.relating.number(), 2);
        assert_eq!(r.changing_positions, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn no_changing_lines_keeps_hexagram() {
        use LineValue::{YoungYang as Y, YoungYin as N};
        let r = cast_from_lines([Y, N, N, N, N, Y]);
        assert_eq!(r.original, r.relating);
        assert!(!r.has_changes());
        assert_eq!(r.original.number(), 27);
    }

    #[test]
    fn relating_matches_cast_transformation() {
        use LineValue::{OldYang, OldYin, YoungYang, YoungYin};
        let r = cast_from_lines([OldYin, YoungYang, OldYang, YoungYin, YoungYin, YoungYang]);
        assert_eq!(r.changing_positions, vec![0, 2]);
        assert_eq!(relating_hexagram(r.original, &r.changing_positions), Ok(r.relating));
    }

    #[test]
    fn relating_rejects_bad_position() {
        let h = lookup_hexagram([Polarity::Yin; 6]);
        assert_eq!(relating_hexagram(h, &[]), Ok(h));
        assert_eq!(
            relating_hexagram(h, &[1, 7]),
            Err(YijingError::InvalidLinePosition(7))
        );
    }

    #[test]
    fn seeded_cast_is_reproducible() {
        let a = cast_hexagram(&mut StdRng::seed_from_u64(7));
        let b = cast_hexagram(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn cast_replays_coin_tosses() {
        let mut tosses = StdRng::seed_from_u64(11);
        let expected: [LineValue; 6] = std::array::from_fn(|_| {
            cast_line([
                toss_coin(&mut tosses),
                toss_coin(&mut tosses),
                toss_coin(&mut tosses),
            ])
            .unwrap()
        });
        assert_eq!(cast_hexagram(&mut StdRng::seed_from_u64(11)).lines, expected);
    }

    #[test]
    fn constant_coins_give_old_lines() {
        let heads = cast_hexagram(&mut StepRng::new(0, 0));
        assert_eq!(heads.lines, [LineValue::OldYang; 6]);
        assert_eq!((heads.original.number(), heads.relating.number()), (1, 2));

        let tails = cast_hexagram(&mut StepRng::new(u64::MAX, 0));
        assert_eq!(tails.lines, [LineValue::OldYin; 6]);
        assert_eq!((tails.original.number(), tails.relating.number()), (2, 1));
    }

    #[test]
    fn every_line_value_occurs() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = [false; 4];
        for _ in 0..64 {
            for line in cast_hexagram(&mut rng).lines {
                seen[usize::from(line.value() - 6)] = true;
            }
        }
        assert_eq!(seen, [true; 4]);
    }
}
