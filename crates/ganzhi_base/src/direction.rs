//! Eight compass directions and their Feng Shui elements.
//!
//! Each direction owns a 45° sector centred on its bearing; North spans
//! [337.5°, 22.5°).

use serde::Serialize;

use crate::element::Element;

/// The eight principal compass directions, clockwise from North.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CompassDirection {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

pub const ALL_DIRECTIONS: [CompassDirection; 8] = [
    CompassDirection::North,
    CompassDirection::NorthEast,
    CompassDirection::East,
    CompassDirection::SouthEast,
    CompassDirection::South,
    CompassDirection::SouthWest,
    CompassDirection::West,
    CompassDirection::NorthWest,
];

const SECTOR_DEG: f64 = 45.0;

impl CompassDirection {
    /// Direction whose sector contains `bearing_deg` (any real value,
    /// wrapped into [0, 360)). `None` for non-finite input.
    pub fn from_bearing(bearing_deg: f64) -> Option<Self> {
        if !bearing_deg.is_finite() {
            return None;
        }
        let shifted = (bearing_deg + SECTOR_DEG / 2.0).rem_euclid(360.0);
        let sector = (shifted / SECTOR_DEG).floor() as usize % 8;
        Some(ALL_DIRECTIONS[sector])
    }

    pub const fn abbrev(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::NorthEast => "NE",
            Self::East => "E",
            Self::SouthEast => "SE",
            Self::South => "S",
            Self::SouthWest => "SW",
            Self::West => "W",
            Self::NorthWest => "NW",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::NorthEast => "Northeast",
            Self::East => "East",
            Self::SouthEast => "Southeast",
            Self::South => "South",
            Self::SouthWest => "Southwest",
            Self::West => "West",
            Self::NorthWest => "Northwest",
        }
    }

    /// Centre bearing of the sector in degrees.
    pub const fn bearing(self) -> f64 {
        match self {
            Self::North => 0.0,
            Self::NorthEast => 45.0,
            Self::East => 90.0,
            Self::SouthEast => 135.0,
            Self::South => 180.0,
            Self::SouthWest => 225.0,
            Self::West => 270.0,
            Self::NorthWest => 315.0,
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::North => Element::Water,
            Self::NorthEast | Self::SouthWest => Element::Earth,
            Self::East | Self::SouthEast => Element::Wood,
            Self::South => Element::Fire,
            Self::West | Self::NorthWest => Element::Metal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sector_edges() {
        assert_eq!(CompassDirection::from_bearing(0.0), Some(CompassDirection::North));
        assert_eq!(CompassDirection::from_bearing(337.5), Some(CompassDirection::North));
        assert_eq!(CompassDirection::from_bearing(22.4), Some(CompassDirection::North));
        assert_eq!(CompassDirection::from_bearing(22.5), Some(CompassDirection::NorthEast));
        assert_eq!(CompassDirection::from_bearing(337.4), Some(CompassDirection::NorthWest));
    }

    #[test]
    fn wraps_out_of_range_bearings() {
        assert_eq!(CompassDirection::from_bearing(-90.0), Some(CompassDirection::West));
        assert_eq!(CompassDirection::from_bearing(720.0 + 180.0), Some(CompassDirection::South));
        assert_eq!(CompassDirection::from_bearing(f64::NAN), None);
    }

    #[test]
    fn centres_map_to_themselves() {
        for d in ALL_DIRECTIONS {
            assert_eq!(CompassDirection::from_bearing(d.bearing()), Some(d));
        }
    }

    #[test]
    fn elements() {
        assert_eq!(CompassDirection::North.element(), Element::Water);
        assert_eq!(CompassDirection::South.element(), Element::Fire);
        assert_eq!(CompassDirection::SouthWest.element(), Element::Earth);
        assert_eq!(CompassDirection::NorthWest.element(), Element::Metal);
    }
}
