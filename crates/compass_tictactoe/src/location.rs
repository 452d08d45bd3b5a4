//! Compass-named cell identifiers for the 3x3 board.

use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A cell on the board, named by compass direction from the center.
///
/// ```text
/// nw | n | ne
/// w  | c | e
/// sw | s | se
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Location {
    /// Top-left corner.
    Nw,
    /// Top edge.
    N,
    /// Top-right corner.
    Ne,
    /// Left edge.
    W,
    /// Center.
    C,
    /// Right edge.
    E,
    /// Bottom-left corner.
    Sw,
    /// Bottom edge.
    S,
    /// Bottom-right corner.
    Se,
}

/// Geometric role of a cell, used by the opponent's opening reaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// `nw`, `ne`, `sw`, `se`.
    Corner,
    /// `n`, `e`, `s`, `w`.
    Edge,
    /// `c`.
    Center,
}

impl Location {
    /// All 9 locations in cardinal (row-major) order.
    pub const ALL: [Location; 9] = [
        Location::Nw,
        Location::N,
        Location::Ne,
        Location::W,
        Location::C,
        Location::E,
        Location::Sw,
        Location::S,
        Location::Se,
    ];

    /// The four corners, in the order the opponent samples them.
    pub const CORNERS: [Location; 4] = [Location::Nw, Location::Sw, Location::Ne, Location::Se];

    /// Converts the location to its row-major board index (0-8).
    pub fn index(self) -> usize {
        match self {
            Location::Nw => 0,
            Location::N => 1,
            Location::Ne => 2,
            Location::W => 3,
            Location::C => 4,
            Location::E => 5,
            Location::Sw => 6,
            Location::S => 7,
            Location::Se => 8,
        }
    }

    /// Creates a location from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns whether this cell is a corner, an edge, or the center.
    pub fn category(self) -> Category {
        match self {
            Location::Nw | Location::Ne | Location::Sw | Location::Se => Category::Corner,
            Location::N | Location::E | Location::S | Location::W => Category::Edge,
            Location::C => Category::Center,
        }
    }

    /// Parses a compass identifier such as `"nw"` or `"c"`.
    ///
    /// Surrounding whitespace is ignored; anything other than the 9
    /// lowercase identifiers is rejected with [`GameError::InvalidLocation`].
    #[instrument]
    pub fn parse(input: &str) -> Result<Self, GameError> {
        Self::from_str(input.trim()).map_err(|_| GameError::InvalidLocation(input.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, loc) in Location::ALL.iter().enumerate() {
            assert_eq!(loc.index(), i);
            assert_eq!(Location::from_index(i), Some(*loc));
        }
        assert_eq!(Location::from_index(9), None);
    }

    #[test]
    fn test_iter_matches_cardinal_order() {
        let iterated: Vec<_> = <Location as strum::IntoEnumIterator>::iter().collect();
        assert_eq!(iterated, Location::ALL.to_vec());
    }

    #[test]
    fn test_parse_identifiers() {
        assert_eq!(Location::parse("nw"), Ok(Location::Nw));
        assert_eq!(Location::parse(" c\n"), Ok(Location::C));
        assert_eq!(Location::parse("se"), Ok(Location::Se));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(
            Location::parse("north"),
            Err(GameError::InvalidLocation("north".to_string()))
        );
        assert!(Location::parse("").is_err());
        assert!(Location::parse("NW").is_err());
    }

    #[test]
    fn test_display_is_compass_name() {
        assert_eq!(Location::Sw.to_string(), "sw");
        let name: &str = Location::C.as_ref();
        assert_eq!(name, "c");
    }

    #[test]
    fn test_serializes_as_compass_name() {
        assert_eq!(serde_json::to_string(&Location::Ne).unwrap(), "\"ne\"");
        let parsed: Vec<Location> = serde_json::from_str(r#"["c", "sw"]"#).unwrap();
        assert_eq!(parsed, vec![Location::C, Location::Sw]);
    }

    #[test]
    fn test_categories() {
        for corner in Location::CORNERS {
            assert_eq!(corner.category(), Category::Corner);
        }
        for edge in [Location::N, Location::E, Location::S, Location::W] {
            assert_eq!(edge.category(), Category::Edge);
        }
        assert_eq!(Location::C.category(), Category::Center);
    }
}
