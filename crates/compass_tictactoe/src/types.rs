//! Core domain types: sides, marks, and board positions.

use crate::location::Location;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The human player (moves first, glyph `x`).
    Player1,
    /// The automated opponent (glyph `o`).
    Player2,
}

impl Side {
    /// Both sides in the order the win check visits them.
    pub const BOTH: [Side; 2] = [Side::Player1, Side::Player2];

    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Player1 => Side::Player2,
            Side::Player2 => Side::Player1,
        }
    }

    /// The mark this side leaves on the board.
    pub fn mark(self) -> Mark {
        match self {
            Side::Player1 => Mark::Player1,
            Side::Player2 => Mark::Player2,
        }
    }

    /// Display glyph for this side.
    pub fn glyph(self) -> char {
        self.mark().glyph()
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Occupancy of a single position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    /// Nobody has claimed the position.
    #[default]
    Empty,
    /// Claimed by the human.
    Player1,
    /// Claimed by the opponent.
    Player2,
}

impl Mark {
    /// Display glyph: space, `x`, or `o`.
    pub fn glyph(self) -> char {
        match self {
            Mark::Empty => ' ',
            Mark::Player1 => 'x',
            Mark::Player2 => 'o',
        }
    }

    /// The side holding this mark, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            Mark::Empty => None,
            Mark::Player1 => Some(Side::Player1),
            Mark::Player2 => Some(Side::Player2),
        }
    }

    /// Returns true for [`Mark::Empty`].
    pub fn is_empty(self) -> bool {
        matches!(self, Mark::Empty)
    }
}

/// A single cell: a fixed location and its current mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct Position {
    /// Where the cell sits. Never changes.
    #[getter(copy)]
    location: Location,
    /// Who holds the cell.
    #[getter(copy)]
    mark: Mark,
}

impl Position {
    /// Creates an empty position at `location`.
    pub fn new(location: Location) -> Self {
        Self {
            location,
            mark: Mark::Empty,
        }
    }

    /// Sets the mark. Only the board calls this, after checking occupancy.
    pub(crate) fn set_mark(&mut self, mark: Mark) {
        self.mark = mark;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::Player1.opponent(), Side::Player2);
        assert_eq!(Side::Player2.opponent(), Side::Player1);
    }

    #[test]
    fn test_mark_side_mapping() {
        for side in Side::BOTH {
            assert_eq!(side.mark().side(), Some(side));
        }
        assert_eq!(Mark::Empty.side(), None);
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(Mark::Empty.glyph(), ' ');
        assert_eq!(Side::Player1.to_string(), "x");
        assert_eq!(Side::Player2.to_string(), "o");
    }

    #[test]
    fn test_new_position_is_empty() {
        let position = Position::new(Location::Ne);
        assert_eq!(position.location(), Location::Ne);
        assert!(position.mark().is_empty());
    }
}
