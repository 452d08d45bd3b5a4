//! The static catalog of winning lines.

use crate::board::Board;
use crate::location::Location;
use crate::types::{Mark, Side};

/// Three locations that win the game when one side holds all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinLine {
    /// Human-readable name, e.g. "top row".
    pub name: &'static str,
    /// The three cells of the line.
    pub cells: [Location; 3],
}

use Location::*;

/// All 8 winning lines. Iteration order is significant: the win check and
/// the opponent's win/block search both take the first match.
pub const WIN_LINES: [WinLine; 8] = [
    WinLine { name: "top row", cells: [Nw, N, Ne] },
    WinLine { name: "middle row", cells: [W, C, E] },
    WinLine { name: "bottom row", cells: [Sw, S, Se] },
    WinLine { name: "left column", cells: [Nw, W, Sw] },
    WinLine { name: "right column", cells: [Ne, E, Se] },
    WinLine { name: "middle column", cells: [N, C, S] },
    WinLine { name: "diagonal", cells: [Nw, C, Se] },
    WinLine { name: "anti-diagonal", cells: [Sw, C, Ne] },
];

impl WinLine {
    /// True when `side` holds every cell of the line.
    pub fn is_held_by(&self, board: &Board, side: Side) -> bool {
        self.cells
            .iter()
            .all(|&cell| board.position_at(cell).mark() == side.mark())
    }

    /// The open cell that would complete the line for `side`.
    ///
    /// Returns a location only when `side` holds exactly two cells and the
    /// third is empty.
    pub fn completing_cell(&self, board: &Board, side: Side) -> Option<Location> {
        let held = self
            .cells
            .iter()
            .filter(|&&cell| board.position_at(cell).mark() == side.mark())
            .count();
        if held != 2 {
            return None;
        }
        self.cells
            .iter()
            .copied()
            .find(|&cell| board.position_at(cell).mark() == Mark::Empty)
    }
}
