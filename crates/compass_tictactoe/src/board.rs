//! The 3x3 board and its mark-based queries.

use crate::error::GameError;
use crate::location::Location;
use crate::types::{Mark, Position, Side};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Three display rows of three glyphs each, top to bottom.
pub type Rows = [[char; 3]; 3];

/// 3x3 board of compass-named positions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// One position per location, in cardinal order.
    positions: [Position; 9],
}

impl Board {
    /// Creates a blank board with every position empty.
    pub fn new() -> Self {
        Self {
            positions: Location::ALL.map(Position::new),
        }
    }

    /// Builds a board with the given locations already claimed.
    ///
    /// Does not check turn order, so it can describe positions that
    /// never arise in a real game.
    #[instrument]
    pub fn from_marks(player1: &[Location], player2: &[Location]) -> Result<Self, GameError> {
        let mut board = Self::new();
        for &location in player1 {
            board.mark_position(location, Side::Player1)?;
        }
        for &location in player2 {
            board.mark_position(location, Side::Player2)?;
        }
        Ok(board)
    }

    /// Returns the position at `location`.
    ///
    /// Every [`Location`] is on the board, so this cannot fail; raw strings
    /// go through [`Location::parse`] first.
    pub fn position_at(&self, location: Location) -> Position {
        self.positions[location.index()]
    }

    /// All positions in cardinal order.
    pub fn positions(&self) -> &[Position; 9] {
        &self.positions
    }

    /// Claims `location` for `side`.
    ///
    /// Fails with [`GameError::IllegalMove`] if the position is already
    /// marked; the existing mark is left untouched.
    #[instrument(skip(self))]
    pub fn mark_position(&mut self, location: Location, side: Side) -> Result<(), GameError> {
        let position = &mut self.positions[location.index()];
        if !position.mark().is_empty() {
            warn!(%location, held_by = ?position.mark(), "Refusing to overwrite mark");
            return Err(GameError::IllegalMove(location));
        }
        position.set_mark(side.mark());
        Ok(())
    }

    /// Locations currently holding `mark`, in cardinal order.
    pub fn positions_marked(&self, mark: Mark) -> Vec<Location> {
        self.positions
            .iter()
            .filter(|p| p.mark() == mark)
            .map(|p| p.location())
            .collect()
    }

    /// Locations nobody has claimed yet.
    pub fn available_positions(&self) -> Vec<Location> {
        self.positions_marked(Mark::Empty)
    }

    /// Locations claimed by `side`.
    pub fn marks_of(&self, side: Side) -> Vec<Location> {
        self.positions_marked(side.mark())
    }

    /// Validation predicate for incoming moves.
    pub fn is_available(&self, location: Location) -> bool {
        self.position_at(location).mark().is_empty()
    }

    /// Number of positions holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.positions.iter().filter(|p| p.mark() == mark).count()
    }

    /// True when no position is empty.
    pub fn is_full(&self) -> bool {
        self.positions.iter().all(|p| !p.mark().is_empty())
    }

    /// True when player 1 is level with player 2 or exactly one mark ahead.
    pub fn is_consistent(&self) -> bool {
        let player1 = self.count(Mark::Player1);
        let player2 = self.count(Mark::Player2);
        let valid = player1 == player2 || player1 == player2 + 1;
        if !valid {
            warn!(player1, player2, "Mark counts out of balance");
        }
        valid
    }

    /// Top, middle, and bottom rows of positions.
    pub fn rows(&self) -> [[Position; 3]; 3] {
        let p = &self.positions;
        [[p[0], p[1], p[2]], [p[3], p[4], p[5]], [p[6], p[7], p[8]]]
    }

    /// Glyph rows for the display collaborator.
    pub fn render(&self) -> Rows {
        self.rows().map(|row| row.map(|p| p.mark().glyph()))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Draws the board as three `|x|o| |` lines.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.render().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "|")?;
            for glyph in row {
                write!(f, "{}|", glyph)?;
            }
        }
        Ok(())
    }
}
