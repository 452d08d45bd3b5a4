//! Game state machine for a single round.
//!
//! A [`Game`] is consumed by every move and handed back in its next state,
//! so there is no shared mutable game state. The human ([`Side::Player1`])
//! always moves first; turns alternate until a line is completed or the
//! board fills up.

use crate::board::Board;
use crate::error::GameError;
use crate::location::Location;
use crate::opponent::{Choice, Chooser, OpponentEngine};
use crate::rules::{has_win, is_draw};
use crate::types::Side;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Whose move it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    /// Waiting on the human collaborator.
    Human,
    /// Waiting on the opponent engine.
    Opponent,
}

impl Turn {
    /// The turn after this one.
    pub fn next(self) -> Self {
        match self {
            Turn::Human => Turn::Opponent,
            Turn::Opponent => Turn::Human,
        }
    }

    /// The side that moves on this turn.
    pub fn side(self) -> Side {
        match self {
            Turn::Human => Side::Player1,
            Turn::Opponent => Side::Player2,
        }
    }
}

/// How a finished round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// One side completed a line.
    Winner(Side),
    /// The board filled up with no completed line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Side> {
        match self {
            Outcome::Winner(side) => Some(*side),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the round was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(side) => write!(f, "{} wins!", side),
            Outcome::Draw => write!(f, "draw!"),
        }
    }
}

/// Lifecycle of a round. Moves from `InProgress` to `Ended` exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// Moves are still being accepted.
    InProgress,
    /// The round is over.
    Ended(Outcome),
}

impl GameState {
    /// Returns true once the round is over.
    pub fn is_ended(&self) -> bool {
        matches!(self, GameState::Ended(_))
    }

    /// The outcome, once the round is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            GameState::InProgress => None,
            GameState::Ended(outcome) => Some(*outcome),
        }
    }
}

/// A side placing its mark at a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Who moved.
    pub side: Side,
    /// Where they moved.
    pub location: Location,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.side, self.location)
    }
}

/// Win check first, then draw check.
///
/// A full board that also holds a completed line is a win.
#[instrument(skip(board))]
pub fn evaluate_end(board: &Board) -> GameState {
    if let Some(side) = has_win(board) {
        GameState::Ended(Outcome::Winner(side))
    } else if is_draw(board) {
        GameState::Ended(Outcome::Draw)
    } else {
        GameState::InProgress
    }
}

/// One round of play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    state: GameState,
    turn: Turn,
    history: Vec<Move>,
}

impl Game {
    /// A fresh round: empty board, human to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            state: GameState::InProgress,
            turn: Turn::Human,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the lifecycle state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Returns whose move it is. Frozen once the round ends.
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Locations a move may currently target.
    pub fn available_positions(&self) -> Vec<Location> {
        self.board.available_positions()
    }

    /// Whether a move at `location` would be accepted right now.
    pub fn accepts(&self, location: Location) -> bool {
        !self.state.is_ended() && self.board.is_available(location)
    }

    /// Plays `location` for whichever side is to move.
    ///
    /// Consumes the game and returns it in its next state. Fails with
    /// [`GameError::GameOver`] after the round has ended and
    /// [`GameError::IllegalMove`] for an occupied location.
    #[instrument(skip(self), fields(turn = ?self.turn))]
    pub fn play(self, location: Location) -> Result<Self, GameError> {
        if self.state.is_ended() {
            return Err(GameError::GameOver);
        }

        let mut game = self;
        let side = game.turn.side();
        game.board.mark_position(location, side)?;
        game.history.push(Move { side, location });
        debug!(%side, %location, "Move applied");

        game.state = evaluate_end(&game.board);
        match game.state {
            GameState::InProgress => {
                game.turn = game.turn.next();
            }
            GameState::Ended(outcome) => {
                info!(%outcome, moves = game.history.len(), "Round ended");
            }
        }

        debug_assert!(game.board.is_consistent(), "Board consistency violated");
        debug_assert_eq!(
            game.history.len() + game.board.available_positions().len(),
            9,
            "History out of step with board"
        );
        Ok(game)
    }

    /// Asks `engine` for a move and plays it.
    ///
    /// Fails with [`GameError::WrongTurn`] if the human is to move.
    #[instrument(skip(self, engine))]
    pub fn play_opponent<C: Chooser>(
        self,
        engine: &mut OpponentEngine<C>,
    ) -> Result<(Self, Choice), GameError> {
        if self.state.is_ended() {
            return Err(GameError::GameOver);
        }
        if self.turn != Turn::Opponent {
            return Err(GameError::WrongTurn(Side::Player2));
        }
        let choice = engine.choose_move(&self.board)?;
        let game = self.play(choice.location)?;
        Ok((game, choice))
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
