//! The automated opponent and its fixed move-selection policy.
//!
//! The opponent always plays [`Side::Player2`]. Each call picks exactly one
//! location by trying, in order:
//!
//! 1. an opening reaction to the human's first move,
//! 2. completing one of its own lines,
//! 3. blocking one of the human's lines,
//! 4. a random available location.
//!
//! There is no look-ahead. Random picks go through a [`Chooser`] so tests
//! can pin them down.

use crate::board::Board;
use crate::error::GameError;
use crate::location::{Category, Location};
use crate::rules::WIN_LINES;
use crate::types::Side;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Source of the opponent's random picks.
pub trait Chooser {
    /// Picks one of `options`, or `None` if there are none.
    fn choose(&mut self, options: &[Location]) -> Option<Location>;
}

/// Uniform random picks from any [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct RngChooser<R> {
    rng: R,
}

impl<R: rand::Rng> RngChooser<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngChooser<StdRng> {
    /// Reproducible picks from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Picks seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: rand::Rng> Chooser for RngChooser<R> {
    fn choose(&mut self, options: &[Location]) -> Option<Location> {
        options.choose(&mut self.rng).copied()
    }
}

/// Always takes the first option. Deterministic stand-in for tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstAvailable;

impl Chooser for FirstAvailable {
    fn choose(&mut self, options: &[Location]) -> Option<Location> {
        options.first().copied()
    }
}

/// Which branch of the policy produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Decision {
    /// Reaction to the human's opening move.
    #[display("opening")]
    Opening,
    /// Completing the opponent's own line.
    #[display("win")]
    Win,
    /// Occupying the cell that would complete the human's line.
    #[display("block")]
    Block,
    /// Nothing forced; picked at random.
    #[display("random")]
    Random,
}

/// A chosen move and the reason for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Choice {
    /// Where the opponent plays.
    pub location: Location,
    /// Which branch chose it.
    pub decision: Decision,
}

impl Choice {
    fn new(location: Location, decision: Decision) -> Self {
        Self { location, decision }
    }
}

/// The heuristic opponent.
#[derive(Debug, Clone)]
pub struct OpponentEngine<C = RngChooser<StdRng>> {
    chooser: C,
}

impl OpponentEngine {
    /// An opponent with entropy-seeded random picks.
    pub fn random() -> Self {
        Self::new(RngChooser::from_entropy())
    }

    /// An opponent whose random picks repeat for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(RngChooser::seeded(seed))
    }
}

impl<C: Chooser> OpponentEngine<C> {
    /// The side the opponent plays.
    pub const SIDE: Side = Side::Player2;

    /// Creates an opponent drawing random picks from `chooser`.
    pub fn new(chooser: C) -> Self {
        Self { chooser }
    }

    /// Selects a move without touching the board.
    #[instrument(skip(self, board))]
    pub fn choose_move(&mut self, board: &Board) -> Result<Choice, GameError> {
        let available = board.available_positions();
        if available.is_empty() {
            return Err(GameError::NoAvailableMoves);
        }

        let choice = if let Some(location) = self.opening_reaction(board)? {
            Choice::new(location, Decision::Opening)
        } else if let Some(location) = completing_cell(board, Self::SIDE) {
            Choice::new(location, Decision::Win)
        } else if let Some(location) = completing_cell(board, Self::SIDE.opponent()) {
            Choice::new(location, Decision::Block)
        } else {
            let location = self
                .chooser
                .choose(&available)
                .ok_or(GameError::NoAvailableMoves)?;
            Choice::new(location, Decision::Random)
        };

        debug!(location = %choice.location, decision = %choice.decision, "Opponent chose move");
        Ok(choice)
    }

    /// Selects a move and claims it on `board`.
    #[instrument(skip(self, board))]
    pub fn play(&mut self, board: &mut Board) -> Result<Choice, GameError> {
        let choice = self.choose_move(board)?;
        board.mark_position(choice.location, Self::SIDE)?;
        Ok(choice)
    }

    /// The special-cased first response, if this is the opponent's first move.
    ///
    /// Applies only while the opponent has no marks and the human has at
    /// most one. With no human mark at all the opponent takes the center.
    fn opening_reaction(&mut self, board: &Board) -> Result<Option<Location>, GameError> {
        if !board.marks_of(Self::SIDE).is_empty() {
            return Ok(None);
        }
        match board.marks_of(Self::SIDE.opponent()).as_slice() {
            [] => Ok(Some(Location::C)),
            [opening] => match opening.category() {
                Category::Corner | Category::Edge => Ok(Some(Location::C)),
                Category::Center => self
                    .chooser
                    .choose(&Location::CORNERS)
                    .map(Some)
                    .ok_or(GameError::NoAvailableMoves),
            },
            _ => Ok(None),
        }
    }
}

/// First line in catalog order that `side` can complete with one move.
fn completing_cell(board: &Board, side: Side) -> Option<Location> {
    WIN_LINES
        .iter()
        .find_map(|line| line.completing_cell(board, side))
}
