//! Tic-tac-toe on a compass-named 3x3 board against a heuristic opponent.
//!
//! # Architecture
//!
//! - **Board**: nine [`Position`]s addressed by [`Location`] (`nw` .. `se`)
//! - **Rules**: the fixed [`WIN_LINES`] catalog plus win and draw checks
//! - **Opponent**: [`OpponentEngine`], a fixed-priority heuristic (opening
//!   reaction, win, block, random) with injectable randomness
//! - **Game**: [`Game`], an immutable-transition state machine for one round
//! - **Session**: [`Session`], the replay loop driving a [`Console`]
//!
//! # Example
//!
//! ```
//! use compass_tictactoe::{FirstAvailable, Game, Location, OpponentEngine};
//!
//! # fn example() -> Result<(), compass_tictactoe::GameError> {
//! let mut engine = OpponentEngine::new(FirstAvailable);
//! let game = Game::new().play(Location::Nw)?;
//! let (game, choice) = game.play_opponent(&mut engine)?;
//! assert_eq!(choice.location, Location::C);
//! assert_eq!(game.available_positions().len(), 7);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod game;
mod location;
mod opponent;
mod session;
mod types;

pub mod rules;

pub use board::{Board, Rows};
pub use error::GameError;
pub use game::{Game, GameState, Move, Outcome, Turn, evaluate_end};
pub use location::{Category, Location};
pub use opponent::{Choice, Chooser, Decision, FirstAvailable, OpponentEngine, RngChooser};
pub use rules::{WIN_LINES, WinLine, has_win, is_draw};
pub use session::{Console, Session, Tally};
pub use types::{Mark, Position, Side};
