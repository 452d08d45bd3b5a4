//! Compass Games - terminal shell for compass-board tic-tac-toe.
//!
//! Wires the pure game logic in `compass_tictactoe` to a terminal:
//! command-line flags and a TOML config file, a line-oriented console that
//! reads compass-named moves and draws the board, and the opponent's
//! cosmetic thinking pause.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod delay;
mod terminal;

pub use cli::Cli;
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, GameConfig};
pub use delay::ThinkDelay;
pub use terminal::{TerminalConsole, format_rows};
