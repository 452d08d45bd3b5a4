//! Error types for board and game operations.

use crate::location::Location;
use crate::types::Side;

/// Contract violations raised by the board, the opponent, or the game state machine.
///
/// None of these are user-facing: bad terminal input is re-prompted by the
/// shell before it ever reaches the core.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The identifier is not one of the 9 compass locations.
    #[display("Invalid location: {:?}", _0)]
    InvalidLocation(#[error(not(source))] String),

    /// The position is already marked.
    #[display("Illegal move: {} is already occupied", _0)]
    IllegalMove(#[error(not(source))] Location),

    /// A move was requested from a board with no empty positions.
    #[display("No available moves")]
    NoAvailableMoves,

    /// The side asked to move is not the side whose turn it is.
    #[display("It's not {}'s turn", _0)]
    WrongTurn(#[error(not(source))] Side),

    /// A move was attempted after the game ended.
    #[display("Game is already over")]
    GameOver,
}
