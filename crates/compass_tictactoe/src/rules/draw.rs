//! Draw detection logic for tic-tac-toe.

use super::win::has_win;
use crate::board::Board;
use tracing::instrument;

/// Checks if the board is full (all positions marked).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.available_positions().is_empty()
}

/// A full board with no completed line.
///
/// A full board that also holds a winning line is a win, not a draw.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && has_win(board).is_none()
}
