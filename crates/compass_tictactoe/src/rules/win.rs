//! Win detection logic for tic-tac-toe.

use super::lines::WIN_LINES;
use crate::board::Board;
use crate::types::Side;
use tracing::{debug, instrument};

/// Checks if either side holds a complete line.
///
/// Lines are scanned in catalog order and, within a line, player 1 before
/// player 2; the first complete line decides. A single move can complete
/// lines for only one side, so a board with winners on both sides never
/// arises in play.
#[instrument(skip(board))]
pub fn has_win(board: &Board) -> Option<Side> {
    for line in &WIN_LINES {
        for side in Side::BOTH {
            if line.is_held_by(board, side) {
                debug!(line = line.name, %side, "Line completed");
                return Some(side);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Location::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(has_win(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = Board::from_marks(&[Nw, N, Ne], &[C, S]).unwrap();
        assert_eq!(has_win(&board), Some(Side::Player1));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = Board::from_marks(&[Nw, N, E], &[Sw, C, Ne]).unwrap();
        assert_eq!(has_win(&board), Some(Side::Player2));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = Board::from_marks(&[Nw, N], &[C]).unwrap();
        assert_eq!(has_win(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = Board::from_marks(&[Nw, Ne], &[N]).unwrap();
        assert_eq!(has_win(&board), None);
    }

    #[test]
    fn test_first_line_in_catalog_order_decides() {
        // Both the top row (player 1) and bottom row (player 2) are complete.
        let board = Board::from_marks(&[Nw, N, Ne], &[Sw, S, Se]).unwrap();
        assert_eq!(has_win(&board), Some(Side::Player1));
    }
}
