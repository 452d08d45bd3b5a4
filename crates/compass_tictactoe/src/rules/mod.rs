//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board): the fixed catalog of
//! winning lines, win detection, and draw detection. The state machine and
//! the opponent both consult these rather than re-deriving them.

pub mod draw;
pub mod lines;
pub mod win;

pub use draw::{is_draw, is_full};
pub use lines::{WIN_LINES, WinLine};
pub use win::has_win;
