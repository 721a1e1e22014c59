//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board. Rules are kept apart from board storage
//! so the move generator and the invariant checks can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WINNING_LINES, has_winner, winner};
