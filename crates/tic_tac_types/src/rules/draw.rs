//! Draw detection logic for tic-tac-toe.

use super::win::has_winner;
use crate::board::Board;

/// Checks if the board is full (all cells occupied).
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board with no winning line.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && !has_winner(board)
}
