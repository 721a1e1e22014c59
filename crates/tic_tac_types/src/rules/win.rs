//! Win detection logic for tic-tac-toe.

use crate::board::Board;
use crate::types::{Column, Mark, Player, Position, Row};
use tracing::instrument;

/// The eight winning triples: three rows, three columns, two diagonals.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [
        Position::new(Row::Top, Column::Left),
        Position::new(Row::Top, Column::Middle),
        Position::new(Row::Top, Column::Right),
    ],
    [
        Position::new(Row::Middle, Column::Left),
        Position::new(Row::Middle, Column::Middle),
        Position::new(Row::Middle, Column::Right),
    ],
    [
        Position::new(Row::Bottom, Column::Left),
        Position::new(Row::Bottom, Column::Middle),
        Position::new(Row::Bottom, Column::Right),
    ],
    // Columns
    [
        Position::new(Row::Top, Column::Left),
        Position::new(Row::Middle, Column::Left),
        Position::new(Row::Bottom, Column::Left),
    ],
    [
        Position::new(Row::Top, Column::Middle),
        Position::new(Row::Middle, Column::Middle),
        Position::new(Row::Bottom, Column::Middle),
    ],
    [
        Position::new(Row::Top, Column::Right),
        Position::new(Row::Middle, Column::Right),
        Position::new(Row::Bottom, Column::Right),
    ],
    // Diagonals
    [
        Position::new(Row::Top, Column::Left),
        Position::new(Row::Middle, Column::Middle),
        Position::new(Row::Bottom, Column::Right),
    ],
    [
        Position::new(Row::Top, Column::Right),
        Position::new(Row::Middle, Column::Middle),
        Position::new(Row::Bottom, Column::Left),
    ],
];

/// Returns the player holding a full winning line, if any.
///
/// A legally reached board has at most one winner. On a hand-built board
/// with two, the first line in table order decides.
#[instrument(level = "trace", skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    WINNING_LINES.iter().find_map(|&[a, b, c]| match board.mark(a) {
        Mark::Occupied(player) if board.mark(b) == board.mark(a) && board.mark(c) == board.mark(a) => {
            Some(player)
        }
        _ => None,
    })
}

/// Checks whether any winning line is held by a single player.
pub fn has_winner(board: &Board) -> bool {
    winner(board).is_some()
}
