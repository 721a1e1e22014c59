//! Plain-text board rendering.

use crate::board::Board;

/// Formats a board as three text rows.
///
/// Each mark is padded by a space, separated by `|`, and every row
/// (including the last) ends in a newline:
///
/// ```text
///  X | X | O
///  X | O | O
///  O |   |  
/// ```
pub fn render(board: &Board) -> String {
    board
        .marks()
        .chunks(3)
        .map(|row| format!(" {} | {} | {}\n", row[0], row[1], row[2]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Mark, Player};

    #[test]
    fn test_render_sample_grid() {
        let x = Mark::Occupied(Player::X);
        let o = Mark::Occupied(Player::O);
        let e = Mark::Empty;
        let board = Board::from_marks([x, x, o, x, o, o, o, e, e]);
        assert_eq!(render(&board), " X | X | O\n X | O | O\n O |   |  \n");
    }

    #[test]
    fn test_render_empty_board() {
        assert_eq!(render(&Board::empty()), "   |   |  \n".repeat(3));
    }
}
