//! Consistent moves invariant: the move set mirrors the board.

use super::Invariant;
use crate::game::Game;
use crate::rules::has_winner;

/// Invariant: legal-move keys are exactly the empty cells.
///
/// Once a line is won the move set is empty, whatever cells remain open.
pub struct ConsistentMovesInvariant;

impl Invariant<Game> for ConsistentMovesInvariant {
    fn holds(game: &Game) -> bool {
        let moves = game.legal_moves();
        if has_winner(game.board()) {
            return moves.is_empty();
        }
        moves.positions().eq(game.board().empty_positions())
    }

    fn description() -> &'static str {
        "Legal moves are the empty cells of an unwon board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::moves::legal_moves_for;
    use crate::types::{Mark, Player};

    #[test]
    fn test_moves_on_won_board_violate() {
        let x = Mark::Occupied(Player::X);
        let e = Mark::Empty;
        let won = Board::from_marks([x, x, x, e, e, e, e, e, e]);
        let game = Game {
            board: won,
            legal_moves: legal_moves_for(&Board::empty(), Player::O),
        };
        assert!(!ConsistentMovesInvariant::holds(&game));
    }
}
