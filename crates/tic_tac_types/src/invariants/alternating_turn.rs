//! Alternating turn invariant: players take turns from whoever started.

use super::Invariant;
use crate::game::Game;

/// Invariant: mark counts differ by at most one, and the player to move
/// is never the one ahead.
///
/// Either player may start, so equal counts allow either player to move.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        match game.to_move() {
            Some(mover) => {
                let own = board.occupied_by(mover).count();
                let other = board.occupied_by(mover.opponent()).count();
                own == other || own + 1 == other
            }
            None => {
                let xs = board.occupied_by(crate::Player::X).count();
                let os = board.occupied_by(crate::Player::O).count();
                xs.abs_diff(os) <= 1
            }
        }
    }

    fn description() -> &'static str {
        "Players alternate turns"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::moves::legal_moves_for;
    use crate::types::{Mark, Player};

    #[test]
    fn test_single_move_holds() {
        let game = Game::new(Player::X)
            .legal_moves()
            .play(crate::Position::ALL[4])
            .expect("open");
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.to_move(), Some(Player::O));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let x = Mark::Occupied(Player::X);
        let e = Mark::Empty;
        // X has played twice and is offered a third move.
        let board = Board::from_marks([x, e, e, e, x, e, e, e, e]);
        let game = Game {
            board,
            legal_moves: legal_moves_for(&board, Player::X),
        };
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
