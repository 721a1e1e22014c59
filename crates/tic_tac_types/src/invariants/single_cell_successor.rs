//! Single-cell successor invariant: each move changes exactly its own cell.

use super::Invariant;
use crate::game::Game;
use crate::types::{Mark, Position};

/// Invariant: every legal move's board equals the game's board except at
/// the move's key, which holds the mover's mark. All moves share a mover.
pub struct SingleCellSuccessorInvariant;

impl Invariant<Game> for SingleCellSuccessorInvariant {
    fn holds(game: &Game) -> bool {
        let moves = game.legal_moves();
        let Some(mover) = game.to_move() else {
            return true;
        };

        moves.positions().zip(moves.iter()).all(|(key, mv)| {
            mv.position() == key
                && mv.mover() == mover
                && Position::ALL.iter().all(|&pos| {
                    let expected = if pos == key {
                        Mark::Occupied(mover)
                    } else {
                        game.board().mark(pos)
                    };
                    mv.board().mark(pos) == expected
                })
        })
    }

    fn description() -> &'static str {
        "Each legal move fills only its own cell with the mover's mark"
    }
}
