//! Well-formed board invariant: nine cells, one per position.

use super::Invariant;
use crate::game::Game;

/// Invariant: the board holds each position exactly once, in canonical order.
pub struct WellFormedBoardInvariant;

impl Invariant<Game> for WellFormedBoardInvariant {
    fn holds(game: &Game) -> bool {
        game.board().is_well_formed()
    }

    fn description() -> &'static str {
        "Board has exactly one cell per position"
    }
}
