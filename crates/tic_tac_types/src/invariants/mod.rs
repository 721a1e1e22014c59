//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that hold for every [`Game`] the
//! crate can construct. They are checked in debug builds whenever a game
//! is built and can be tested independently.

use crate::game::Game;
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of two to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod alternating_turn;
pub mod consistent_moves;
pub mod single_cell_successor;
pub mod well_formed_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use consistent_moves::ConsistentMovesInvariant;
pub use single_cell_successor::SingleCellSuccessorInvariant;
pub use well_formed_board::WellFormedBoardInvariant;

/// All game invariants as a composable set.
pub type GameInvariants = (
    WellFormedBoardInvariant,
    ConsistentMovesInvariant,
    SingleCellSuccessorInvariant,
    AlternatingTurnInvariant,
);

/// Panics in debug builds if any game invariant is violated.
pub fn assert_invariants(game: &Game) {
    if cfg!(debug_assertions)
        && let Err(violations) = GameInvariants::check_all(game)
    {
        for violation in &violations {
            warn!(description = %violation.description, "Game invariant violated");
        }
        panic!("Game invariants violated: {:?}", violations);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::moves::legal_moves_for;
    use crate::types::{Mark, Player, Position};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        for starting in [Player::X, Player::O] {
            assert!(GameInvariants::check_all(&Game::new(starting)).is_ok());
        }
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let game = Game::new(Player::O);
        let game = game.legal_moves().play(Position::ALL[4]).expect("open");
        let game = game.legal_moves().play(Position::ALL[0]).expect("open");
        let game = game.legal_moves().play(Position::ALL[8]).expect("open");
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        // Moves computed for a board other than the one shown.
        let shown = Board::empty();
        let mut marks = [Mark::Empty; 9];
        marks[4] = Mark::Occupied(Player::X);
        let other = Board::from_marks(marks);
        let game = Game {
            board: shown,
            legal_moves: legal_moves_for(&other, Player::O),
        };

        let violations = GameInvariants::check_all(&game).unwrap_err();
        assert!(violations.len() >= 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (ConsistentMovesInvariant, AlternatingTurnInvariant);
        assert!(TwoInvariants::check_all(&Game::new(Player::X)).is_ok());
    }
}
