//! The immutable game aggregate.
//!
//! A [`Game`] is a snapshot: a board plus the moves that may follow it.
//! Games are never mutated. The only way forward is to invoke one of the
//! [`LegalMove`](crate::LegalMove) producers already present in
//! [`Game::legal_moves`], so skipping a turn, overwriting a cell or
//! playing on after a win cannot be expressed.

use crate::board::Board;
use crate::invariants::assert_invariants;
use crate::moves::{LegalMoves, legal_moves_for};
use crate::outcome::Outcome;
use crate::types::Player;
use tracing::{debug, instrument};

/// A game snapshot with its legal continuations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) legal_moves: LegalMoves,
}

impl Game {
    /// Starts a game on an empty board with `starting` to move.
    #[instrument]
    pub fn new(starting: Player) -> Self {
        let board = Board::empty();
        let game = Self {
            legal_moves: legal_moves_for(&board, starting),
            board,
        };
        assert_invariants(&game);
        game
    }

    /// Builds the game that follows `mover` producing `board`.
    pub(crate) fn after(board: Board, mover: Player) -> Self {
        let game = Self {
            legal_moves: legal_moves_for(&board, mover.opponent()),
            board,
        };
        if game.legal_moves.is_empty() {
            debug!(outcome = ?game.outcome(), "Game finished");
        }
        assert_invariants(&game);
        game
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the legal moves. Empty once the game is over.
    pub fn legal_moves(&self) -> &LegalMoves {
        &self.legal_moves
    }

    /// The player whose moves are on offer, or `None` once the game is over.
    pub fn to_move(&self) -> Option<Player> {
        self.legal_moves.iter().next().map(|mv| mv.mover())
    }

    /// True once no legal moves remain.
    pub fn is_over(&self) -> bool {
        self.legal_moves.is_empty()
    }

    /// The outcome of a finished game.
    pub fn outcome(&self) -> Option<Outcome> {
        Outcome::of(&self.board)
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.board)
    }
}
