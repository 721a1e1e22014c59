//! Legal-move generation.
//!
//! A game's legal moves are a map from open positions to [`LegalMove`]
//! producers. The key set *is* the set of legal moves: there is no
//! separate validity check, and a position that cannot be played has no
//! entry to invoke.

use crate::board::Board;
use crate::game::Game;
use crate::rules::has_winner;
use crate::types::{Mark, Player, Position};
use std::collections::BTreeMap;
use tracing::{instrument, trace};

/// A playable move, bound to the board it produces.
///
/// The successor board is built when the move is generated, so calling
/// [`LegalMove::play`] any number of times yields equal games. Fields are
/// private: the only source of a `LegalMove` is [`legal_moves_for`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegalMove {
    position: Position,
    mover: Player,
    board: Board,
}

impl LegalMove {
    /// The position this move fills.
    pub fn position(&self) -> Position {
        self.position
    }

    /// The player making this move.
    pub fn mover(&self) -> Player {
        self.mover
    }

    /// The board after this move.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Produces the next game, whose moves belong to the mover's opponent.
    #[instrument(level = "debug", skip(self), fields(position = %self.position, player = %self.mover))]
    pub fn play(&self) -> Game {
        Game::after(self.board, self.mover)
    }
}

/// Legal moves keyed by position, in canonical board order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LegalMoves {
    moves: BTreeMap<Position, LegalMove>,
}

impl LegalMoves {
    /// Looks up the move at a position. `None` means it cannot be played.
    pub fn get(&self, position: Position) -> Option<&LegalMove> {
        self.moves.get(&position)
    }

    /// Checks whether a position can be played.
    pub fn contains(&self, position: Position) -> bool {
        self.moves.contains_key(&position)
    }

    /// Plays the move at a position, if there is one.
    pub fn play(&self, position: Position) -> Option<Game> {
        self.get(position).map(LegalMove::play)
    }

    /// Number of legal moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// True for a finished game.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Playable positions in canonical order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.moves.keys().copied()
    }

    /// All moves in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &LegalMove> + '_ {
        self.moves.values()
    }
}

impl<'a> IntoIterator for &'a LegalMoves {
    type Item = &'a LegalMove;
    type IntoIter = std::collections::btree_map::Values<'a, Position, LegalMove>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.values()
    }
}

/// Computes every legal move for `player` on `board`.
///
/// A won board has no moves regardless of empty cells. Otherwise each
/// empty cell maps to a move placing `player`'s mark there; a full board
/// therefore has none.
#[instrument(level = "trace", skip(board))]
pub fn legal_moves_for(board: &Board, player: Player) -> LegalMoves {
    if has_winner(board) {
        trace!("Board already won, no moves");
        return LegalMoves::default();
    }

    let moves = board
        .empty_positions()
        .map(|position| {
            let next = board.with_mark(position, Mark::Occupied(player));
            (
                position,
                LegalMove {
                    position,
                    mover: player,
                    board: next,
                },
            )
        })
        .collect();

    LegalMoves { moves }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Column, Row};

    const X: Mark = Mark::Occupied(Player::X);
    const O: Mark = Mark::Occupied(Player::O);
    const E: Mark = Mark::Empty;

    #[test]
    fn test_empty_board_has_nine_moves() {
        let moves = legal_moves_for(&Board::empty(), Player::X);
        assert_eq!(moves.len(), 9);
        assert!(moves.positions().eq(Position::ALL));
        assert!(moves.iter().all(|m| m.mover() == Player::X));
    }

    #[test]
    fn test_keys_are_the_empty_cells() {
        let board = Board::from_marks([X, E, O, E, X, E, E, O, E]);
        let moves = legal_moves_for(&board, Player::O);
        assert!(moves.positions().eq(board.empty_positions()));
    }

    #[test]
    fn test_move_places_mover_mark_only_at_key() {
        let board = Board::from_marks([X, E, E, E, O, E, E, E, E]);
        let moves = legal_moves_for(&board, Player::X);
        for mv in &moves {
            for pos in Position::ALL {
                let expected = if pos == mv.position() { X } else { board.mark(pos) };
                assert_eq!(mv.board().mark(pos), expected);
            }
        }
    }

    #[test]
    fn test_won_board_has_no_moves() {
        let board = Board::from_marks([O, O, O, X, X, E, E, E, E]);
        assert!(legal_moves_for(&board, Player::X).is_empty());
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let board = Board::from_marks([X, O, X, O, X, X, O, X, O]);
        assert!(legal_moves_for(&board, Player::O).is_empty());
    }

    #[test]
    fn test_occupied_cell_is_absent() {
        let pos = Position::new(Row::Middle, Column::Middle);
        let board = Board::from_marks([E, E, E, E, X, E, E, E, E]);
        let moves = legal_moves_for(&board, Player::O);
        assert!(!moves.contains(pos));
        assert!(moves.get(pos).is_none());
        assert!(moves.play(pos).is_none());
    }

    #[test]
    fn test_play_is_idempotent() {
        let moves = legal_moves_for(&Board::empty(), Player::O);
        let mv = moves.get(Position::ALL[0]).expect("open cell");
        assert_eq!(mv.play(), mv.play());
    }
}
