//! Exhaustive game-tree enumeration.
//!
//! Walks every producer reachable from a game, depth first, and tallies
//! how the completed games end. Only moves present in a game's
//! legal-move map are ever followed.

use crate::game::Game;
use crate::outcome::Outcome;
use crate::types::Player;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Counts over every complete game reachable from a starting snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameTreeStats {
    /// Complete games (terminal leaves).
    pub games: u64,
    /// Games won by X.
    pub x_wins: u64,
    /// Games won by O.
    pub o_wins: u64,
    /// Games ending in a draw.
    pub draws: u64,
    /// Snapshots visited, including the root.
    pub positions_visited: u64,
}

impl GameTreeStats {
    /// Games won by the given player.
    pub fn wins(&self, player: Player) -> u64 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    fn record(&mut self, outcome: Outcome) {
        self.games += 1;
        match outcome {
            Outcome::Winner(Player::X) => self.x_wins += 1,
            Outcome::Winner(Player::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }
}

/// Enumerates every complete game reachable from `game`.
#[instrument(skip(game), fields(to_move = ?game.to_move()))]
pub fn explore(game: &Game) -> GameTreeStats {
    let mut stats = GameTreeStats::default();
    let mut stack = vec![game.clone()];

    while let Some(current) = stack.pop() {
        stats.positions_visited += 1;
        if current.is_over() {
            if let Some(outcome) = current.outcome() {
                stats.record(outcome);
            }
            continue;
        }
        stack.extend(current.legal_moves().iter().map(|mv| mv.play()));
    }

    info!(
        games = stats.games,
        x_wins = stats.x_wins,
        o_wins = stats.o_wins,
        draws = stats.draws,
        "Game tree explored"
    );
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::types::Mark;

    #[test]
    fn test_finished_game_is_a_single_leaf() {
        let game = Game::new(Player::X);
        let finished = [0, 3, 1, 4, 2]
            .into_iter()
            .filter_map(crate::Position::from_index)
            .fold(game, |g, pos| g.legal_moves().play(pos).expect("open"));
        let stats = explore(&finished);
        assert_eq!(stats.games, 1);
        assert_eq!(stats.x_wins, 1);
        assert_eq!(stats.positions_visited, 1);
    }

    #[test]
    fn test_last_cell_counts_one_game() {
        let x = Mark::Occupied(Player::X);
        let o = Mark::Occupied(Player::O);
        // X O X / X O O / O X _  -> X fills the corner, no line.
        let board = Board::from_marks([x, o, x, x, o, o, o, x, Mark::Empty]);
        let game = Game::after(board, Player::O);
        let stats = explore(&game);
        assert_eq!(stats.games, 1);
        assert_eq!(stats.draws, 1);
        assert_eq!(stats.positions_visited, 2);
    }
}
