//! Outcome of a finished game.

use crate::board::Board;
use crate::rules::{is_full, winner};
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player completed a winning line.
    Winner(Player),
    /// Board filled with no winning line.
    Draw,
}

impl Outcome {
    /// Reads the outcome off a board. `None` while the game is still open.
    pub fn of(board: &Board) -> Option<Self> {
        match winner(board) {
            Some(player) => Some(Outcome::Winner(player)),
            None if is_full(board) => Some(Outcome::Draw),
            None => None,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
