//! Tic-tac-toe where illegal moves are unrepresentable.
//!
//! A [`Game`] is an immutable snapshot holding its board and a map of
//! legal moves. Each entry maps an open [`Position`] to a [`LegalMove`]
//! that produces the next game. There is no "apply move" function that
//! can fail: if a position is not a key of [`Game::legal_moves`], there
//! is nothing to call.
//!
//! # Example
//!
//! ```
//! use tic_tac_types::{Game, Player, Position};
//!
//! let game = Game::new(Player::O);
//! assert_eq!(game.legal_moves().len(), 9);
//!
//! let top_left: Position = "top-left".parse().unwrap();
//! let next = game.legal_moves().play(top_left).unwrap();
//! assert!(!next.legal_moves().contains(top_left));
//! assert_eq!(next.to_move(), Some(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod error;
mod game;
mod moves;
mod outcome;
mod render;
mod tree;
mod types;

pub mod invariants;
pub mod rules;

// Crate-level exports - Value types
pub use types::{Cell, Column, Mark, Player, Position, Row};

// Crate-level exports - Board and rendering
pub use board::Board;
pub use render::render;

// Crate-level exports - Game state
pub use game::Game;
pub use moves::{LegalMove, LegalMoves, legal_moves_for};
pub use outcome::Outcome;

// Crate-level exports - Analysis
pub use tree::{GameTreeStats, explore};

// Crate-level exports - Errors
pub use error::{BoardError, ParseError};
