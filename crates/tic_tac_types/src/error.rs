//! Error types for board construction and text parsing.
//!
//! Move legality has no error type: a move that cannot be played is
//! simply absent from a game's legal-move map.

use crate::types::Position;

/// A board could not be assembled from the given cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The board did not contain exactly nine cells.
    #[display("Board must have 9 cells, got {}", _0)]
    WrongCellCount(usize),

    /// The same position appeared more than once.
    #[display("Position {} appears more than once", _0)]
    DuplicatePosition(Position),

    /// A position had no cell.
    #[display("Position {} is missing", _0)]
    MissingPosition(Position),
}

impl std::error::Error for BoardError {}

/// Text could not be parsed into a game value.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseError {
    /// Not `X` or `O`.
    #[display("Unknown player {:?} (expected X or O)", _0)]
    Player(String),

    /// Not `X`, `O` or an empty marker.
    #[display("Unknown mark {:?} (expected X, O, _ or .)", _0)]
    Mark(String),

    /// Not a `row-column` label or an index 0-8.
    #[display("Unknown position {:?} (expected e.g. top-left or 0-8)", _0)]
    Position(String),
}

impl std::error::Error for ParseError {}
