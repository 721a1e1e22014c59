//! Core domain types for tic-tac-toe.
//!
//! Every value here is `Copy` and compared by value. There is no way to
//! name a square outside the 3x3 grid or a symbol other than X or O.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X.
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl FromStr for Player {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" | "X" => Ok(Player::X),
            "o" | "O" => Ok(Player::O),
            other => Err(ParseError::Player(other.to_string())),
        }
    }
}

/// The content of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Mark {
    /// Returns true if nobody has played here.
    pub fn is_empty(self) -> bool {
        matches!(self, Mark::Empty)
    }

    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::Occupied(player) => Some(player),
        }
    }
}

impl From<Player> for Mark {
    fn from(player: Player) -> Self {
        Mark::Occupied(player)
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::Empty => write!(f, " "),
            Mark::Occupied(player) => write!(f, "{}", player),
        }
    }
}

impl FromStr for Mark {
    type Err = ParseError;

    /// Parses `X`/`O`, or `_`, `.` and blank for an empty cell.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "_" | "." => Ok(Mark::Empty),
            other => other
                .parse::<Player>()
                .map(Mark::Occupied)
                .map_err(|_| ParseError::Mark(s.to_string())),
        }
    }
}

/// Board row, top to bottom.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Row {
    /// First row.
    Top,
    /// Second row.
    Middle,
    /// Third row.
    Bottom,
}

/// Board column, left to right.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Column {
    /// First column.
    Left,
    /// Second column.
    Middle,
    /// Third column.
    Right,
}

/// One of the nine board coordinates.
///
/// Ordering is row-major, so sorting positions yields the canonical
/// board order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    row: Row,
    column: Column,
}

impl Position {
    /// All 9 positions in canonical row-major order.
    pub const ALL: [Position; 9] = [
        Position::new(Row::Top, Column::Left),
        Position::new(Row::Top, Column::Middle),
        Position::new(Row::Top, Column::Right),
        Position::new(Row::Middle, Column::Left),
        Position::new(Row::Middle, Column::Middle),
        Position::new(Row::Middle, Column::Right),
        Position::new(Row::Bottom, Column::Left),
        Position::new(Row::Bottom, Column::Middle),
        Position::new(Row::Bottom, Column::Right),
    ];

    /// Creates a position from its row and column.
    pub const fn new(row: Row, column: Column) -> Self {
        Self { row, column }
    }

    /// Returns the row.
    pub fn row(self) -> Row {
        self.row
    }

    /// Returns the column.
    pub fn column(self) -> Column {
        self.column
    }

    /// Converts the position to its row-major board index (0-8).
    pub fn index(self) -> usize {
        self.row as usize * 3 + self.column as usize
    }

    /// Creates a position from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.row, self.column)
    }
}

impl FromStr for Position {
    type Err = ParseError;

    /// Parses a `row-column` label such as `top-left`, or an index 0-8.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let err = || ParseError::Position(s.to_string());

        if let Ok(index) = trimmed.parse::<usize>() {
            return Self::from_index(index).ok_or_else(err);
        }

        let normalized = trimmed.replace(['_', ' '], "-");
        let (row, column) = normalized.split_once('-').ok_or_else(err)?;
        let row = row.parse::<Row>().map_err(|_| err())?;
        let column = column.parse::<Column>().map_err(|_| err())?;
        Ok(Self::new(row, column))
    }
}

/// A position paired with its current mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    position: Position,
    mark: Mark,
}

impl Cell {
    /// Creates a cell.
    pub fn new(position: Position, mark: Mark) -> Self {
        Self { position, mark }
    }

    /// Returns the cell's position.
    pub fn position(self) -> Position {
        self.position
    }

    /// Returns the cell's mark.
    pub fn mark(self) -> Mark {
        self.mark
    }

    /// Returns true if nobody has played here.
    pub fn is_empty(self) -> bool {
        self.mark.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opponent_is_involution() {
        for player in Player::iter() {
            assert_ne!(player.opponent(), player);
            assert_eq!(player.opponent().opponent(), player);
        }
    }

    #[test]
    fn test_mark_display() {
        assert_eq!(Mark::Empty.to_string(), " ");
        assert_eq!(Mark::Occupied(Player::X).to_string(), "X");
        assert_eq!(Mark::Occupied(Player::O).to_string(), "O");
    }

    #[test]
    fn test_mark_parse() {
        assert_eq!("x".parse::<Mark>(), Ok(Mark::Occupied(Player::X)));
        assert_eq!("_".parse::<Mark>(), Ok(Mark::Empty));
        assert_eq!(".".parse::<Mark>(), Ok(Mark::Empty));
        assert!(matches!("Z".parse::<Mark>(), Err(ParseError::Mark(_))));
    }

    #[test]
    fn test_position_index_round_trip() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), i);
            assert_eq!(Position::from_index(i), Some(*pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_all_positions_are_distinct_and_sorted() {
        let mut sorted = Position::ALL;
        sorted.sort();
        assert_eq!(sorted, Position::ALL);
        sorted.windows(2).for_each(|w| assert_ne!(w[0], w[1]));
    }

    #[test]
    fn test_position_parse_labels() {
        assert_eq!(
            "top-left".parse::<Position>(),
            Ok(Position::new(Row::Top, Column::Left))
        );
        assert_eq!(
            "Bottom_Right".parse::<Position>(),
            Ok(Position::new(Row::Bottom, Column::Right))
        );
        assert_eq!(
            "middle middle".parse::<Position>(),
            Ok(Position::new(Row::Middle, Column::Middle))
        );
        assert_eq!(
            "4".parse::<Position>(),
            Ok(Position::new(Row::Middle, Column::Middle))
        );
    }

    #[test]
    fn test_position_parse_rejects_garbage() {
        assert!("9".parse::<Position>().is_err());
        assert!("center".parse::<Position>().is_err());
        assert!("left-top".parse::<Position>().is_err());
    }

    #[test]
    fn test_position_display_parses_back() {
        for pos in Position::ALL {
            assert_eq!(pos.to_string().parse::<Position>(), Ok(pos));
        }
    }
}
