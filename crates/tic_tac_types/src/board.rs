//! The 3x3 board.

use crate::error::BoardError;
use crate::types::{Cell, Mark, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Exactly nine cells, one per position, stored in canonical order.
///
/// A board is only ever built from a complete position set, so the cell
/// at index `i` always sits at `Position::ALL[i]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Cell>", into = "Vec<Cell>")]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates a board with every cell empty.
    pub fn empty() -> Self {
        Self::from_marks([Mark::Empty; 9])
    }

    /// Creates a board from marks in row-major order.
    pub fn from_marks(marks: [Mark; 9]) -> Self {
        let mut cells = [Cell::new(Position::ALL[0], Mark::Empty); 9];
        for ((cell, position), mark) in cells.iter_mut().zip(Position::ALL).zip(marks) {
            *cell = Cell::new(position, mark);
        }
        Self { cells }
    }

    /// Assembles a board from cells in any order.
    ///
    /// # Errors
    ///
    /// Fails unless the cells cover each of the nine positions exactly once.
    #[instrument(skip(cells))]
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Result<Self, BoardError> {
        let cells: Vec<Cell> = cells.into_iter().collect();
        if cells.len() != 9 {
            warn!(count = cells.len(), "Rejected board with wrong cell count");
            return Err(BoardError::WrongCellCount(cells.len()));
        }

        let mut slots: [Option<Mark>; 9] = [None; 9];
        for cell in &cells {
            let slot = &mut slots[cell.position().index()];
            if slot.is_some() {
                warn!(position = %cell.position(), "Rejected board with duplicate position");
                return Err(BoardError::DuplicatePosition(cell.position()));
            }
            *slot = Some(cell.mark());
        }

        let mut marks = [Mark::Empty; 9];
        for ((mark, slot), position) in marks.iter_mut().zip(slots).zip(Position::ALL) {
            *mark = slot.ok_or(BoardError::MissingPosition(position))?;
        }
        Ok(Self::from_marks(marks))
    }

    /// Returns a copy of this board with one cell's mark replaced.
    pub(crate) fn with_mark(&self, position: Position, mark: Mark) -> Self {
        let mut next = *self;
        next.cells[position.index()] = Cell::new(position, mark);
        debug_assert!(next.is_well_formed(), "successor board lost a position");
        next
    }

    /// Gets the mark at the given position.
    pub fn mark(&self, position: Position) -> Mark {
        self.cells[position.index()].mark()
    }

    /// Returns all cells in canonical order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns all marks in row-major order.
    pub fn marks(&self) -> [Mark; 9] {
        self.cells.map(Cell::mark)
    }

    /// Positions occupied by the given player.
    pub fn occupied_by(&self, player: Player) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .filter(move |cell| cell.mark() == Mark::Occupied(player))
            .map(|cell| cell.position())
    }

    /// Positions nobody has played yet.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .filter(|cell| cell.is_empty())
            .map(|cell| cell.position())
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Checks that cell `i` sits at `Position::ALL[i]`.
    pub fn is_well_formed(&self) -> bool {
        self.cells
            .iter()
            .zip(Position::ALL)
            .all(|(cell, position)| cell.position() == position)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl TryFrom<Vec<Cell>> for Board {
    type Error = BoardError;

    fn try_from(cells: Vec<Cell>) -> Result<Self, Self::Error> {
        Self::from_cells(cells)
    }
}

impl From<Board> for Vec<Cell> {
    fn from(board: Board) -> Self {
        board.cells.to_vec()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::render::render(self))
    }
}
