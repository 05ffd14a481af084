use serde::{Deserialize, Serialize};

use crate::{IllegalPlacement, Piece, PiecesSet};

pub const BOARD_SIZE: usize = 4;

/// Coordinates of a single cell, `(0, 0)` being the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn is_in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Which kind of line a [`Group`] is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKind {
    Row,
    Column,
    /// From the top-left to the bottom-right corner.
    MainDiagonal,
    /// From the top-right to the bottom-left corner.
    AntiDiagonal,
}

/// A line of [`BOARD_SIZE`] cells that wins when all its pieces share an attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Group {
    pub kind: GroupKind,
    pub cells: [Cell; BOARD_SIZE],
}

/// The playing field.
///
/// A cell that has been filled is never emptied again, so a board only ever
/// grows until all cells are occupied.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// The groups that contain the given cell.
    ///
    /// The row and the column are always returned, in that order, followed by
    /// the main diagonal and the anti-diagonal if the cell lies on them.
    pub fn groups_for_cell(&self, row: usize, col: usize) -> Vec<Group> {
        debug_assert!(Cell::new(row, col).is_in_bounds());
        let mut groups = Vec::with_capacity(4);
        groups.push(Group {
            kind: GroupKind::Row,
            cells: std::array::from_fn(|j| Cell::new(row, j)),
        });
        groups.push(Group {
            kind: GroupKind::Column,
            cells: std::array::from_fn(|i| Cell::new(i, col)),
        });
        if row == col {
            groups.push(Group {
                kind: GroupKind::MainDiagonal,
                cells: std::array::from_fn(|i| Cell::new(i, i)),
            });
        }
        if row + col == BOARD_SIZE - 1 {
            groups.push(Group {
                kind: GroupKind::AntiDiagonal,
                cells: std::array::from_fn(|i| Cell::new(i, BOARD_SIZE - 1 - i)),
            });
        }
        groups
    }

    /// Records a piece on an empty cell.
    ///
    /// This does not check whether the piece is already somewhere else on the
    /// board, and it does not look for a win; see
    /// [`TurnEngine::place_piece()`](crate::TurnEngine::place_piece) for that.
    pub fn place(&mut self, row: usize, col: usize, piece: Piece) -> Result<(), IllegalPlacement> {
        if !Cell::new(row, col).is_in_bounds() {
            return Err(IllegalPlacement::OutOfBounds);
        }
        let cell = &mut self.cells[row][col];
        if cell.is_some() {
            return Err(IllegalPlacement::CellOccupied);
        }
        *cell = Some(piece);
        Ok(())
    }

    /// Out-of-bounds cells count as unoccupied.
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.occupant_of(row, col).is_some()
    }

    pub fn occupant_of(&self, row: usize, col: usize) -> Option<Piece> {
        self.cells.get(row)?.get(col).copied().flatten()
    }

    /// The occupied cells and their pieces, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, Piece)> + '_ {
        self.cells.iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(j, cell)| cell.map(|piece| (Cell::new(i, j), piece)))
        })
    }

    pub fn placed(&self) -> PiecesSet {
        self.iter().map(|(_, piece)| piece).collect()
    }

    pub fn num_placed(&self) -> usize {
        self.iter().count()
    }

    pub fn is_full(&self) -> bool {
        self.num_placed() == BOARD_SIZE * BOARD_SIZE
    }
}
