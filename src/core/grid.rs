//! The playing field.
//!
//! A fixed `GRID_SIZE`×`GRID_SIZE` matrix of cells backed by a flat
//! array for cache locality. Coordinates are `(row, col)` with row 0 at
//! the top; anchors arriving from a drag gesture may be negative, so
//! bounds checks take signed coordinates.
//!
//! The grid is owned by the engine and mutated only by placement and
//! line clearing. A cell is either empty or filled with the color of
//! the piece that covered it; `Option<ColorId>` makes the
//! "filled iff colored" invariant unrepresentable to violate.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::piece::ColorId;

/// Side length of the square grid.
pub const GRID_SIZE: usize = 10;

/// Total number of cells.
const GRID_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// A single grid cell: `Some(color)` iff filled.
pub type Cell = Option<ColorId>;

/// The 10×10 playing field, flat row-major storage.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Cell; GRID_CELLS],
}

impl Grid {
    /// Create an empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_CELLS],
        }
    }

    /// Flat index for `(row, col)`, or `None` if out of bounds.
    #[inline]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= GRID_SIZE as i8 || col < 0 || col >= GRID_SIZE as i8 {
            return None;
        }
        Some(row as usize * GRID_SIZE + col as usize)
    }

    /// Get the cell at `(row, col)`; `None` if out of bounds.
    #[must_use]
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set the cell at `(row, col)`.
    ///
    /// Returns false (and does nothing) if out of bounds.
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Is `(row, col)` in bounds and unfilled?
    #[must_use]
    pub fn is_open(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// Is `(row, col)` in bounds and filled?
    #[must_use]
    pub fn is_filled(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Is every cell of `row` filled?
    #[must_use]
    pub fn is_row_complete(&self, row: usize) -> bool {
        if row >= GRID_SIZE {
            return false;
        }
        let start = row * GRID_SIZE;
        self.cells[start..start + GRID_SIZE]
            .iter()
            .all(Option::is_some)
    }

    /// Is every cell of `col` filled?
    #[must_use]
    pub fn is_col_complete(&self, col: usize) -> bool {
        if col >= GRID_SIZE {
            return false;
        }
        (0..GRID_SIZE).all(|row| self.cells[row * GRID_SIZE + col].is_some())
    }

    /// Clear every complete row and column, non-cascading.
    ///
    /// Both scans run against the grid as it stands on entry: a column
    /// that is complete before any clearing still counts even when it
    /// shares a cell with a complete row. The shared cell contributes
    /// to both counts.
    pub fn clear_complete_lines(&mut self) -> LineClear {
        let rows: SmallVec<[u8; 4]> = (0..GRID_SIZE)
            .filter(|&row| self.is_row_complete(row))
            .map(|row| row as u8)
            .collect();
        let cols: SmallVec<[u8; 4]> = (0..GRID_SIZE)
            .filter(|&col| self.is_col_complete(col))
            .map(|col| col as u8)
            .collect();

        for &row in &rows {
            let start = row as usize * GRID_SIZE;
            self.cells[start..start + GRID_SIZE].fill(None);
        }
        for &col in &cols {
            for row in 0..GRID_SIZE {
                self.cells[row * GRID_SIZE + col as usize] = None;
            }
        }

        LineClear { rows, cols }
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Is every cell empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Iterate over rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(GRID_SIZE)
    }

    /// Build a grid from a 2-D cell matrix.
    ///
    /// Intended for tests and fixtures.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is not `GRID_SIZE`×`GRID_SIZE`.
    #[must_use]
    pub fn from_rows(rows_2d: &[Vec<Cell>]) -> Self {
        assert_eq!(rows_2d.len(), GRID_SIZE);
        assert!(rows_2d.iter().all(|row| row.len() == GRID_SIZE));

        let mut grid = Self::new();
        for (row, cells) in rows_2d.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                grid.cells[row * GRID_SIZE + col] = *cell;
            }
        }
        grid
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for cell in row {
                match cell {
                    Some(color) => write!(f, "{}", color.raw())?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Report of a clearing pass: which rows and columns were reset.
///
/// A cell belonging to both a complete row and a complete column counts
/// toward both lists.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineClear {
    /// Indices of cleared rows, ascending.
    pub rows: SmallVec<[u8; 4]>,
    /// Indices of cleared columns, ascending.
    pub cols: SmallVec<[u8; 4]>,
}

impl LineClear {
    /// Total number of cleared lines (rows plus columns).
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.rows.len() + self.cols.len()
    }

    /// Did nothing clear?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.cols.is_empty()
    }
}
