//! Grid module - the arena of settled blocks
//!
//! The grid is `width` columns by `height` rows, both fixed at construction.
//! Cells are stored in a flat row-major buffer so clearing and row shifting are
//! plain slice copies.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.
//! Anything outside `0..width` x `0..height` reads as `None`, which callers
//! treat as blocked.

use crate::types::{Cell, EMPTY};

/// The arena - `width` x `height` cells in a flat buffer
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Row-major cells (y * width + x)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![EMPTY; width * height],
        }
    }

    /// Build a grid from rows (top to bottom)
    ///
    /// Returns `None` if the rows are ragged.
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut cells = Vec::with_capacity(width * height);
        for row in rows {
            let row = row.as_ref();
            if row.len() != width {
                return None;
            }
            cells.extend_from_slice(row);
        }
        Some(Self {
            width,
            height,
            cells,
        })
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if (x, y) lies inside the grid
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    /// Get cell at (x, y), `None` if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and empty
    pub fn is_free(&self, x: i32, y: i32) -> bool {
        self.get(x, y) == Some(EMPTY)
    }

    /// A row is full when every cell is nonzero. Out-of-range rows and the
    /// rows of a zero-width grid are never full.
    pub fn is_row_full(&self, y: usize) -> bool {
        if self.width == 0 {
            return false;
        }
        self.row(y)
            .is_some_and(|row| row.iter().all(|&cell| cell != EMPTY))
    }

    /// Borrow one row
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        // chunks(0) panics, and a zero-width grid has no cells anyway
        self.cells.chunks(self.width.max(1))
    }

    /// Remove row `y`, shift every row above it down by one and put an empty
    /// row on top. Height never changes.
    /// Returns false if `y` is out of range.
    pub fn remove_row(&mut self, y: usize) -> bool {
        if y >= self.height {
            return false;
        }

        let width = self.width;
        // copy_within handles the overlap
        self.cells.copy_within(0..y * width, width);
        self.cells[..width].fill(EMPTY);

        true
    }

    /// Set every cell to empty
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// True if no cell is occupied
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == EMPTY)
    }

    /// Flat row-major view
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the rows out (top to bottom)
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows().map(<[Cell]>::to_vec).collect()
    }
}
