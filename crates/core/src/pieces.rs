//! Pieces module - tetromino matrices and in-place rotation
//!
//! Every shape is a small square matrix of cells (3x3, 4x4 for I). A nonzero
//! entry is an occupied sub-cell and carries the shape's cell value.
//!
//! Rotation is transpose-then-reverse on the matrix itself: reversing each row
//! after the transpose turns it clockwise, reversing the row order turns it
//! counter-clockwise. Four turns in either direction give back the original.

use arrayvec::ArrayVec;

use crate::types::{Cell, RotateDirection, ShapeId, EMPTY, MAX_PIECE_SIZE};

/// Shape used when a name does not match any tetromino
pub const FALLBACK_SHAPE: ShapeId = ShapeId::T;

/// Occupied sub-cells of a matrix as (x, y, value), at most one per matrix cell
pub type OccupiedCells = ArrayVec<(i32, i32, Cell), { MAX_PIECE_SIZE * MAX_PIECE_SIZE }>;

/// Square piece matrix, up to `MAX_PIECE_SIZE` on a side
///
/// Storage is a fixed 4x4 array; only the top-left `size` x `size` block is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceMatrix {
    size: usize,
    /// cells[row][col]
    cells: [[Cell; MAX_PIECE_SIZE]; MAX_PIECE_SIZE],
}

impl PieceMatrix {
    /// Build a matrix from rows (top to bottom)
    ///
    /// Returns `None` unless the rows form a square of side 1..=MAX_PIECE_SIZE.
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Option<Self> {
        let size = rows.len();
        if size == 0 || size > MAX_PIECE_SIZE {
            return None;
        }

        let mut cells = [[EMPTY; MAX_PIECE_SIZE]; MAX_PIECE_SIZE];
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                return None;
            }
            cells[y][..size].copy_from_slice(row);
        }

        Some(Self { size, cells })
    }

    /// Side length (rows == columns)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of columns, used to center the piece on spawn
    pub fn width(&self) -> usize {
        self.size
    }

    /// Cell at local column `x`, row `y`
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if x >= self.size || y >= self.size {
            return None;
        }
        Some(self.cells[y][x])
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells[..self.size].iter().map(|row| &row[..self.size])
    }

    /// Copy the rows out
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows().map(<[Cell]>::to_vec).collect()
    }

    /// Local coordinates and values of every occupied sub-cell
    pub fn occupied(&self) -> OccupiedCells {
        let mut out = OccupiedCells::new();
        for (y, row) in self.rows().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                if value != EMPTY {
                    out.push((x as i32, y as i32, value));
                }
            }
        }
        out
    }

    /// Rotate 90° in place
    pub fn rotate(&mut self, direction: RotateDirection) {
        let n = self.size;

        // Transpose
        for y in 0..n {
            for x in 0..y {
                let tmp = self.cells[x][y];
                self.cells[x][y] = self.cells[y][x];
                self.cells[y][x] = tmp;
            }
        }

        match direction {
            RotateDirection::Clockwise => {
                for row in &mut self.cells[..n] {
                    row[..n].reverse();
                }
            }
            RotateDirection::CounterClockwise => self.cells[..n].reverse(),
        }
    }
}

/// Rotate a matrix 90° in place
pub fn rotate(matrix: &mut PieceMatrix, direction: RotateDirection) {
    matrix.rotate(direction);
}

/// Canonical matrix for a shape, filled with the shape's cell value
pub fn create_piece(shape: ShapeId) -> PieceMatrix {
    let layout: &[&[u8]] = match shape {
        ShapeId::I => &[&[1, 0, 0, 0], &[1, 0, 0, 0], &[1, 0, 0, 0], &[1, 0, 0, 0]],
        ShapeId::J => &[&[0, 0, 0], &[1, 1, 1], &[0, 0, 1]],
        ShapeId::L => &[&[0, 1, 0], &[0, 1, 0], &[0, 1, 1]],
        ShapeId::O => &[&[1, 1, 0], &[1, 1, 0], &[0, 0, 0]],
        ShapeId::S => &[&[0, 1, 1], &[1, 1, 0], &[0, 0, 0]],
        ShapeId::T => &[&[0, 0, 0], &[1, 1, 1], &[0, 1, 0]],
        ShapeId::Z => &[&[1, 1, 0], &[0, 1, 1], &[0, 0, 0]],
    };

    let value = shape.cell_value();
    let size = layout.len();
    let mut cells = [[EMPTY; MAX_PIECE_SIZE]; MAX_PIECE_SIZE];
    for (y, row) in layout.iter().enumerate() {
        for (x, &bit) in row.iter().enumerate() {
            cells[y][x] = bit * value;
        }
    }

    PieceMatrix { size, cells }
}

/// Matrix for a shape given by name; unknown names fall back to T
pub fn create_piece_named(name: &str) -> PieceMatrix {
    create_piece(ShapeId::from_str(name).unwrap_or(FALLBACK_SHAPE))
}
