//! Collision detection and placement
//!
//! A piece collides when any occupied sub-cell lands outside the grid or on a
//! settled cell. Missing rows and missing columns are both treated as blocked.

use crate::grid::Grid;
use crate::pieces::PieceMatrix;

/// Check whether `matrix` placed with its top-left corner at (x, y) overlaps
/// settled cells or leaves the grid
pub fn collides(grid: &Grid, matrix: &PieceMatrix, x: i32, y: i32) -> bool {
    matrix
        .occupied()
        .iter()
        .any(|&(dx, dy, _)| !grid.is_free(x + dx, y + dy))
}

/// Write every occupied sub-cell of `matrix` into the grid
///
/// Callers only merge a piece that does not collide. Sub-cells that would fall
/// outside the grid are skipped.
pub fn merge(grid: &mut Grid, matrix: &PieceMatrix, x: i32, y: i32) {
    for (dx, dy, value) in matrix.occupied() {
        grid.set(x + dx, y + dy, value);
    }
}
