//! Scoring module - line sweeps
//!
//! Rows are scanned bottom to top. Each full row is removed, an empty row is
//! pushed in at the top, and the same index is examined again since the rows
//! above have moved down into it.
//!
//! Points double within one sweep: the first cleared row is worth 10, the next
//! 20, then 40 and so on. The multiplier starts over on every sweep.
//!
//! The top row is not scanned. In a single-row grid the top row is also the
//! bottom row, and it is scanned.

use crate::grid::Grid;
use crate::types::LINE_CLEAR_POINTS;

/// Outcome of one sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SweepResult {
    /// Rows removed
    pub lines: u32,
    /// Points earned by this sweep
    pub score: u32,
}

/// Points for a cleared row at the given multiplier
pub fn line_clear_points(multiplier: u32) -> u32 {
    multiplier.saturating_mul(LINE_CLEAR_POINTS)
}

/// Lowest row index the sweep examines
fn scan_floor(height: usize) -> usize {
    if height > 1 {
        1
    } else {
        0
    }
}

/// Remove full rows and score them
pub fn sweep(grid: &mut Grid) -> SweepResult {
    let mut result = SweepResult::default();
    let height = grid.height();
    if height == 0 {
        return result;
    }

    let floor = scan_floor(height);
    let mut multiplier: u32 = 1;
    let mut y = height - 1;

    loop {
        if grid.is_row_full(y) {
            grid.remove_row(y);
            result.lines += 1;
            result.score = result.score.saturating_add(line_clear_points(multiplier));
            multiplier = multiplier.saturating_mul(2);
            // Re-examine y: the row above has moved into it
            continue;
        }

        if y == floor {
            break;
        }
        y -= 1;
    }

    result
}
