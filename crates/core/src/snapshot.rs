use serde::{Deserialize, Serialize};

use crate::session::Piece;
use crate::types::{Cell, ShapeId};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActiveSnapshot {
    pub shape: ShapeId,
    /// Piece matrix rows in the current orientation
    pub matrix: Vec<Vec<Cell>>,
    pub x: i32,
    pub y: i32,
}

impl From<&Piece> for ActiveSnapshot {
    fn from(value: &Piece) -> Self {
        Self {
            shape: value.shape,
            matrix: value.matrix.to_rows(),
            x: value.x,
            y: value.y,
        }
    }
}

/// Read-only copy of everything a renderer or score display needs
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    /// Settled cells, rows top to bottom
    pub grid: Vec<Vec<Cell>>,
    pub active: ActiveSnapshot,
    pub score: u32,
    pub lines: u32,
    pub pieces: u32,
    pub games_over: u32,
    pub drop_counter_ms: u32,
}

impl GameSnapshot {
    /// Occupied cells of the active piece in grid coordinates
    pub fn active_cells(&self) -> impl Iterator<Item = (i32, i32, Cell)> + '_ {
        let (ax, ay) = (self.active.x, self.active.y);
        self.active.matrix.iter().enumerate().flat_map(move |(dy, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &value)| value != 0)
                .map(move |(dx, &value)| (ax + dx as i32, ay + dy as i32, value))
        })
    }
}
