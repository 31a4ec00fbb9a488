//! Core types module - shared data structures and constants
//!
//! This module defines the plain data used throughout the workspace. Nothing
//! here knows about the grid or the session; it is shared by the rules engine
//! and by whatever host drives it (renderer, input handler, score display).
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_WIDTH` | 12 | Arena columns |
//! | `DEFAULT_HEIGHT` | 20 | Arena rows |
//! | `DEFAULT_DROP_INTERVAL_MS` | 1000 | Time units between gravity drops |
//! | `LINE_CLEAR_POINTS` | 10 | Points for the first row of a sweep |
//! | `MAX_PIECE_SIZE` | 4 | Side of the largest piece matrix |
//!
//! # Examples
//!
//! ```
//! use tetris_arena_types::{GameAction, RotateDirection, ShapeId};
//!
//! // Parse from string (case-insensitive)
//! assert_eq!(ShapeId::from_str("t"), Some(ShapeId::T));
//!
//! // Cell values encode shape identity
//! assert_eq!(ShapeId::I.cell_value(), 1);
//! assert_eq!(ShapeId::from_cell_value(7), Some(ShapeId::Z));
//!
//! // Directions are signed
//! assert_eq!(RotateDirection::from_sign(-1), RotateDirection::CounterClockwise);
//!
//! let action = GameAction::from_str("rotateCw").unwrap();
//! assert_eq!(action, GameAction::RotateCw);
//! ```

use serde::{Deserialize, Serialize};

/// Default arena width in cells (12 columns)
pub const DEFAULT_WIDTH: usize = 12;

/// Default arena height in cells (20 rows)
pub const DEFAULT_HEIGHT: usize = 20;

/// Default gravity interval (1000 time units, i.e. one second at 1 unit = 1ms)
pub const DEFAULT_DROP_INTERVAL_MS: u32 = 1000;

/// Points awarded for the first row cleared in a sweep; doubles per extra row
pub const LINE_CLEAR_POINTS: u32 = 10;

/// Side length of the largest piece matrix (the I piece is 4x4)
pub const MAX_PIECE_SIZE: usize = 4;

/// A cell on the arena or inside a piece matrix
///
/// - `0`: empty
/// - `1..=7`: occupied, value is the [`ShapeId::cell_value`] of the piece that left it
pub type Cell = u8;

/// The empty cell value
pub const EMPTY: Cell = 0;

/// The seven tetromino shapes
///
/// Declaration order is the canonical `IJLOSTZ` alphabet; cell values follow it
/// (I = 1 ... Z = 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeId {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl ShapeId {
    /// Every shape, in canonical order
    pub const ALL: [ShapeId; 7] = [
        ShapeId::I,
        ShapeId::J,
        ShapeId::L,
        ShapeId::O,
        ShapeId::S,
        ShapeId::T,
        ShapeId::Z,
    ];

    /// Parse a shape from a single-letter name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_arena_types::ShapeId;
    ///
    /// assert_eq!(ShapeId::from_str("i"), Some(ShapeId::I));
    /// assert_eq!(ShapeId::from_str("Z"), Some(ShapeId::Z));
    /// assert_eq!(ShapeId::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    /// Parse a shape from its letter (case-insensitive)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'I' => Some(ShapeId::I),
            'J' => Some(ShapeId::J),
            'L' => Some(ShapeId::L),
            'O' => Some(ShapeId::O),
            'S' => Some(ShapeId::S),
            'T' => Some(ShapeId::T),
            'Z' => Some(ShapeId::Z),
            _ => None,
        }
    }

    /// Uppercase letter for this shape
    pub fn as_char(&self) -> char {
        match self {
            ShapeId::I => 'I',
            ShapeId::J => 'J',
            ShapeId::L => 'L',
            ShapeId::O => 'O',
            ShapeId::S => 'S',
            ShapeId::T => 'T',
            ShapeId::Z => 'Z',
        }
    }

    /// Value written into occupied cells of this shape
    pub fn cell_value(&self) -> Cell {
        match self {
            ShapeId::I => 1,
            ShapeId::J => 2,
            ShapeId::L => 3,
            ShapeId::O => 4,
            ShapeId::S => 5,
            ShapeId::T => 6,
            ShapeId::Z => 7,
        }
    }

    /// Inverse of [`ShapeId::cell_value`]
    pub fn from_cell_value(value: Cell) -> Option<Self> {
        match value {
            1..=7 => Some(Self::ALL[(value - 1) as usize]),
            _ => None,
        }
    }
}

/// Rotation direction
///
/// Signed like the host-facing API: positive is clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotateDirection {
    Clockwise,
    CounterClockwise,
}

impl RotateDirection {
    /// Map a signed direction to a rotation (`> 0` clockwise, otherwise counter-clockwise)
    pub fn from_sign(dir: i32) -> Self {
        if dir > 0 {
            RotateDirection::Clockwise
        } else {
            RotateDirection::CounterClockwise
        }
    }

    pub fn sign(&self) -> i32 {
        match self {
            RotateDirection::Clockwise => 1,
            RotateDirection::CounterClockwise => -1,
        }
    }

    /// The direction that undoes this one
    pub fn opposite(&self) -> Self {
        match self {
            RotateDirection::Clockwise => RotateDirection::CounterClockwise,
            RotateDirection::CounterClockwise => RotateDirection::Clockwise,
        }
    }
}

/// Commands a host can send to the session
///
/// Input mapping lives in the host; these are what the keys end up meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down, locking it if it cannot fall
    SoftDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_arena_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("SOFTDROP"), Some(GameAction::SoftDrop));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotatecw" => Some(GameAction::RotateCw),
            "rotateccw" => Some(GameAction::RotateCcw),
            _ => None,
        }
    }

    /// camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
        }
    }
}
