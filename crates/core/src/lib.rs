//! Core game logic - the rules engine of a falling-block puzzle
//!
//! This crate owns the arena, the falling piece, collision, placement,
//! rotation and line clears. It has **no dependencies** on rendering, input
//! devices or timers: a host feeds it elapsed time and commands, and reads
//! snapshots back.
//!
//! # Module Structure
//!
//! - [`grid`]: the arena of settled cells
//! - [`pieces`]: tetromino matrices and in-place rotation
//! - [`collision`]: overlap/bounds checks and merging a piece into the arena
//! - [`scoring`]: sweeping full rows with doubling points
//! - [`rng`]: seeded uniform shape selection
//! - [`session`]: the game session and drop clock
//! - [`snapshot`]: serializable read-only views
//! - [`config`]: construction-time settings
//! - [`shared`]: a locked handle for multi-threaded hosts
//!
//! # Game Rules
//!
//! - Pieces spawn at the top center and fall one row per drop interval.
//! - Rotation has no wall kicks; a rotation that collides is undone.
//! - Each sweep scores 10, 20, 40, ... for its first, second, third row.
//! - A piece that spawns into occupied cells wipes the arena and the score.
//!
//! # Example
//!
//! ```
//! use tetris_arena_core::{DropOutcome, Session};
//! use tetris_arena_types::GameAction;
//!
//! let mut game = Session::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//!
//! // One second of play at the default interval triggers a drop
//! assert_eq!(game.tick(1000), Some(DropOutcome::Fell));
//! assert_eq!(game.score(), 0);
//! ```

pub mod collision;
pub mod config;
pub mod grid;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shared;
pub mod snapshot;

pub use tetris_arena_types as types;

// Re-export commonly used types for convenience
pub use collision::{collides, merge};
pub use config::{ConfigError, SessionConfig};
pub use grid::Grid;
pub use pieces::{create_piece, create_piece_named, rotate, PieceMatrix};
pub use rng::{ShapePicker, SimpleRng};
pub use scoring::{sweep, SweepResult};
pub use session::{DropOutcome, LockEvent, Piece, Session};
pub use shared::SharedSession;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
