//! Tetris arena (workspace facade crate).
//!
//! Exposes `tetris_arena::{core, types}` while the implementation lives in
//! dedicated crates under `crates/`. [`soak`] is the headless host behind the
//! default binary.

pub use tetris_arena_core as core;
pub use tetris_arena_types as types;

pub mod soak;
