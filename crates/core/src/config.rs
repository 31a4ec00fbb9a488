//! Session configuration
//!
//! Fixed at construction. Every field has a default, so hosts can deserialize
//! a partial document and only override what they care about.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pieces::create_piece;
use crate::types::{ShapeId, DEFAULT_DROP_INTERVAL_MS, DEFAULT_HEIGHT, DEFAULT_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Arena columns
    pub width: usize,
    /// Arena rows
    pub height: usize,
    /// Time units between gravity drops
    pub drop_interval_ms: u32,
    /// Shapes that may spawn
    pub shapes: Vec<ShapeId>,
    /// Seed for shape selection
    pub seed: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            drop_interval_ms: DEFAULT_DROP_INTERVAL_MS,
            shapes: ShapeId::ALL.to_vec(),
            seed: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid width must be at least 1")]
    ZeroWidth,
    #[error("grid height must be at least 1")]
    ZeroHeight,
    #[error("drop interval must be at least 1")]
    ZeroDropInterval,
    #[error("shape alphabet is empty")]
    NoShapes,
    #[error("{width}x{height} grid cannot hold shape {shape:?} ({piece_size}x{piece_size})")]
    GridTooSmall {
        width: usize,
        height: usize,
        shape: ShapeId,
        piece_size: usize,
    },
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if self.drop_interval_ms == 0 {
            return Err(ConfigError::ZeroDropInterval);
        }
        if self.shapes.is_empty() {
            return Err(ConfigError::NoShapes);
        }
        for &shape in &self.shapes {
            let piece_size = create_piece(shape).size();
            if piece_size > self.width || piece_size > self.height {
                return Err(ConfigError::GridTooSmall {
                    width: self.width,
                    height: self.height,
                    shape,
                    piece_size,
                });
            }
        }
        Ok(())
    }
}
