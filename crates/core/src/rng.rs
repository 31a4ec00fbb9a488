//! RNG module - uniform random shape selection
//!
//! Each spawn picks a shape uniformly from the configured alphabet. There is no
//! bag: the same shape may come up any number of times in a row.
//!
//! The generator is a small seeded LCG so games are reproducible from a seed.

use arrayvec::ArrayVec;

use crate::types::ShapeId;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Scales the full 32-bit output instead of taking a remainder, since the
    /// low bits of an LCG cycle quickly.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Uniform picker over a set of shapes
#[derive(Debug, Clone)]
pub struct ShapePicker {
    /// Distinct shapes, in first-seen order
    alphabet: ArrayVec<ShapeId, 7>,
    rng: SimpleRng,
}

impl ShapePicker {
    /// Picker over `shapes` (duplicates ignored). An empty list means all seven.
    pub fn new(shapes: &[ShapeId], seed: u32) -> Self {
        let mut alphabet = ArrayVec::new();
        for &shape in shapes {
            if !alphabet.contains(&shape) {
                alphabet.push(shape);
            }
        }
        if alphabet.is_empty() {
            alphabet.extend(ShapeId::ALL);
        }

        Self {
            alphabet,
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next shape
    pub fn pick(&mut self) -> ShapeId {
        let idx = self.rng.next_range(self.alphabet.len() as u32) as usize;
        self.alphabet[idx]
    }

    pub fn alphabet(&self) -> &[ShapeId] {
        &self.alphabet
    }
}

impl Default for ShapePicker {
    fn default() -> Self {
        Self::new(&ShapeId::ALL, 1)
    }
}
