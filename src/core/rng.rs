//! RNG module - seeded target generation
//!
//! A small LCG keeps target selection deterministic under a seed, which makes
//! session tests reproducible. No cryptographic strength is needed here; the
//! target only has ten possible values.

use crate::types::{TARGET_MAX, TARGET_MIN};

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
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // The low bits of an LCG are weak; use the high bits instead.
        ((self.next_u32() >> 16) as u64 * max as u64 >> 16) as u32
    }

    /// Draw a target value, uniform over `TARGET_MIN..=TARGET_MAX`.
    pub fn draw_target(&mut self) -> u8 {
        let span = (TARGET_MAX - TARGET_MIN + 1) as u32;
        TARGET_MIN + self.next_range(span) as u8
    }

    /// Current internal state (for restarting with the same sequence).
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
