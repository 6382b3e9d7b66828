//! RNG module - injectable randomness for tile spawning
//!
//! The engine never reaches for a global generator. It draws through the
//! [`TileRng`] trait, so tests can script exact cell/value choices and a seed
//! fully determines a game.
//!
//! [`SimpleRng`] is the default source: a small LCG that is fast, seedable and
//! has no dependencies.

/// Source of uniform random indices used by the engine.
pub trait TileRng {
    /// Uniform value in `[0, max)`. Callers never pass `max == 0`.
    fn next_range(&mut self, max: u32) -> u32;
}

impl<R: TileRng + ?Sized> TileRng for &mut R {
    fn next_range(&mut self, max: u32) -> u32 {
        (**self).next_range(max)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce a degenerate first draw
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

    /// Current internal state (the seed of the remaining stream)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl TileRng for SimpleRng {
    fn next_range(&mut self, max: u32) -> u32 {
        if max <= 1 {
            return 0;
        }
        // Multiply-shift keeps the high bits. The low bits of a power-of-two
        // LCG cycle with a tiny period (bit 0 simply alternates).
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
