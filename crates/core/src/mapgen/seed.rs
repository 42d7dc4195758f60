//! Deterministic Mulberry32 stream shared by every generation stage.

const MULBERRY_INCREMENT: u32 = 0x6D2B_79F5;
const U32_RANGE: f64 = 4_294_967_296.0;

/// Single sequential pseudo-random stream. Every stage borrows it mutably in a
/// fixed order, so one seed always yields one layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeededRandom {
    state: u32,
}

impl SeededRandom {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_add(MULBERRY_INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        f64::from(t ^ (t >> 14)) / U32_RANGE
    }

    pub fn range_f64(&mut self, min_value: f64, max_value: f64) -> f64 {
        min_value + self.next_f64() * (max_value - min_value)
    }

    /// Uniform integer in `min_value..=max_value`.
    pub fn int_inclusive(&mut self, min_value: u32, max_value: u32) -> u32 {
        debug_assert!(min_value <= max_value);
        let span = f64::from(max_value - min_value) + 1.0;
        let offset = (self.next_f64() * span).floor() as u32;
        min_value.saturating_add(offset).min(max_value)
    }

    /// Uniform index into a collection of `len` elements. `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        let picked = (self.next_f64() * len as f64).floor() as usize;
        picked.min(len.saturating_sub(1))
    }
}
