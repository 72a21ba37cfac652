//! Deterministic pseudo-random number generation.
//!
//! Every benchmark that draws random inputs seeds this generator with
//! [`DEFAULT_SEED`], so a benchmark's output is a pure function of its
//! iteration count. Reference outputs under `harness/expected/` are
//! captured from exactly this sequence.

/// Seed shared by every benchmark that draws random inputs.
pub const DEFAULT_SEED: u64 = 42;

/// Xorshift64* generator.
///
/// Small, fast, and trivially portable, which is what matters here:
/// the suite needs identical sequences on every platform, not
/// statistical quality.
#[derive(Debug, Clone)]
pub struct XorShift64Star {
    state: u64,
}

impl XorShift64Star {
    /// Create a generator from a seed. A zero seed is coerced to 1
    /// (a zero state would produce all zeros).
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Generator seeded with [`DEFAULT_SEED`].
    pub fn seeded() -> Self {
        Self::new(DEFAULT_SEED)
    }

    /// Next raw 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    /// Uniform draw from the inclusive range `[lo, hi]`.
    ///
    /// One `next_u64` call per draw; the slight modulo bias is
    /// irrelevant for benchmark inputs and keeps the draw sequence
    /// simple to reproduce.
    pub fn int_in(&mut self, lo: i64, hi: i64) -> i64 {
        debug_assert!(lo <= hi);
        let span = (hi - lo + 1) as u64;
        lo + (self.next_u64() % span) as i64
    }
}
