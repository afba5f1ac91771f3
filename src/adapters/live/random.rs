//! Live adapter for the `RandomSource` port.

use crate::ports::RandomSource;

/// Random source backed by a `fastrand` generator.
///
/// Not suitable for anything that needs cryptographic randomness.
pub struct FastRandSource {
    rng: fastrand::Rng,
}

impl FastRandSource {
    /// Creates a source seeded from the OS.
    #[must_use]
    pub fn new() -> Self {
        Self { rng: fastrand::Rng::new() }
    }

    /// Creates a reproducible source.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: fastrand::Rng::with_seed(seed) }
    }
}

impl Default for FastRandSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for FastRandSource {
    fn below(&mut self, bound: u32) -> u32 {
        self.rng.u32(0..bound.max(1))
    }
}
