//! Search context bundling the port trait objects.

use crate::adapters::live::{FastRandSource, LocalOnlyVerifier};
use crate::ports::{RandomSource, Verifier};

/// Bundles the ports one search run depends on.
///
/// A context is created per invocation and passed explicitly; nothing is
/// shared between runs.
pub struct SearchContext {
    /// Source of random digits and tag fields.
    pub random: Box<dyn RandomSource>,
    /// Strategy deciding which checksum-valid candidates are kept.
    pub verifier: Box<dyn Verifier>,
}

impl SearchContext {
    /// Creates a live local-only context, optionally seeded for reproducible output.
    #[must_use]
    pub fn local(seed: Option<u64>) -> Self {
        let random = match seed {
            Some(seed) => FastRandSource::with_seed(seed),
            None => FastRandSource::new(),
        };
        Self { random: Box::new(random), verifier: Box::new(LocalOnlyVerifier) }
    }

    /// Creates a context from explicit adapters.
    #[must_use]
    pub fn new(random: Box<dyn RandomSource>, verifier: Box<dyn Verifier>) -> Self {
        Self { random, verifier }
    }
}
