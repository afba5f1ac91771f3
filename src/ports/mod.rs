//! Port traits defining external boundaries.
//!
//! Each trait is a seam between the search loop and something it must not
//! own directly (randomness, verification). Implementations live in
//! `src/adapters/`.

pub mod random;
pub mod verifier;

pub use random::RandomSource;
pub use verifier::{Verifier, VerifyFuture, VerifyOutcome};
