//! Deterministic adapters for tests and reproducible runs.

pub mod random;
pub mod verifier;

pub use random::ScriptedSource;
pub use verifier::{HangingVerifier, ScriptedVerifier};
