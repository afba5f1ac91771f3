//! Live adapters used by the CLI.

pub mod random;
pub mod verifier;

pub use random::FastRandSource;
pub use verifier::LocalOnlyVerifier;
