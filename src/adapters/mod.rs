//! Adapter implementations of the port traits.
//!
//! - `live`: real randomness and the local-only verifier used by the CLI.
//! - `scripted`: deterministic stand-ins for tests.

pub mod live;
pub mod scripted;
