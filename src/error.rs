//! Error type shared by the library and the CLI boundary.

use std::path::PathBuf;

/// Errors surfaced by `luhngen` operations.
///
/// Running out of attempts is not an error; see
/// [`SearchReport::budget_exhausted`](crate::search::SearchReport::budget_exhausted).
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The prefix is not six or more ASCII digits.
    #[error("prefix must contain only digits and be at least 6 long, got {0:?}")]
    InvalidPrefix(String),
    /// The prefix leaves no room for the check digit.
    #[error("prefix of length {prefix_len} is too long for target length {target_length}")]
    PrefixTooLong {
        /// Length of the rejected prefix.
        prefix_len: usize,
        /// Requested candidate length.
        target_length: usize,
    },
    /// Search parameters are out of range.
    #[error("invalid search parameters: {0}")]
    InvalidParams(String),
    /// A configuration file could not be parsed.
    #[error("failed to parse config {path}: {message}")]
    Config {
        /// Path of the config file.
        path: PathBuf,
        /// Parser message.
        message: String,
    },
    /// Filesystem access failed.
    #[error("{action} {path}: {source}")]
    Io {
        /// What was being attempted, e.g. "failed to write".
        action: &'static str,
        /// Path involved.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The async runtime could not be started.
    #[error("failed to start runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_too_long_message_names_both_lengths() {
        let err = Error::PrefixTooLong { prefix_len: 16, target_length: 16 };
        let msg = err.to_string();
        assert!(msg.contains("16"));
        assert!(msg.contains("too long"));
    }

    #[test]
    fn io_error_keeps_source() {
        let err = Error::Io {
            action: "failed to write",
            path: PathBuf::from("/nope/out.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("failed to write /nope/out.txt"));
    }
}
