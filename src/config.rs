//! Layered search configuration.
//!
//! Values resolve as built-in defaults, then an optional YAML file, then
//! command-line flags. Every field is optional at each layer.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::search::SearchParams;

/// File the CLI writes confirmed records to when no output is configured.
pub const DEFAULT_OUTPUT: &str = "confirmed.txt";

/// One configuration layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Total digits per candidate, check digit included.
    pub target_length: Option<usize>,
    /// Number of confirmed records wanted.
    pub count: Option<usize>,
    /// Attempt budget shared by every outcome.
    pub max_attempts: Option<u32>,
    /// First year of the expiry window.
    pub base_year: Option<u16>,
    /// Number of years in the expiry window.
    pub year_window: Option<u16>,
    /// Per-candidate verification timeout in milliseconds.
    pub verify_timeout_ms: Option<u64>,
    /// Where confirmed records are written.
    pub output: Option<PathBuf>,
}

impl SearchConfig {
    /// Reads a YAML config file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and [`Error::Config`]
    /// if it is not a valid config document.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            action: "failed to read config",
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|message| Error::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parses a config layer from YAML text. An empty document is an empty layer.
    ///
    /// # Errors
    ///
    /// Returns the parser message when the text is not a valid config document.
    pub fn from_yaml(content: &str) -> std::result::Result<Self, String> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }

    /// Returns `self` with every field set in `top` replaced by `top`'s value.
    #[must_use]
    pub fn overlay(self, top: Self) -> Self {
        Self {
            target_length: top.target_length.or(self.target_length),
            count: top.count.or(self.count),
            max_attempts: top.max_attempts.or(self.max_attempts),
            base_year: top.base_year.or(self.base_year),
            year_window: top.year_window.or(self.year_window),
            verify_timeout_ms: top.verify_timeout_ms.or(self.verify_timeout_ms),
            output: top.output.or(self.output),
        }
    }

    /// Resolves search parameters, falling back to [`SearchParams::default`].
    #[must_use]
    pub fn params(&self) -> SearchParams {
        let defaults = SearchParams::default();
        SearchParams {
            target_length: self.target_length.unwrap_or(defaults.target_length),
            count: self.count.unwrap_or(defaults.count),
            max_attempts: self.max_attempts.unwrap_or(defaults.max_attempts),
            base_year: self.base_year.unwrap_or(defaults.base_year),
            year_window: self.year_window.unwrap_or(defaults.year_window),
            verify_timeout: self
                .verify_timeout_ms
                .map_or(defaults.verify_timeout, Duration::from_millis),
        }
    }

    /// Resolved output path.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }
}
