//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser for `luhngen`.
#[derive(Debug, Parser)]
#[command(name = "luhngen", version, about = "Generate and validate Luhn checksum identifiers")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate checksum-valid identifiers for a prefix and save them.
    Search(SearchArgs),
    /// Check whether a digit string passes the Luhn rule.
    Check {
        /// Digits to check; non-digit characters are ignored.
        digits: String,
    },
    /// Print the check digit for a partial digit string.
    Digit {
        /// Digits without the check digit; non-digit characters are ignored.
        partial: String,
    },
}

/// Arguments for `luhngen search`.
#[derive(Debug, Clone, Args)]
pub struct SearchArgs {
    /// Leading digits, at least six.
    pub prefix: String,
    /// Number of records to collect.
    #[arg(short = 'n', long)]
    pub count: Option<usize>,
    /// Attempt budget.
    #[arg(short = 'm', long)]
    pub max_attempts: Option<u32>,
    /// Total digits per identifier, check digit included.
    #[arg(short = 'l', long)]
    pub length: Option<usize>,
    /// File to write confirmed records to.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// YAML config file with search defaults.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Seed for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,
}
