//! Core library entry for the `luhngen` CLI.
//!
//! The checksum engine lives in [`luhn`]; the bounded generate-and-verify
//! loop lives in [`search`]. Randomness and verification are reached only
//! through the traits in [`ports`], so both can be swapped for the
//! deterministic adapters in [`adapters::scripted`].

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod domain;
pub mod error;
pub mod logging;
pub mod luhn;
pub mod persist;
pub mod ports;
pub mod search;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    logging::init_logging();
    commands::dispatch(&cli.command)
}
