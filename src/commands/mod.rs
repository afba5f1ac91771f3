//! Command dispatch and handlers.

pub mod check;
pub mod search;

use crate::cli::Command;

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    match command {
        Command::Search(args) => search::run(args),
        Command::Check { digits } => check::run_check(digits),
        Command::Digit { partial } => check::run_digit(partial),
    }
}
