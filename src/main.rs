//! Binary entrypoint for the `luhngen` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match luhngen::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
