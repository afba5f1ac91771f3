//! `luhngen check` and `luhngen digit` commands.

use crate::domain::ValidationOutcome;
use crate::luhn;

/// Execute the `check` command.
///
/// # Errors
///
/// Returns an error string when the digits fail the Luhn rule.
pub fn run_check(digits: &str) -> Result<(), String> {
    match luhn::validate(digits) {
        ValidationOutcome::Valid => {
            println!("valid");
            Ok(())
        }
        ValidationOutcome::Invalid => {
            println!("invalid");
            Err(format!("{digits:?} does not pass the Luhn check"))
        }
    }
}

/// Execute the `digit` command.
///
/// # Errors
///
/// Returns an error string when the input has no digits.
pub fn run_digit(partial: &str) -> Result<(), String> {
    if luhn::sanitize(partial).is_empty() {
        return Err(format!("{partial:?} contains no digits"));
    }
    println!("{}", luhn::compute_check_digit(partial));
    Ok(())
}
