//! Luhn (mod-10) checksum engine.
//!
//! All functions sanitize their input first: any character that is not an
//! ASCII digit is dropped, so `"4111-1111"` and `"41111111"` behave the same.

use crate::domain::ValidationOutcome;

/// Strips every non-digit character and returns the remaining digit values.
#[must_use]
pub fn sanitize(input: &str) -> Vec<u8> {
    input.bytes().filter(u8::is_ascii_digit).map(|b| b - b'0').collect()
}

/// Weighted sum of `digits` scanned right to left.
///
/// `double_first` selects whether the rightmost digit is doubled.
fn weighted_sum(digits: &[u8], double_first: bool) -> u32 {
    let mut double = double_first;
    let mut sum = 0u32;
    for &d in digits.iter().rev() {
        let mut value = u32::from(d);
        if double {
            value *= 2;
            if value > 9 {
                value -= 9;
            }
        }
        sum += value;
        double = !double;
    }
    sum
}

/// Computes the digit that makes `partial` followed by that digit Luhn-valid.
///
/// The check digit takes scan position 0 once appended, so the rightmost
/// digit of `partial` is the first one doubled.
#[must_use]
pub fn compute_check_digit(partial: &str) -> u8 {
    compute_check_digit_of(&sanitize(partial))
}

/// Same as [`compute_check_digit`] over already-sanitized digit values.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn compute_check_digit_of(digits: &[u8]) -> u8 {
    let sum = weighted_sum(digits, true);
    // sum % 10 < 10, so the result always fits in a digit
    ((10 - sum % 10) % 10) as u8
}

/// Returns whether `full` already satisfies the Luhn rule.
///
/// An input with no digits at all is invalid.
#[must_use]
pub fn is_valid(full: &str) -> bool {
    is_valid_digits(&sanitize(full))
}

/// Same as [`is_valid`] over already-sanitized digit values.
#[must_use]
pub fn is_valid_digits(digits: &[u8]) -> bool {
    !digits.is_empty() && weighted_sum(digits, false) % 10 == 0
}

/// Tagged form of [`is_valid`].
#[must_use]
pub fn validate(full: &str) -> ValidationOutcome {
    if is_valid(full) {
        ValidationOutcome::Valid
    } else {
        ValidationOutcome::Invalid
    }
}
