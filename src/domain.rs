//! Domain types: prefixes, candidates, expiry tags, and confirmed records.

use std::fmt;

use crate::error::{Error, Result};
use crate::luhn;

/// Minimum number of digits a prefix must carry.
pub const MIN_PREFIX_LEN: usize = 6;

/// Number of leading digits kept visible when a record is masked.
pub const VISIBLE_DIGITS: usize = 12;

/// Token that replaces every digit after [`VISIBLE_DIGITS`].
pub const MASK_TOKEN: &str = "xxxx";

/// Result of checking digits against the Luhn rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The digits satisfy the checksum.
    Valid,
    /// The digits do not satisfy the checksum.
    Invalid,
}

/// Leading digits shared by every generated candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefix(String);

impl Prefix {
    /// Accepts `raw` only when it is six or more ASCII digits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPrefix`] for anything else, including
    /// surrounding whitespace.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.len() >= MIN_PREFIX_LEN && raw.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(raw.to_owned()))
        } else {
            Err(Error::InvalidPrefix(raw.to_owned()))
        }
    }

    /// The prefix digits.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits in the prefix.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; a parsed prefix has at least [`MIN_PREFIX_LEN`] digits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One generated digit sequence, checksum digit included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate(String);

impl Candidate {
    /// Wraps already-generated digits.
    #[must_use]
    pub fn new(digits: String) -> Self {
        Self(digits)
    }

    /// The full digit sequence.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the digits pass the Luhn rule.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        luhn::is_valid(&self.0)
    }

    /// First [`VISIBLE_DIGITS`] digits followed by [`MASK_TOKEN`].
    ///
    /// Shorter sequences are returned unmasked.
    #[must_use]
    pub fn masked(&self) -> String {
        match self.0.get(..VISIBLE_DIGITS) {
            Some(head) if self.0.len() > VISIBLE_DIGITS => format!("{head}{MASK_TOKEN}"),
            _ => self.0.clone(),
        }
    }
}

/// Generated month/year pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryTag {
    month: u8,
    year: u16,
}

impl ExpiryTag {
    /// Builds a tag; `month` must be in `1..=12`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParams`] when the month is out of range.
    pub fn new(month: u8, year: u16) -> Result<Self> {
        if (1..=12).contains(&month) {
            Ok(Self { month, year })
        } else {
            Err(Error::InvalidParams(format!("month {month} is not in 1..=12")))
        }
    }

    /// Month, 1 through 12.
    #[must_use]
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Full four-digit year.
    #[must_use]
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Two-digit month, e.g. `"03"`.
    #[must_use]
    pub fn month_2(&self) -> String {
        format!("{:02}", self.month)
    }

    /// Two-digit year offset, e.g. `"27"` for 2027.
    #[must_use]
    pub fn year_2(&self) -> String {
        format!("{:02}", self.year % 100)
    }
}

impl fmt::Display for ExpiryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.month_2(), self.year_2())
    }
}

/// A candidate accepted by the active verifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmedRecord {
    /// Identifier with everything after the visible digits masked.
    pub masked_id: String,
    /// Expiry tag drawn for this candidate.
    pub expiry: ExpiryTag,
}

impl ConfirmedRecord {
    /// Builds a record from an accepted candidate, masking it.
    #[must_use]
    pub fn from_candidate(candidate: &Candidate, expiry: ExpiryTag) -> Self {
        Self { masked_id: candidate.masked(), expiry }
    }

    /// Persisted form: `<masked>|<MM/YY>`.
    #[must_use]
    pub fn to_line(&self) -> String {
        format!("{}|{}", self.masked_id, self.expiry)
    }
}
