//! Bounded candidate search loop.
//!
//! Each iteration generates one candidate, checks it against the Luhn rule,
//! draws an expiry tag, and asks the verifier. Every iteration spends exactly
//! one attempt regardless of how it ends. The loop stops once `count` records
//! are confirmed or `max_attempts` is spent, whichever comes first.

use std::time::Duration;

use crate::context::SearchContext;
use crate::domain::{Candidate, ConfirmedRecord, ExpiryTag, Prefix};
use crate::error::{Error, Result};
use crate::luhn;
use crate::ports::{RandomSource, VerifyOutcome};

/// Shortest accepted target length; anything shorter would leave nothing to mask.
pub const MIN_TARGET_LENGTH: usize = 13;
/// Longest accepted target length.
pub const MAX_TARGET_LENGTH: usize = 64;

/// Tunables for one search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    /// Total digits per candidate, check digit included.
    pub target_length: usize,
    /// Number of confirmed records wanted.
    pub count: usize,
    /// Attempt budget shared by every outcome.
    pub max_attempts: u32,
    /// First year of the expiry window.
    pub base_year: u16,
    /// Number of years in the expiry window.
    pub year_window: u16,
    /// Upper bound on a single verification call.
    pub verify_timeout: Duration,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            target_length: 16,
            count: 5,
            max_attempts: 100,
            base_year: 2026,
            year_window: 6,
            verify_timeout: Duration::from_secs(5),
        }
    }
}

impl SearchParams {
    /// Checks the parameters against `prefix` before any generation happens.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PrefixTooLong`] when the prefix leaves no room for the
    /// check digit, and [`Error::InvalidParams`] for out-of-range values.
    pub fn check(&self, prefix: &Prefix) -> Result<()> {
        if !(MIN_TARGET_LENGTH..=MAX_TARGET_LENGTH).contains(&self.target_length) {
            return Err(Error::InvalidParams(format!(
                "target length {} is not in {MIN_TARGET_LENGTH}..={MAX_TARGET_LENGTH}",
                self.target_length
            )));
        }
        if prefix.len() >= self.target_length {
            return Err(Error::PrefixTooLong {
                prefix_len: prefix.len(),
                target_length: self.target_length,
            });
        }
        if self.year_window == 0 {
            return Err(Error::InvalidParams("year window must be at least 1".into()));
        }
        if self.base_year.checked_add(self.year_window).is_none() {
            return Err(Error::InvalidParams(format!(
                "year window {} from {} overflows",
                self.year_window, self.base_year
            )));
        }
        Ok(())
    }
}

/// What a search run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchReport {
    /// Confirmed records in discovery order.
    pub records: Vec<ConfirmedRecord>,
    /// Iterations run; never more than `max_attempts`.
    pub attempts: u32,
    /// Candidates that failed the checksum.
    pub checksum_failures: u32,
    /// Candidates the verifier answered for but did not accept.
    pub rejections: u32,
    /// Verifier failures, timeouts included.
    pub transport_errors: u32,
    /// Number of records that was asked for.
    pub requested: usize,
}

impl SearchReport {
    /// True when the attempt budget ran out before `requested` records were found.
    #[must_use]
    pub fn budget_exhausted(&self) -> bool {
        self.records.len() < self.requested
    }
}

/// Builds one candidate: prefix, random filler digits, then the check digit.
#[must_use]
pub fn generate_candidate(
    prefix: &Prefix,
    target_length: usize,
    random: &mut dyn RandomSource,
) -> Candidate {
    let mut digits = luhn::sanitize(prefix.as_str());
    let filler = target_length.saturating_sub(prefix.len() + 1);
    digits.extend((0..filler).map(|_| random.digit()));
    digits.push(luhn::compute_check_digit_of(&digits));
    Candidate::new(digits.iter().map(|d| char::from(b'0' + d)).collect())
}

/// Draws a month in `1..=12` and a year in `base_year..base_year + year_window`.
///
/// # Errors
///
/// Returns [`Error::InvalidParams`] if the drawn year does not fit.
pub fn draw_expiry(
    random: &mut dyn RandomSource,
    base_year: u16,
    year_window: u16,
) -> Result<ExpiryTag> {
    let month = u8::try_from(random.below(12) + 1)
        .map_err(|_| Error::InvalidParams("month out of range".into()))?;
    let offset = u16::try_from(random.below(u32::from(year_window.max(1))))
        .map_err(|_| Error::InvalidParams("year offset out of range".into()))?;
    let year = base_year
        .checked_add(offset)
        .ok_or_else(|| Error::InvalidParams(format!("year {base_year}+{offset} overflows")))?;
    ExpiryTag::new(month, year)
}

/// Runs the bounded search for `prefix`.
///
/// Running out of attempts is a normal outcome; check
/// [`SearchReport::budget_exhausted`].
///
/// # Errors
///
/// Returns an error only when `params` are unusable for `prefix`; nothing is
/// generated in that case.
pub async fn search(
    ctx: &mut SearchContext,
    prefix: &Prefix,
    params: &SearchParams,
) -> Result<SearchReport> {
    params.check(prefix)?;
    tracing::info!(
        %prefix,
        target_length = params.target_length,
        count = params.count,
        max_attempts = params.max_attempts,
        "starting search"
    );

    let mut report = SearchReport { requested: params.count, ..SearchReport::default() };

    while report.records.len() < params.count && report.attempts < params.max_attempts {
        report.attempts += 1;

        let candidate = generate_candidate(prefix, params.target_length, ctx.random.as_mut());
        if !candidate.is_valid() {
            report.checksum_failures += 1;
            tracing::debug!(attempt = report.attempts, "candidate failed checksum");
            continue;
        }

        let expiry = draw_expiry(ctx.random.as_mut(), params.base_year, params.year_window)?;
        let outcome =
            tokio::time::timeout(params.verify_timeout, ctx.verifier.verify(&candidate, &expiry))
                .await
                .unwrap_or_else(|_| {
                    VerifyOutcome::TransportError(format!(
                        "verification timed out after {:?}",
                        params.verify_timeout
                    ))
                });

        match outcome {
            VerifyOutcome::Confirmed => {
                report.records.push(ConfirmedRecord::from_candidate(&candidate, expiry));
            }
            VerifyOutcome::Rejected(status) => {
                report.rejections += 1;
                tracing::debug!(attempt = report.attempts, %status, "candidate rejected");
            }
            VerifyOutcome::TransportError(message) => {
                report.transport_errors += 1;
                tracing::warn!(attempt = report.attempts, error = %message, "verifier failed");
            }
        }
    }

    tracing::info!(
        found = report.records.len(),
        attempts = report.attempts,
        exhausted = report.budget_exhausted(),
        "search finished"
    );
    Ok(report)
}
