//! Verification port deciding whether a checksum-valid candidate is kept.

use std::future::Future;
use std::pin::Pin;

use crate::domain::{Candidate, ExpiryTag};

/// Boxed future type alias used by [`Verifier`] to keep the trait dyn-compatible.
pub type VerifyFuture<'a> = Pin<Box<dyn Future<Output = VerifyOutcome> + Send + 'a>>;

/// What a verifier reported for one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// The candidate is accepted and becomes a record.
    Confirmed,
    /// The verifier answered but did not accept; carries the reported status.
    Rejected(String),
    /// The verifier could not be reached or failed; carries the error message.
    TransportError(String),
}

/// Confirms or rejects checksum-valid candidates.
pub trait Verifier: Send + Sync {
    /// Checks one candidate together with its expiry tag.
    ///
    /// Implementations report failures through [`VerifyOutcome::TransportError`]
    /// rather than panicking; the search loop treats every non-confirmation
    /// as a spent attempt.
    fn verify<'a>(&'a self, candidate: &'a Candidate, expiry: &'a ExpiryTag) -> VerifyFuture<'a>;
}

impl<T: Verifier + ?Sized> Verifier for std::sync::Arc<T> {
    fn verify<'a>(&'a self, candidate: &'a Candidate, expiry: &'a ExpiryTag) -> VerifyFuture<'a> {
        (**self).verify(candidate, expiry)
    }
}
