//! Local-only adapter for the `Verifier` port.

use crate::domain::{Candidate, ExpiryTag};
use crate::ports::{Verifier, VerifyFuture, VerifyOutcome};

/// Accepts every candidate that reached it.
///
/// The search loop only hands over checksum-valid candidates, so this
/// strategy keeps exactly those. No I/O is performed.
pub struct LocalOnlyVerifier;

impl Verifier for LocalOnlyVerifier {
    fn verify<'a>(&'a self, candidate: &'a Candidate, _expiry: &'a ExpiryTag) -> VerifyFuture<'a> {
        let outcome = if candidate.is_valid() {
            VerifyOutcome::Confirmed
        } else {
            VerifyOutcome::Rejected("checksum".into())
        };
        Box::pin(async move { outcome })
    }
}
