//! Scripted adapters for the `Verifier` port.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::{Candidate, ExpiryTag};
use crate::ports::{Verifier, VerifyFuture, VerifyOutcome};

/// Answers with a fixed cycle of outcomes and counts calls.
pub struct ScriptedVerifier {
    outcomes: Vec<VerifyOutcome>,
    calls: AtomicUsize,
}

impl ScriptedVerifier {
    /// Cycles through `outcomes`. An empty list behaves like a verifier that
    /// always reports a transport error.
    #[must_use]
    pub fn new(outcomes: Vec<VerifyOutcome>) -> Self {
        Self { outcomes, calls: AtomicUsize::new(0) }
    }

    /// Always answers `outcome`.
    #[must_use]
    pub fn always(outcome: VerifyOutcome) -> Self {
        Self::new(vec![outcome])
    }

    /// Number of `verify` calls seen so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Verifier for ScriptedVerifier {
    fn verify<'a>(&'a self, _candidate: &'a Candidate, _expiry: &'a ExpiryTag) -> VerifyFuture<'a> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        let outcome = if self.outcomes.is_empty() {
            VerifyOutcome::TransportError("no scripted outcome".into())
        } else {
            self.outcomes[n % self.outcomes.len()].clone()
        };
        Box::pin(async move { outcome })
    }
}

/// Never answers. Used to exercise the verification timeout.
pub struct HangingVerifier;

impl Verifier for HangingVerifier {
    fn verify<'a>(&'a self, _candidate: &'a Candidate, _expiry: &'a ExpiryTag) -> VerifyFuture<'a> {
        Box::pin(std::future::pending())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn cycles_outcomes_and_counts_calls() {
        let verifier = ScriptedVerifier::new(vec![
            VerifyOutcome::Confirmed,
            VerifyOutcome::Rejected("Dead".into()),
        ]);
        let candidate = Candidate::new("4111111111111111".into());
        let expiry = ExpiryTag::new(5, 2028).unwrap();

        assert_eq!(verifier.verify(&candidate, &expiry).await, VerifyOutcome::Confirmed);
        assert_eq!(
            verifier.verify(&candidate, &expiry).await,
            VerifyOutcome::Rejected("Dead".into())
        );
        assert_eq!(verifier.verify(&candidate, &expiry).await, VerifyOutcome::Confirmed);
        assert_eq!(verifier.calls(), 3);
    }
}
