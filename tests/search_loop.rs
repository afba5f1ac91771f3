//! Search loop integration tests driven through scripted adapters.
//!
//! Covers the attempt and record bounds, verifier outcomes, timeouts, and
//! the shape of generated identifiers.

use std::sync::Arc;
use std::time::Duration;

use luhngen::adapters::live::FastRandSource;
use luhngen::adapters::scripted::{HangingVerifier, ScriptedSource, ScriptedVerifier};
use luhngen::context::SearchContext;
use luhngen::domain::{Prefix, MASK_TOKEN, VISIBLE_DIGITS};
use luhngen::luhn;
use luhngen::ports::VerifyOutcome;
use luhngen::search::{generate_candidate, search, SearchParams};

fn prefix() -> Prefix {
    Prefix::parse("411111").unwrap()
}

fn params(count: usize, max_attempts: u32) -> SearchParams {
    SearchParams { count, max_attempts, ..SearchParams::default() }
}

#[tokio::test]
async fn always_confirm_finds_exactly_requested_count() {
    let verifier = Arc::new(ScriptedVerifier::always(VerifyOutcome::Confirmed));
    let mut ctx = SearchContext::new(Box::new(FastRandSource::new()), Box::new(verifier.clone()));

    let report = search(&mut ctx, &prefix(), &params(3, 100)).await.unwrap();

    assert_eq!(report.records.len(), 3);
    assert!(report.attempts <= 100);
    assert_eq!(verifier.calls(), 3);
    assert!(!report.budget_exhausted());
}

#[tokio::test]
async fn always_reject_spends_whole_budget() {
    let verifier = Arc::new(ScriptedVerifier::always(VerifyOutcome::Rejected("Dead".into())));
    let mut ctx = SearchContext::new(Box::new(FastRandSource::new()), Box::new(verifier.clone()));

    let report = search(&mut ctx, &prefix(), &params(3, 10)).await.unwrap();

    assert!(report.records.is_empty());
    assert_eq!(report.attempts, 10);
    assert_eq!(report.rejections, 10);
    assert_eq!(verifier.calls(), 10);
    assert!(report.budget_exhausted());
}

#[tokio::test]
async fn bounds_hold_for_mixed_outcomes() {
    let outcomes = vec![
        VerifyOutcome::Rejected("Dead".into()),
        VerifyOutcome::TransportError("connection reset".into()),
        VerifyOutcome::Confirmed,
    ];
    for (count, max_attempts) in [(0, 5), (1, 1), (2, 4), (5, 9), (10, 30), (4, 100)] {
        let mut ctx = SearchContext::new(
            Box::new(FastRandSource::with_seed(u64::from(max_attempts))),
            Box::new(ScriptedVerifier::new(outcomes.clone())),
        );
        let report = search(&mut ctx, &prefix(), &params(count, max_attempts)).await.unwrap();

        assert!(report.records.len() <= count);
        assert!(report.attempts <= max_attempts);
        assert_eq!(
            report.attempts,
            u32::try_from(report.records.len()).unwrap()
                + report.checksum_failures
                + report.rejections
                + report.transport_errors
        );
    }
}

#[tokio::test]
async fn transport_errors_do_not_abort_the_loop() {
    let verifier = ScriptedVerifier::new(vec![
        VerifyOutcome::TransportError("connection refused".into()),
        VerifyOutcome::TransportError("connection refused".into()),
        VerifyOutcome::Confirmed,
    ]);
    let mut ctx = SearchContext::new(Box::new(ScriptedSource::new(vec![2, 7, 1, 8])), Box::new(verifier));

    let report = search(&mut ctx, &prefix(), &params(2, 100)).await.unwrap();

    assert_eq!(report.records.len(), 2);
    assert_eq!(report.transport_errors, 4);
    assert_eq!(report.attempts, 6);
}

#[tokio::test]
async fn hanging_verifier_times_out_per_attempt() {
    let mut ctx =
        SearchContext::new(Box::new(ScriptedSource::constant(4)), Box::new(HangingVerifier));
    let params = SearchParams {
        count: 1,
        max_attempts: 3,
        verify_timeout: Duration::from_millis(10),
        ..SearchParams::default()
    };

    let report = search(&mut ctx, &prefix(), &params).await.unwrap();

    assert!(report.records.is_empty());
    assert_eq!(report.attempts, 3);
    assert_eq!(report.transport_errors, 3);
}

#[tokio::test]
async fn records_keep_discovery_order_and_are_masked() {
    let mut ctx = SearchContext::new(
        Box::new(ScriptedSource::new((0..97).collect())),
        Box::new(ScriptedVerifier::always(VerifyOutcome::Confirmed)),
    );

    let report = search(&mut ctx, &prefix(), &params(5, 100)).await.unwrap();

    // Replaying the same script must produce the same identifiers in order.
    let mut replay = ScriptedSource::new((0..97).collect());
    for record in &report.records {
        let candidate = generate_candidate(&prefix(), 16, &mut replay);
        // two draws for the expiry tag follow each candidate
        let _ = luhngen::search::draw_expiry(&mut replay, 2026, 6).unwrap();
        assert_eq!(record.masked_id, candidate.masked());
        assert_eq!(record.masked_id.len(), VISIBLE_DIGITS + MASK_TOKEN.len());
        assert!(record.masked_id.ends_with(MASK_TOKEN));
    }
}

#[test]
fn generated_candidates_are_sixteen_valid_digits() {
    let mut random = FastRandSource::with_seed(2026);
    for _ in 0..200 {
        let candidate = generate_candidate(&prefix(), 16, &mut random);
        let digits = candidate.as_str();
        assert_eq!(digits.len(), 16);
        assert!(digits.starts_with("411111"));
        assert!(luhn::is_valid(digits));
    }
}

#[test]
fn check_digit_round_trip_holds_for_random_partials() {
    let mut random = FastRandSource::with_seed(99);
    for len in 1..30 {
        let partial: String = (0..len)
            .map(|_| char::from(b'0' + luhngen::ports::RandomSource::digit(&mut random)))
            .collect();
        let full = format!("{partial}{}", luhn::compute_check_digit(&partial));
        assert!(luhn::is_valid(&full), "{full} should be valid");
    }
}
