//! End-to-end railway scenarios, deterministic and free of I/O: the
//! user/subscription/fee lookup expressed on every surface the crate
//! offers, asserting that all of them agree.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use pretty_assertions::assert_eq;
use railflow::chain::{Chain, DeferredOutcomeChain};
use railflow::deferred_outcome::{self, DeferredOutcome};
use railflow::fp;
use railflow::outcome::Outcome;
use railflow::pipeline::{compose, pipe};

fn lookup_user(email: &str) -> Outcome<String, u64> {
    match email {
        "a@x.com" => Outcome::Success(1),
        _ => Outcome::Failure("no user".to_string()),
    }
}

fn lookup_subscription(user_id: u64) -> Outcome<String, u64> {
    match user_id {
        1 => Outcome::Success(42),
        _ => Outcome::Failure("no subscription".to_string()),
    }
}

#[allow(clippy::cast_precision_loss)]
fn fee(cents: u64) -> f64 {
    cents as f64 / 10.0
}

fn lookup_user_deferred(email: &str) -> DeferredOutcome<String, u64> {
    deferred_outcome::from_outcome(lookup_user(email))
}

#[test]
fn known_user_yields_fee_via_pipeline() {
    let result = pipe((
        lookup_user("a@x.com"),
        fp::outcome::map_success_to_outcome(lookup_subscription),
        fp::outcome::map_success(fee),
    ));
    assert_eq!(result, Outcome::Success(4.2));
}

#[test]
fn known_user_yields_fee_via_chain() {
    let result = Chain::of("a@x.com")
        .map_to_outcome(lookup_user)
        .map_success_to_outcome(lookup_subscription)
        .map_success(fee)
        .into_outcome();
    assert_eq!(result, Outcome::Success(4.2));
}

#[test]
fn unknown_user_short_circuits_without_invoking_later_steps() {
    let subscription_calls = Arc::new(AtomicUsize::new(0));
    let fee_calls = Arc::new(AtomicUsize::new(0));

    let counted_subscription = {
        let calls = Arc::clone(&subscription_calls);
        move |user_id: u64| {
            calls.fetch_add(1, Ordering::SeqCst);
            lookup_subscription(user_id)
        }
    };
    let counted_fee = {
        let calls = Arc::clone(&fee_calls);
        move |cents: u64| {
            calls.fetch_add(1, Ordering::SeqCst);
            fee(cents)
        }
    };

    let result = pipe((
        lookup_user("b@x.com"),
        fp::outcome::map_success_to_outcome(counted_subscription),
        fp::outcome::map_success(counted_fee),
    ));

    assert_eq!(result, Outcome::Failure("no user".to_string()));
    assert_eq!(subscription_calls.load(Ordering::SeqCst), 0);
    assert_eq!(fee_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn chain_and_pipeline_agree_on_both_inputs() {
    for email in ["a@x.com", "b@x.com"] {
        let via_pipe = pipe((
            lookup_user(email),
            fp::outcome::map_success_to_outcome(lookup_subscription),
            fp::outcome::map_success(fee),
        ));
        let via_chain = Chain::of(email)
            .map_to_outcome(lookup_user)
            .map_success_to_outcome(lookup_subscription)
            .map_success(fee)
            .into_outcome();
        assert_eq!(via_pipe, via_chain);
    }
}

#[test]
fn composed_billing_stages_are_reusable() {
    let bill = compose((
        fp::outcome::map_success_to_outcome(lookup_subscription),
        fp::outcome::map_success(fee),
    ));
    assert_eq!(bill(lookup_user("a@x.com")), Outcome::Success(4.2));

    let bill = compose((
        fp::outcome::map_success_to_outcome(lookup_subscription),
        fp::outcome::map_success(fee),
    ));
    assert_eq!(bill(lookup_user("b@x.com")), Outcome::Failure("no user".to_string()));
}

#[tokio::test]
async fn deferred_failure_short_circuits_deferred_steps() {
    let step_calls = Arc::new(AtomicUsize::new(0));
    let counted_step = {
        let calls = Arc::clone(&step_calls);
        move |user_id: u64| -> DeferredOutcome<String, u64> {
            calls.fetch_add(1, Ordering::SeqCst);
            deferred_outcome::from_outcome(lookup_subscription(user_id))
        }
    };

    let result = pipe((
        deferred_outcome::failure::<_, u64>("read error".to_string()),
        fp::deferred_outcome::map_success_to_deferred_outcome(counted_step),
    ))
    .await;

    assert_eq!(result, Outcome::Failure("read error".to_string()));
    assert_eq!(step_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn deferred_chain_matches_sync_chain() {
    for email in ["a@x.com", "b@x.com"] {
        let sync_outcome = Chain::of(email)
            .map_to_outcome(lookup_user)
            .map_success_to_outcome(lookup_subscription)
            .map_success(fee)
            .into_outcome();

        let deferred_outcome = DeferredOutcomeChain::from_deferred_outcome(
            lookup_user_deferred(email),
        )
        .map_success_to_outcome(lookup_subscription)
        .map_success(fee)
        .into_deferred_outcome()
        .await;

        assert_eq!(sync_outcome, deferred_outcome);
    }
}

#[tokio::test]
async fn persistence_tap_aborts_pipeline_on_failure() {
    let outcome = DeferredOutcomeChain::<String, _>::success(42)
        .tap_success_to_deferred_outcome(|_| {
            deferred_outcome::failure::<_, ()>("disk full".to_string())
        })
        .map_success(fee)
        .into_deferred_outcome()
        .await;
    assert_eq!(outcome, Outcome::Failure("disk full".to_string()));
}

#[test]
fn wire_format_crosses_process_boundary() {
    let json = serde_json::to_string(&lookup_user("b@x.com")).unwrap();
    assert_eq!(json, r#"["failure","no user"]"#);

    let restored: Outcome<String, u64> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, lookup_user("b@x.com"));
}
