//! Tests for the chaining adapters and their equivalence to the
//! point-free surface.

#[cfg(test)]
mod tests {
    use crate::chain::{Chain, DeferredChain, DeferredOutcomeChain, OutcomeChain};
    use crate::deferred;
    use crate::deferred_outcome::{self, DeferredOutcome};
    use crate::fp;
    use crate::outcome::Outcome;
    use crate::pipeline::pipe;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_chain_map_and_tap() {
        let mut seen = None;
        let value = Chain::of("Hello, world!")
            .map(str::len)
            .tap(|n| seen = Some(*n))
            .map(|n| format!("Length: {n}"))
            .into_inner();
        assert_eq!(value, "Length: 13");
        assert_eq!(seen, Some(13));
    }

    #[test]
    fn test_plain_chain_core_accessor() {
        let chain = Chain::of(7);
        assert_eq!(*chain.core(), 7);
    }

    #[test]
    fn test_plain_chain_map_to_outcome() {
        let outcome = Chain::of(5)
            .map_to_outcome(|n| -> Outcome<String, i32> { Outcome::Success(n * 2) })
            .into_outcome();
        assert_eq!(outcome, Outcome::Success(10));
    }

    #[test]
    fn test_plain_chain_tap_to_outcome_failure_overrides() {
        let outcome = Chain::of(5)
            .tap_to_outcome(|_| -> Outcome<String, ()> {
                Outcome::Failure("disk full".to_string())
            })
            .into_outcome();
        assert_eq!(outcome, Outcome::Failure("disk full".to_string()));

        let outcome = Chain::of(5)
            .tap_to_outcome(|_| -> Outcome<String, ()> { Outcome::Success(()) })
            .into_outcome();
        assert_eq!(outcome, Outcome::Success(5));
    }

    #[test]
    fn test_outcome_chain_success_path() {
        let outcome = OutcomeChain::<String, _>::success(6)
            .map_success(|n| n * 7)
            .tap_success(|n| assert_eq!(*n, 42))
            .into_outcome();
        assert_eq!(outcome, Outcome::Success(42));
    }

    #[test]
    fn test_outcome_chain_failure_skips_success_steps() {
        let outcome = OutcomeChain::<String, i32>::failure("no user".to_string())
            .map_success(|n| n + 1)
            .tap_success(|_| panic!("must not run"))
            .into_outcome();
        assert_eq!(outcome, Outcome::Failure("no user".to_string()));
    }

    #[test]
    fn test_outcome_chain_tag() {
        assert_eq!(OutcomeChain::<String, i32>::success(1).tag(), "success");
        assert_eq!(
            OutcomeChain::<String, i32>::failure("e".to_string()).tag(),
            "failure"
        );
    }

    #[test]
    fn test_outcome_chain_recovery() {
        let outcome = OutcomeChain::<String, i32>::failure("not found".to_string())
            .map_failure_to_outcome(|e| -> Outcome<String, i32> {
                if e == "not found" {
                    Outcome::Success(0)
                } else {
                    Outcome::Failure(e)
                }
            })
            .into_outcome();
        assert_eq!(outcome, Outcome::Success(0));
    }

    #[tokio::test]
    async fn test_plain_chain_map_to_deferred() {
        let value = Chain::of(6)
            .map_to_deferred(|n| deferred::of(n * 7))
            .into_deferred()
            .await;
        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn test_plain_chain_tap_to_deferred_preserves_value() {
        let value = Chain::of(5)
            .tap_to_deferred(|_| deferred::of(()))
            .into_deferred()
            .await;
        assert_eq!(value, 5);
    }

    #[tokio::test]
    async fn test_plain_chain_map_to_deferred_outcome() {
        let outcome = Chain::of("a@x.com")
            .map_to_deferred_outcome(|email| -> DeferredOutcome<String, u64> {
                if email == "a@x.com" {
                    deferred_outcome::success(1)
                } else {
                    deferred_outcome::failure("no user".to_string())
                }
            })
            .into_deferred_outcome()
            .await;
        assert_eq!(outcome, Outcome::Success(1));
    }

    #[tokio::test]
    async fn test_plain_chain_tap_to_deferred_outcome() {
        let outcome = Chain::of(5)
            .tap_to_deferred_outcome(|_| deferred_outcome::failure::<_, ()>("boom".to_string()))
            .into_deferred_outcome()
            .await;
        assert_eq!(outcome, Outcome::Failure("boom".to_string()));
    }

    #[tokio::test]
    async fn test_deferred_chain_map_and_tap() {
        let value = DeferredChain::of("Hello, world!".to_string())
            .map(|s| s.len())
            .tap(|n| assert_eq!(*n, 13))
            .map_to_deferred(|n| deferred::of(n * 2))
            .into_deferred()
            .await;
        assert_eq!(value, 26);
    }

    #[tokio::test]
    async fn test_deferred_chain_from_future() {
        let value = DeferredChain::from_future(async { 21 }).map(|n| n * 2).into_deferred().await;
        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn test_deferred_chain_map_to_outcome() {
        let outcome = DeferredChain::of(5)
            .map_to_outcome(|n| -> Outcome<String, i32> { Outcome::Success(n) })
            .map_success(|n| n * 2)
            .into_deferred_outcome()
            .await;
        assert_eq!(outcome, Outcome::Success(10));
    }

    #[tokio::test]
    async fn test_deferred_chain_tap_to_outcome_failure_overrides() {
        let outcome = DeferredChain::of(5)
            .tap_to_outcome(|_| -> Outcome<String, ()> { Outcome::Failure("boom".to_string()) })
            .into_deferred_outcome()
            .await;
        assert_eq!(outcome, Outcome::Failure("boom".to_string()));
    }

    #[tokio::test]
    async fn test_deferred_chain_tap_to_deferred_outcome_success_preserves() {
        let outcome = DeferredChain::of(5)
            .tap_to_deferred_outcome(|_| deferred_outcome::success::<String, _>(()))
            .into_deferred_outcome()
            .await;
        assert_eq!(outcome, Outcome::Success(5));
    }

    #[tokio::test]
    async fn test_outcome_chain_to_deferred_transitions() {
        let outcome = OutcomeChain::<String, _>::success(6)
            .map_success_to_deferred(|n| deferred::of(n * 7))
            .into_deferred_outcome()
            .await;
        assert_eq!(outcome, Outcome::Success(42));

        let outcome = OutcomeChain::<String, i32>::failure("oops".to_string())
            .map_failure_to_deferred(|e| deferred::of(format!("wrapped: {e}")))
            .into_deferred_outcome()
            .await;
        assert_eq!(outcome, Outcome::Failure("wrapped: oops".to_string()));
    }

    #[tokio::test]
    async fn test_outcome_chain_to_deferred_outcome_transitions() {
        let outcome = OutcomeChain::<String, _>::success(1)
            .map_success_to_deferred_outcome(|n| deferred_outcome::success::<String, _>(n + 41))
            .into_deferred_outcome()
            .await;
        assert_eq!(outcome, Outcome::Success(42));

        let outcome = OutcomeChain::<String, i32>::failure("not found".to_string())
            .map_failure_to_deferred_outcome(|_| deferred_outcome::success::<String, _>(0))
            .into_deferred_outcome()
            .await;
        assert_eq!(outcome, Outcome::Success(0));
    }

    #[tokio::test]
    async fn test_outcome_chain_tap_success_to_deferred_outcome_override() {
        let outcome = OutcomeChain::<String, _>::success(5)
            .tap_success_to_deferred_outcome(|_| {
                deferred_outcome::failure::<_, ()>("disk full".to_string())
            })
            .into_deferred_outcome()
            .await;
        assert_eq!(outcome, Outcome::Failure("disk full".to_string()));
    }

    #[tokio::test]
    async fn test_outcome_chain_tap_failure_to_deferred_recovery_keeps_failure() {
        let outcome = OutcomeChain::<String, i32>::failure("oops".to_string())
            .tap_failure_to_deferred(|_| deferred::of(()))
            .into_deferred_outcome()
            .await;
        assert_eq!(outcome, Outcome::Failure("oops".to_string()));
    }

    #[tokio::test]
    async fn test_deferred_outcome_chain_full_surface() {
        let outcome = DeferredOutcomeChain::<String, _>::success(1)
            .map_success(|n| n + 1)
            .map_success_to_outcome(|n| -> Outcome<String, i32> { Outcome::Success(n * 3) })
            .map_success_to_deferred(|n| deferred::of(n + 36))
            .tap_success(|n| assert_eq!(*n, 42))
            .into_deferred_outcome()
            .await;
        assert_eq!(outcome, Outcome::Success(42));
    }

    #[tokio::test]
    async fn test_deferred_outcome_chain_short_circuit() {
        let outcome = DeferredOutcomeChain::<String, i32>::failure("read error".to_string())
            .map_success_to_deferred_outcome(|_| -> DeferredOutcome<String, i32> {
                panic!("step must never be invoked")
            })
            .into_deferred_outcome()
            .await;
        assert_eq!(outcome, Outcome::Failure("read error".to_string()));
    }

    #[tokio::test]
    async fn test_deferred_outcome_chain_constructors() {
        let outcome = DeferredOutcomeChain::<String, i32>::from_outcome(Outcome::Success(3))
            .into_deferred_outcome()
            .await;
        assert_eq!(outcome, Outcome::Success(3));

        let outcome =
            DeferredOutcomeChain::<String, i32>::success_from_deferred(deferred::of(4))
                .into_deferred_outcome()
                .await;
        assert_eq!(outcome, Outcome::Success(4));

        let outcome = DeferredOutcomeChain::<String, i32>::failure_from_deferred(deferred::of(
            "oops".to_string(),
        ))
        .into_deferred_outcome()
        .await;
        assert_eq!(outcome, Outcome::Failure("oops".to_string()));
    }

    #[test]
    fn test_chain_equals_pipeline_on_sync_track() {
        let via_chain = OutcomeChain::<String, _>::success(5)
            .map_success(|n| n + 1)
            .map_success_to_outcome(|n| -> Outcome<String, i32> { Outcome::Success(n * 2) })
            .into_outcome();

        let via_pipe = pipe((
            Outcome::<String, i32>::Success(5),
            fp::outcome::map_success(|n| n + 1),
            fp::outcome::map_success_to_outcome(|n| -> Outcome<String, i32> {
                Outcome::Success(n * 2)
            }),
        ));

        assert_eq!(via_chain, via_pipe);
    }

    #[tokio::test]
    async fn test_chain_equals_pipeline_on_deferred_track() {
        let via_chain = DeferredOutcomeChain::<String, _>::success(5)
            .map_success(|n| n + 1)
            .into_deferred_outcome()
            .await;

        let via_pipe = pipe((
            deferred_outcome::success::<String, _>(5),
            fp::deferred_outcome::map_success(|n: i32| n + 1),
        ))
        .await;

        assert_eq!(via_chain, via_pipe);
    }
}
