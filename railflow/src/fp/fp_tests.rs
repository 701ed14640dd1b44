//! Tests for the point-free stage builders.

#[cfg(test)]
mod tests {
    use crate::deferred::{self, Deferred};
    use crate::deferred_outcome::{self, DeferredOutcome};
    use crate::fp;
    use crate::outcome::Outcome;
    use crate::pipeline::{compose, pipe};
    use pretty_assertions::assert_eq;

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

    #[test]
    fn test_plain_map_is_the_identity_lift() {
        let stage = fp::plain::map(|n: i32| n * 2);
        assert_eq!(stage(21), 42);
    }

    #[test]
    fn test_plain_tap_passes_value_through() {
        let mut seen = None;
        let stage = fp::plain::tap(|n: &i32| seen = Some(*n));
        assert_eq!(stage(7), 7);
        assert_eq!(seen, Some(7));
    }

    #[test]
    fn test_outcome_pipeline_success_path() {
        let result = pipe((
            lookup_user("a@x.com"),
            fp::outcome::map_success_to_outcome(lookup_subscription),
            fp::outcome::map_success(fee),
        ));
        assert_eq!(result, Outcome::Success(4.2));
    }

    #[test]
    fn test_outcome_pipeline_failure_short_circuits() {
        let result = pipe((
            lookup_user("b@x.com"),
            fp::outcome::map_success_to_outcome(|_| -> Outcome<String, u64> {
                panic!("lookup_subscription must not be invoked")
            }),
            fp::outcome::map_success(|_: u64| panic!("fee must not be invoked")),
        ));
        assert_eq!(result, Outcome::<String, ()>::Failure("no user".to_string()));
    }

    #[test]
    fn test_outcome_builders_match_methods() {
        let o: Outcome<String, i32> = Outcome::Success(5);
        assert_eq!(
            fp::outcome::map_success(|n: i32| n + 1)(o.clone()),
            o.map_success(|n| n + 1)
        );

        let o: Outcome<String, i32> = Outcome::Failure("e".to_string());
        assert_eq!(
            fp::outcome::map_failure(|e: String| format!("{e}!"))(o.clone()),
            o.map_failure(|e| format!("{e}!"))
        );
    }

    #[test]
    fn test_outcome_tap_builders() {
        let result = pipe((
            Outcome::<String, i32>::Success(5),
            fp::outcome::tap_success_to_outcome(|_| -> Outcome<String, ()> {
                Outcome::Failure("disk full".to_string())
            }),
        ));
        assert_eq!(result, Outcome::Failure("disk full".to_string()));

        let result = pipe((
            Outcome::<String, i32>::Failure("not found".to_string()),
            fp::outcome::tap_failure_to_outcome(|e: &String| -> Outcome<(), i32> {
                if e == "not found" {
                    Outcome::Success(0)
                } else {
                    Outcome::Failure(())
                }
            }),
        ));
        assert_eq!(result, Outcome::Success(0));
    }

    #[test]
    fn test_composed_stages_reusable_shape() {
        let to_fee = compose((
            fp::outcome::map_success_to_outcome(lookup_subscription),
            fp::outcome::map_success(fee),
        ));
        assert_eq!(to_fee(lookup_user("a@x.com")), Outcome::Success(4.2));
    }

    #[tokio::test]
    async fn test_deferred_pipeline() {
        let result = pipe((
            deferred::of("Hello, world!".to_string()),
            fp::deferred::map(|s: String| s.len()),
            fp::deferred::map_to_deferred(|n: usize| deferred::of(n * 2)),
            fp::deferred::tap(|n: &usize| assert_eq!(*n, 26)),
        ))
        .await;
        assert_eq!(result, 26);
    }

    #[tokio::test]
    async fn test_deferred_tap_to_deferred() {
        let result = pipe((
            deferred::of(5),
            fp::deferred::tap_to_deferred(|_: &i32| -> Deferred<()> { deferred::of(()) }),
        ))
        .await;
        assert_eq!(result, 5);
    }

    #[tokio::test]
    async fn test_deferred_outcome_pipeline_success_path() {
        let result = pipe((
            deferred_outcome::from_outcome(lookup_user("a@x.com")),
            fp::deferred_outcome::map_success_to_outcome(lookup_subscription),
            fp::deferred_outcome::map_success(fee),
        ))
        .await;
        assert_eq!(result, Outcome::Success(4.2));
    }

    #[tokio::test]
    async fn test_deferred_outcome_pipeline_short_circuits() {
        let result = pipe((
            deferred_outcome::failure::<_, u64>("read error".to_string()),
            fp::deferred_outcome::map_success_to_deferred_outcome(
                |_| -> DeferredOutcome<String, u64> { panic!("step must never be invoked") },
            ),
        ))
        .await;
        assert_eq!(result, Outcome::Failure("read error".to_string()));
    }

    #[tokio::test]
    async fn test_deferred_outcome_builders_cover_both_channels() {
        let result = pipe((
            deferred_outcome::failure::<_, i32>("oops".to_string()),
            fp::deferred_outcome::map_failure(|e: String| format!("wrapped: {e}")),
            fp::deferred_outcome::tap_failure(|e: &String| assert!(e.starts_with("wrapped"))),
            fp::deferred_outcome::map_failure_to_deferred(|e: String| deferred::of(e.len())),
        ))
        .await;
        assert_eq!(result, Outcome::Failure(13));
    }

    #[tokio::test]
    async fn test_deferred_outcome_tap_builders() {
        let result = pipe((
            deferred_outcome::success::<String, _>(5),
            fp::deferred_outcome::tap_success(|n: &i32| assert_eq!(*n, 5)),
            fp::deferred_outcome::tap_success_to_deferred(|_: &i32| deferred::of(())),
            fp::deferred_outcome::tap_success_to_deferred_outcome(|_: &i32| {
                deferred_outcome::success::<String, _>(())
            }),
        ))
        .await;
        assert_eq!(result, Outcome::Success(5));
    }
}
