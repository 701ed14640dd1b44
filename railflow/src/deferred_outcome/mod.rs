//! The deferred-outcome algebra: the outcome algebra lifted over deferred
//! values.
//!
//! A [`DeferredOutcome`] is a handle to an eventual
//! [`Outcome`]. Each operation awaits the handle, dispatches on the tag
//! exactly as the synchronous algebra does, and awaits the step's own
//! deferred value when it has one. The laws of the synchronous algebra
//! carry over with "eventually" inserted: a resolved `Failure` short
//! circuits every success-targeted step without invoking it.
//!
//! For each of `success`/`failure` crossed with `map`/`tap`, the supplied
//! step may be plain, outcome-returning, deferred-returning, or
//! deferred-outcome-returning — sixteen operations in all.


use crate::deferred::{self, Deferred};
use crate::outcome::Outcome;

/// A handle to an eventual [`Outcome`].
///
/// Like [`Deferred`], this is itself a future: awaiting it is the
/// host-runtime normalization step.
pub type DeferredOutcome<F, S> = Deferred<Outcome<F, S>>;

/// Wraps a failure payload as an immediately-resolving deferred outcome.
#[must_use]
pub fn failure<F, S>(value: F) -> DeferredOutcome<F, S>
where
    F: Send + 'static,
    S: Send + 'static,
{
    deferred::of(Outcome::Failure(value))
}

/// Wraps a success payload as an immediately-resolving deferred outcome.
#[must_use]
pub fn success<F, S>(value: S) -> DeferredOutcome<F, S>
where
    F: Send + 'static,
    S: Send + 'static,
{
    deferred::of(Outcome::Success(value))
}

/// Lifts an already-resolved outcome onto the deferred track.
#[must_use]
pub fn from_outcome<F, S>(outcome: Outcome<F, S>) -> DeferredOutcome<F, S>
where
    F: Send + 'static,
    S: Send + 'static,
{
    deferred::of(outcome)
}

/// Marks the eventual value of a deferred computation as a failure.
#[must_use]
pub fn failure_from_deferred<F, S>(deferred: Deferred<F>) -> DeferredOutcome<F, S>
where
    F: Send + 'static,
    S: Send + 'static,
{
    deferred::map(deferred, Outcome::Failure)
}

/// Marks the eventual value of a deferred computation as a success.
#[must_use]
pub fn success_from_deferred<F, S>(deferred: Deferred<S>) -> DeferredOutcome<F, S>
where
    F: Send + 'static,
    S: Send + 'static,
{
    deferred::map(deferred, Outcome::Success)
}

/// [`Outcome::map_success`] lifted over a deferred outcome.
#[must_use]
pub fn map_success<F1, S1, S2, M>(
    deferred: DeferredOutcome<F1, S1>,
    f: M,
) -> DeferredOutcome<F1, S2>
where
    F1: Send + 'static,
    S1: Send + 'static,
    S2: Send + 'static,
    M: FnOnce(S1) -> S2 + Send + 'static,
{
    Box::pin(async move { deferred.await.map_success(f) })
}

/// [`Outcome::map_failure`] lifted over a deferred outcome.
#[must_use]
pub fn map_failure<F1, F2, S1, M>(
    deferred: DeferredOutcome<F1, S1>,
    f: M,
) -> DeferredOutcome<F2, S1>
where
    F1: Send + 'static,
    F2: Send + 'static,
    S1: Send + 'static,
    M: FnOnce(F1) -> F2 + Send + 'static,
{
    Box::pin(async move { deferred.await.map_failure(f) })
}

/// [`Outcome::map_success_to_outcome`] lifted over a deferred outcome.
#[must_use]
pub fn map_success_to_outcome<F1, F2, S1, S2, M>(
    deferred: DeferredOutcome<F1, S1>,
    f: M,
) -> DeferredOutcome<F2, S2>
where
    F1: Into<F2> + Send + 'static,
    F2: Send + 'static,
    S1: Send + 'static,
    S2: Send + 'static,
    M: FnOnce(S1) -> Outcome<F2, S2> + Send + 'static,
{
    Box::pin(async move { deferred.await.map_success_to_outcome(f) })
}

/// [`Outcome::map_failure_to_outcome`] lifted over a deferred outcome.
#[must_use]
pub fn map_failure_to_outcome<F1, F2, S1, S2, M>(
    deferred: DeferredOutcome<F1, S1>,
    f: M,
) -> DeferredOutcome<F2, S2>
where
    F1: Send + 'static,
    F2: Send + 'static,
    S1: Into<S2> + Send + 'static,
    S2: Send + 'static,
    M: FnOnce(F1) -> Outcome<F2, S2> + Send + 'static,
{
    Box::pin(async move { deferred.await.map_failure_to_outcome(f) })
}

/// Chains a deferred-returning step on the success channel.
///
/// The eventual plain value of the step becomes the new success payload.
#[must_use]
pub fn map_success_to_deferred<F1, S1, S2, M>(
    deferred: DeferredOutcome<F1, S1>,
    f: M,
) -> DeferredOutcome<F1, S2>
where
    F1: Send + 'static,
    S1: Send + 'static,
    S2: Send + 'static,
    M: FnOnce(S1) -> Deferred<S2> + Send + 'static,
{
    Box::pin(async move {
        match deferred.await {
            Outcome::Failure(e) => Outcome::Failure(e),
            Outcome::Success(s) => Outcome::Success(f(s).await),
        }
    })
}

/// Chains a deferred-returning step on the failure channel.
#[must_use]
pub fn map_failure_to_deferred<F1, F2, S1, M>(
    deferred: DeferredOutcome<F1, S1>,
    f: M,
) -> DeferredOutcome<F2, S1>
where
    F1: Send + 'static,
    F2: Send + 'static,
    S1: Send + 'static,
    M: FnOnce(F1) -> Deferred<F2> + Send + 'static,
{
    Box::pin(async move {
        match deferred.await {
            Outcome::Failure(e) => Outcome::Failure(f(e).await),
            Outcome::Success(s) => Outcome::Success(s),
        }
    })
}

/// Chains a deferred-outcome-returning step on the success channel
/// (monadic bind on the deferred track).
#[must_use]
pub fn map_success_to_deferred_outcome<F1, F2, S1, S2, M>(
    deferred: DeferredOutcome<F1, S1>,
    f: M,
) -> DeferredOutcome<F2, S2>
where
    F1: Into<F2> + Send + 'static,
    F2: Send + 'static,
    S1: Send + 'static,
    S2: Send + 'static,
    M: FnOnce(S1) -> DeferredOutcome<F2, S2> + Send + 'static,
{
    Box::pin(async move {
        match deferred.await {
            Outcome::Failure(e) => Outcome::Failure(e.into()),
            Outcome::Success(s) => f(s).await,
        }
    })
}

/// Chains a deferred-outcome-returning step on the failure channel.
#[must_use]
pub fn map_failure_to_deferred_outcome<F1, F2, S1, S2, M>(
    deferred: DeferredOutcome<F1, S1>,
    f: M,
) -> DeferredOutcome<F2, S2>
where
    F1: Send + 'static,
    F2: Send + 'static,
    S1: Into<S2> + Send + 'static,
    S2: Send + 'static,
    M: FnOnce(F1) -> DeferredOutcome<F2, S2> + Send + 'static,
{
    Box::pin(async move {
        match deferred.await {
            Outcome::Failure(e) => f(e).await,
            Outcome::Success(s) => Outcome::Success(s.into()),
        }
    })
}

/// [`Outcome::tap_success`] lifted over a deferred outcome.
#[must_use]
pub fn tap_success<F1, S1, M>(deferred: DeferredOutcome<F1, S1>, f: M) -> DeferredOutcome<F1, S1>
where
    F1: Send + 'static,
    S1: Send + 'static,
    M: FnOnce(&S1) + Send + 'static,
{
    Box::pin(async move { deferred.await.tap_success(f) })
}

/// [`Outcome::tap_failure`] lifted over a deferred outcome.
#[must_use]
pub fn tap_failure<F1, S1, M>(deferred: DeferredOutcome<F1, S1>, f: M) -> DeferredOutcome<F1, S1>
where
    F1: Send + 'static,
    S1: Send + 'static,
    M: FnOnce(&F1) + Send + 'static,
{
    Box::pin(async move { deferred.await.tap_failure(f) })
}

/// [`Outcome::tap_success_to_outcome`] lifted over a deferred outcome.
#[must_use]
pub fn tap_success_to_outcome<F1, F2, S1, D, M>(
    deferred: DeferredOutcome<F1, S1>,
    f: M,
) -> DeferredOutcome<F2, S1>
where
    F1: Into<F2> + Send + 'static,
    F2: Send + 'static,
    S1: Send + 'static,
    M: FnOnce(&S1) -> Outcome<F2, D> + Send + 'static,
{
    Box::pin(async move { deferred.await.tap_success_to_outcome(f) })
}

/// [`Outcome::tap_failure_to_outcome`] lifted over a deferred outcome.
#[must_use]
pub fn tap_failure_to_outcome<F1, D, S1, S2, M>(
    deferred: DeferredOutcome<F1, S1>,
    f: M,
) -> DeferredOutcome<F1, S2>
where
    F1: Send + 'static,
    S1: Into<S2> + Send + 'static,
    S2: Send + 'static,
    M: FnOnce(&F1) -> Outcome<D, S2> + Send + 'static,
{
    Box::pin(async move { deferred.await.tap_failure_to_outcome(f) })
}

/// Runs a deferred side effect on the eventual success payload, awaiting
/// it before yielding the original outcome.
#[must_use]
pub fn tap_success_to_deferred<F1, S1, D, M>(
    deferred: DeferredOutcome<F1, S1>,
    f: M,
) -> DeferredOutcome<F1, S1>
where
    F1: Send + 'static,
    S1: Send + 'static,
    D: Send + 'static,
    M: FnOnce(&S1) -> Deferred<D> + Send + 'static,
{
    Box::pin(async move {
        match deferred.await {
            Outcome::Failure(e) => Outcome::Failure(e),
            Outcome::Success(s) => {
                f(&s).await;
                Outcome::Success(s)
            }
        }
    })
}

/// Runs a deferred side effect on the eventual failure payload.
#[must_use]
pub fn tap_failure_to_deferred<F1, S1, D, M>(
    deferred: DeferredOutcome<F1, S1>,
    f: M,
) -> DeferredOutcome<F1, S1>
where
    F1: Send + 'static,
    S1: Send + 'static,
    D: Send + 'static,
    M: FnOnce(&F1) -> Deferred<D> + Send + 'static,
{
    Box::pin(async move {
        match deferred.await {
            Outcome::Failure(e) => {
                f(&e).await;
                Outcome::Failure(e)
            }
            Outcome::Success(s) => Outcome::Success(s),
        }
    })
}

/// Runs a fallible deferred side effect on the eventual success payload.
///
/// If the effect eventually fails, its failure replaces the success; if it
/// succeeds, the original success is kept.
#[must_use]
pub fn tap_success_to_deferred_outcome<F1, F2, S1, D, M>(
    deferred: DeferredOutcome<F1, S1>,
    f: M,
) -> DeferredOutcome<F2, S1>
where
    F1: Into<F2> + Send + 'static,
    F2: Send + 'static,
    S1: Send + 'static,
    D: Send + 'static,
    M: FnOnce(&S1) -> DeferredOutcome<F2, D> + Send + 'static,
{
    Box::pin(async move {
        match deferred.await {
            Outcome::Failure(e) => Outcome::Failure(e.into()),
            Outcome::Success(s) => match f(&s).await {
                Outcome::Failure(e) => Outcome::Failure(e),
                Outcome::Success(_) => Outcome::Success(s),
            },
        }
    })
}

/// Runs a fallible deferred side effect on the eventual failure payload.
///
/// If the effect eventually succeeds, its success replaces the failure
/// (a recovery); if it fails, the original failure is kept.
#[must_use]
pub fn tap_failure_to_deferred_outcome<F1, D, S1, S2, M>(
    deferred: DeferredOutcome<F1, S1>,
    f: M,
) -> DeferredOutcome<F1, S2>
where
    F1: Send + 'static,
    D: Send + 'static,
    S1: Into<S2> + Send + 'static,
    S2: Send + 'static,
    M: FnOnce(&F1) -> DeferredOutcome<D, S2> + Send + 'static,
{
    Box::pin(async move {
        match deferred.await {
            Outcome::Failure(e) => match f(&e).await {
                Outcome::Failure(_) => Outcome::Failure(e),
                Outcome::Success(s) => Outcome::Success(s),
            },
            Outcome::Success(s) => Outcome::Success(s.into()),
        }
    })
}
