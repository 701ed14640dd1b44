//! Stage builders for the deferred-outcome track.
//!
//! One builder per operation in [`crate::deferred_outcome`]; together with
//! the other submodules this completes the point-free face of all four
//! tracks.

use crate::deferred::Deferred;
use crate::deferred_outcome::{self, DeferredOutcome};
use crate::outcome::Outcome;

/// Builds a stage applying [`deferred_outcome::map_success`].
#[must_use]
pub fn map_success<F1, S1, S2, M>(
    f: M,
) -> impl FnOnce(DeferredOutcome<F1, S1>) -> DeferredOutcome<F1, S2>
where
    F1: Send + 'static,
    S1: Send + 'static,
    S2: Send + 'static,
    M: FnOnce(S1) -> S2 + Send + 'static,
{
    move |d| deferred_outcome::map_success(d, f)
}

/// Builds a stage applying [`deferred_outcome::map_failure`].
#[must_use]
pub fn map_failure<F1, F2, S1, M>(
    f: M,
) -> impl FnOnce(DeferredOutcome<F1, S1>) -> DeferredOutcome<F2, S1>
where
    F1: Send + 'static,
    F2: Send + 'static,
    S1: Send + 'static,
    M: FnOnce(F1) -> F2 + Send + 'static,
{
    move |d| deferred_outcome::map_failure(d, f)
}

/// Builds a stage applying [`deferred_outcome::map_success_to_outcome`].
#[must_use]
pub fn map_success_to_outcome<F1, F2, S1, S2, M>(
    f: M,
) -> impl FnOnce(DeferredOutcome<F1, S1>) -> DeferredOutcome<F2, S2>
where
    F1: Into<F2> + Send + 'static,
    F2: Send + 'static,
    S1: Send + 'static,
    S2: Send + 'static,
    M: FnOnce(S1) -> Outcome<F2, S2> + Send + 'static,
{
    move |d| deferred_outcome::map_success_to_outcome(d, f)
}

/// Builds a stage applying [`deferred_outcome::map_failure_to_outcome`].
#[must_use]
pub fn map_failure_to_outcome<F1, F2, S1, S2, M>(
    f: M,
) -> impl FnOnce(DeferredOutcome<F1, S1>) -> DeferredOutcome<F2, S2>
where
    F1: Send + 'static,
    F2: Send + 'static,
    S1: Into<S2> + Send + 'static,
    S2: Send + 'static,
    M: FnOnce(F1) -> Outcome<F2, S2> + Send + 'static,
{
    move |d| deferred_outcome::map_failure_to_outcome(d, f)
}

/// Builds a stage applying [`deferred_outcome::map_success_to_deferred`].
#[must_use]
pub fn map_success_to_deferred<F1, S1, S2, M>(
    f: M,
) -> impl FnOnce(DeferredOutcome<F1, S1>) -> DeferredOutcome<F1, S2>
where
    F1: Send + 'static,
    S1: Send + 'static,
    S2: Send + 'static,
    M: FnOnce(S1) -> Deferred<S2> + Send + 'static,
{
    move |d| deferred_outcome::map_success_to_deferred(d, f)
}

/// Builds a stage applying [`deferred_outcome::map_failure_to_deferred`].
#[must_use]
pub fn map_failure_to_deferred<F1, F2, S1, M>(
    f: M,
) -> impl FnOnce(DeferredOutcome<F1, S1>) -> DeferredOutcome<F2, S1>
where
    F1: Send + 'static,
    F2: Send + 'static,
    S1: Send + 'static,
    M: FnOnce(F1) -> Deferred<F2> + Send + 'static,
{
    move |d| deferred_outcome::map_failure_to_deferred(d, f)
}

/// Builds a stage applying
/// [`deferred_outcome::map_success_to_deferred_outcome`].
#[must_use]
pub fn map_success_to_deferred_outcome<F1, F2, S1, S2, M>(
    f: M,
) -> impl FnOnce(DeferredOutcome<F1, S1>) -> DeferredOutcome<F2, S2>
where
    F1: Into<F2> + Send + 'static,
    F2: Send + 'static,
    S1: Send + 'static,
    S2: Send + 'static,
    M: FnOnce(S1) -> DeferredOutcome<F2, S2> + Send + 'static,
{
    move |d| deferred_outcome::map_success_to_deferred_outcome(d, f)
}

/// Builds a stage applying
/// [`deferred_outcome::map_failure_to_deferred_outcome`].
#[must_use]
pub fn map_failure_to_deferred_outcome<F1, F2, S1, S2, M>(
    f: M,
) -> impl FnOnce(DeferredOutcome<F1, S1>) -> DeferredOutcome<F2, S2>
where
    F1: Send + 'static,
    F2: Send + 'static,
    S1: Into<S2> + Send + 'static,
    S2: Send + 'static,
    M: FnOnce(F1) -> DeferredOutcome<F2, S2> + Send + 'static,
{
    move |d| deferred_outcome::map_failure_to_deferred_outcome(d, f)
}

/// Builds a stage applying [`deferred_outcome::tap_success`].
#[must_use]
pub fn tap_success<F1, S1, M>(
    f: M,
) -> impl FnOnce(DeferredOutcome<F1, S1>) -> DeferredOutcome<F1, S1>
where
    F1: Send + 'static,
    S1: Send + 'static,
    M: FnOnce(&S1) + Send + 'static,
{
    move |d| deferred_outcome::tap_success(d, f)
}

/// Builds a stage applying [`deferred_outcome::tap_failure`].
#[must_use]
pub fn tap_failure<F1, S1, M>(
    f: M,
) -> impl FnOnce(DeferredOutcome<F1, S1>) -> DeferredOutcome<F1, S1>
where
    F1: Send + 'static,
    S1: Send + 'static,
    M: FnOnce(&F1) + Send + 'static,
{
    move |d| deferred_outcome::tap_failure(d, f)
}

/// Builds a stage applying [`deferred_outcome::tap_success_to_outcome`].
#[must_use]
pub fn tap_success_to_outcome<F1, F2, S1, D, M>(
    f: M,
) -> impl FnOnce(DeferredOutcome<F1, S1>) -> DeferredOutcome<F2, S1>
where
    F1: Into<F2> + Send + 'static,
    F2: Send + 'static,
    S1: Send + 'static,
    M: FnOnce(&S1) -> Outcome<F2, D> + Send + 'static,
{
    move |d| deferred_outcome::tap_success_to_outcome(d, f)
}

/// Builds a stage applying [`deferred_outcome::tap_failure_to_outcome`].
#[must_use]
pub fn tap_failure_to_outcome<F1, D, S1, S2, M>(
    f: M,
) -> impl FnOnce(DeferredOutcome<F1, S1>) -> DeferredOutcome<F1, S2>
where
    F1: Send + 'static,
    S1: Into<S2> + Send + 'static,
    S2: Send + 'static,
    M: FnOnce(&F1) -> Outcome<D, S2> + Send + 'static,
{
    move |d| deferred_outcome::tap_failure_to_outcome(d, f)
}

/// Builds a stage applying [`deferred_outcome::tap_success_to_deferred`].
#[must_use]
pub fn tap_success_to_deferred<F1, S1, D, M>(
    f: M,
) -> impl FnOnce(DeferredOutcome<F1, S1>) -> DeferredOutcome<F1, S1>
where
    F1: Send + 'static,
    S1: Send + 'static,
    D: Send + 'static,
    M: FnOnce(&S1) -> Deferred<D> + Send + 'static,
{
    move |d| deferred_outcome::tap_success_to_deferred(d, f)
}

/// Builds a stage applying [`deferred_outcome::tap_failure_to_deferred`].
#[must_use]
pub fn tap_failure_to_deferred<F1, S1, D, M>(
    f: M,
) -> impl FnOnce(DeferredOutcome<F1, S1>) -> DeferredOutcome<F1, S1>
where
    F1: Send + 'static,
    S1: Send + 'static,
    D: Send + 'static,
    M: FnOnce(&F1) -> Deferred<D> + Send + 'static,
{
    move |d| deferred_outcome::tap_failure_to_deferred(d, f)
}

/// Builds a stage applying
/// [`deferred_outcome::tap_success_to_deferred_outcome`].
#[must_use]
pub fn tap_success_to_deferred_outcome<F1, F2, S1, D, M>(
    f: M,
) -> impl FnOnce(DeferredOutcome<F1, S1>) -> DeferredOutcome<F2, S1>
where
    F1: Into<F2> + Send + 'static,
    F2: Send + 'static,
    S1: Send + 'static,
    D: Send + 'static,
    M: FnOnce(&S1) -> DeferredOutcome<F2, D> + Send + 'static,
{
    move |d| deferred_outcome::tap_success_to_deferred_outcome(d, f)
}

/// Builds a stage applying
/// [`deferred_outcome::tap_failure_to_deferred_outcome`].
#[must_use]
pub fn tap_failure_to_deferred_outcome<F1, D, S1, S2, M>(
    f: M,
) -> impl FnOnce(DeferredOutcome<F1, S1>) -> DeferredOutcome<F1, S2>
where
    F1: Send + 'static,
    D: Send + 'static,
    S1: Into<S2> + Send + 'static,
    S2: Send + 'static,
    M: FnOnce(&F1) -> DeferredOutcome<D, S2> + Send + 'static,
{
    move |d| deferred_outcome::tap_failure_to_deferred_outcome(d, f)
}
