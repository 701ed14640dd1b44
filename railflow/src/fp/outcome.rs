//! Stage builders for the synchronous outcome track.
//!
//! Each builder closes over the step function and returns the
//! corresponding [`Outcome`] operation as a stage, so short-circuiting is
//! expressed by the outcome's own tag propagating through later stages —
//! never by control flow in the pipeline reducer.

use crate::outcome::Outcome;

/// Builds a stage applying [`Outcome::map_success`].
#[must_use]
pub fn map_success<F1, S1, S2, M>(f: M) -> impl FnOnce(Outcome<F1, S1>) -> Outcome<F1, S2>
where
    M: FnOnce(S1) -> S2,
{
    move |outcome| outcome.map_success(f)
}

/// Builds a stage applying [`Outcome::map_failure`].
#[must_use]
pub fn map_failure<F1, F2, S1, M>(f: M) -> impl FnOnce(Outcome<F1, S1>) -> Outcome<F2, S1>
where
    M: FnOnce(F1) -> F2,
{
    move |outcome| outcome.map_failure(f)
}

/// Builds a stage applying [`Outcome::map_success_to_outcome`].
#[must_use]
pub fn map_success_to_outcome<F1, F2, S1, S2, M>(
    f: M,
) -> impl FnOnce(Outcome<F1, S1>) -> Outcome<F2, S2>
where
    F1: Into<F2>,
    M: FnOnce(S1) -> Outcome<F2, S2>,
{
    move |outcome| outcome.map_success_to_outcome(f)
}

/// Builds a stage applying [`Outcome::map_failure_to_outcome`].
#[must_use]
pub fn map_failure_to_outcome<F1, F2, S1, S2, M>(
    f: M,
) -> impl FnOnce(Outcome<F1, S1>) -> Outcome<F2, S2>
where
    S1: Into<S2>,
    M: FnOnce(F1) -> Outcome<F2, S2>,
{
    move |outcome| outcome.map_failure_to_outcome(f)
}

/// Builds a stage applying [`Outcome::tap_success`].
#[must_use]
pub fn tap_success<F1, S1, M>(f: M) -> impl FnOnce(Outcome<F1, S1>) -> Outcome<F1, S1>
where
    M: FnOnce(&S1),
{
    move |outcome| outcome.tap_success(f)
}

/// Builds a stage applying [`Outcome::tap_failure`].
#[must_use]
pub fn tap_failure<F1, S1, M>(f: M) -> impl FnOnce(Outcome<F1, S1>) -> Outcome<F1, S1>
where
    M: FnOnce(&F1),
{
    move |outcome| outcome.tap_failure(f)
}

/// Builds a stage applying [`Outcome::tap_success_to_outcome`].
#[must_use]
pub fn tap_success_to_outcome<F1, F2, S1, D, M>(
    f: M,
) -> impl FnOnce(Outcome<F1, S1>) -> Outcome<F2, S1>
where
    F1: Into<F2>,
    M: FnOnce(&S1) -> Outcome<F2, D>,
{
    move |outcome| outcome.tap_success_to_outcome(f)
}

/// Builds a stage applying [`Outcome::tap_failure_to_outcome`].
#[must_use]
pub fn tap_failure_to_outcome<F1, D, S1, S2, M>(
    f: M,
) -> impl FnOnce(Outcome<F1, S1>) -> Outcome<F1, S2>
where
    S1: Into<S2>,
    M: FnOnce(&F1) -> Outcome<D, S2>,
{
    move |outcome| outcome.tap_failure_to_outcome(f)
}
