//! Observability expressed as taps.
//!
//! The core algebra never emits events of its own; when a chain should be
//! visible in logs, insert one of these stages. They observe the outcome
//! flowing past a named point of the railway and return it unchanged, so
//! adding or removing them never alters a chain's trajectory.

use std::fmt::Debug;

use crate::deferred_outcome::{self, DeferredOutcome};
use crate::outcome::Outcome;

/// Builds a stage that logs the outcome passing a named point: a debug
/// event for successes, a warning for failures.
#[must_use]
pub fn traced<F, S>(label: &'static str) -> impl FnOnce(Outcome<F, S>) -> Outcome<F, S>
where
    F: Debug,
    S: Debug,
{
    move |outcome| {
        outcome
            .tap_success(|s| tracing::debug!(label, value = ?s, "success"))
            .tap_failure(|e| tracing::warn!(label, error = ?e, "failure"))
    }
}

/// The deferred counterpart of [`traced`]: logs once the outcome
/// resolves.
#[must_use]
pub fn traced_deferred<F, S>(
    label: &'static str,
) -> impl FnOnce(DeferredOutcome<F, S>) -> DeferredOutcome<F, S>
where
    F: Debug + Send + 'static,
    S: Debug + Send + 'static,
{
    move |deferred| {
        let deferred = deferred_outcome::tap_success(deferred, move |s| {
            tracing::debug!(label, value = ?s, "success");
        });
        deferred_outcome::tap_failure(deferred, move |e| {
            tracing::warn!(label, error = ?e, "failure");
        })
    }
}
