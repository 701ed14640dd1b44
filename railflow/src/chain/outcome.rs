//! The outcome-track adapter.

use crate::deferred::Deferred;
use crate::deferred_outcome::DeferredOutcome;
use crate::outcome::Outcome;

use super::DeferredOutcomeChain;

/// An immutable holder of an [`Outcome`], exposing the synchronous
/// algebra as fluent methods plus transitions onto the deferred-outcome
/// track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeChain<F, S> {
    core: Outcome<F, S>,
}

impl<F, S> OutcomeChain<F, S> {
    /// Wraps an outcome for chaining.
    #[must_use]
    pub const fn of(core: Outcome<F, S>) -> Self {
        Self { core }
    }

    /// Wraps a failure payload.
    #[must_use]
    pub const fn failure(value: F) -> Self {
        Self::of(Outcome::Failure(value))
    }

    /// Wraps a success payload.
    #[must_use]
    pub const fn success(value: S) -> Self {
        Self::of(Outcome::Success(value))
    }

    /// The wrapped outcome.
    #[must_use]
    pub const fn core(&self) -> &Outcome<F, S> {
        &self.core
    }

    /// The wire tag of the wrapped outcome.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        self.core.tag()
    }

    /// Unwraps the outcome.
    #[must_use]
    pub fn into_outcome(self) -> Outcome<F, S> {
        self.core
    }

    /// See [`Outcome::map_success`].
    #[must_use]
    pub fn map_success<S2, M>(self, f: M) -> OutcomeChain<F, S2>
    where
        M: FnOnce(S) -> S2,
    {
        OutcomeChain::of(self.core.map_success(f))
    }

    /// See [`Outcome::map_failure`].
    #[must_use]
    pub fn map_failure<F2, M>(self, f: M) -> OutcomeChain<F2, S>
    where
        M: FnOnce(F) -> F2,
    {
        OutcomeChain::of(self.core.map_failure(f))
    }

    /// See [`Outcome::map_success_to_outcome`].
    #[must_use]
    pub fn map_success_to_outcome<F2, S2, M>(self, f: M) -> OutcomeChain<F2, S2>
    where
        F: Into<F2>,
        M: FnOnce(S) -> Outcome<F2, S2>,
    {
        OutcomeChain::of(self.core.map_success_to_outcome(f))
    }

    /// See [`Outcome::map_failure_to_outcome`].
    #[must_use]
    pub fn map_failure_to_outcome<F2, S2, M>(self, f: M) -> OutcomeChain<F2, S2>
    where
        S: Into<S2>,
        M: FnOnce(F) -> Outcome<F2, S2>,
    {
        OutcomeChain::of(self.core.map_failure_to_outcome(f))
    }

    /// See [`Outcome::tap_success`].
    #[must_use]
    pub fn tap_success<M>(self, f: M) -> Self
    where
        M: FnOnce(&S),
    {
        Self::of(self.core.tap_success(f))
    }

    /// See [`Outcome::tap_failure`].
    #[must_use]
    pub fn tap_failure<M>(self, f: M) -> Self
    where
        M: FnOnce(&F),
    {
        Self::of(self.core.tap_failure(f))
    }

    /// See [`Outcome::tap_success_to_outcome`].
    #[must_use]
    pub fn tap_success_to_outcome<F2, D, M>(self, f: M) -> OutcomeChain<F2, S>
    where
        F: Into<F2>,
        M: FnOnce(&S) -> Outcome<F2, D>,
    {
        OutcomeChain::of(self.core.tap_success_to_outcome(f))
    }

    /// See [`Outcome::tap_failure_to_outcome`].
    #[must_use]
    pub fn tap_failure_to_outcome<D, S2, M>(self, f: M) -> OutcomeChain<F, S2>
    where
        S: Into<S2>,
        M: FnOnce(&F) -> Outcome<D, S2>,
    {
        OutcomeChain::of(self.core.tap_failure_to_outcome(f))
    }
}

impl<F, S> OutcomeChain<F, S>
where
    F: Send + 'static,
    S: Send + 'static,
{
    /// Chains a deferred-returning step on the success channel,
    /// transitioning to the deferred-outcome track.
    #[must_use]
    pub fn map_success_to_deferred<S2, M>(self, f: M) -> DeferredOutcomeChain<F, S2>
    where
        S2: Send + 'static,
        M: FnOnce(S) -> Deferred<S2>,
    {
        match self.core {
            Outcome::Failure(e) => DeferredOutcomeChain::failure(e),
            Outcome::Success(s) => {
                let step = f(s);
                DeferredOutcomeChain::from_deferred_outcome(Box::pin(async move {
                    Outcome::Success(step.await)
                }))
            }
        }
    }

    /// Chains a deferred-returning step on the failure channel.
    #[must_use]
    pub fn map_failure_to_deferred<F2, M>(self, f: M) -> DeferredOutcomeChain<F2, S>
    where
        F2: Send + 'static,
        M: FnOnce(F) -> Deferred<F2>,
    {
        match self.core {
            Outcome::Failure(e) => {
                let step = f(e);
                DeferredOutcomeChain::from_deferred_outcome(Box::pin(async move {
                    Outcome::Failure(step.await)
                }))
            }
            Outcome::Success(s) => DeferredOutcomeChain::success(s),
        }
    }

    /// Chains a deferred-outcome-returning step on the success channel.
    #[must_use]
    pub fn map_success_to_deferred_outcome<F2, S2, M>(self, f: M) -> DeferredOutcomeChain<F2, S2>
    where
        F: Into<F2>,
        F2: Send + 'static,
        S2: Send + 'static,
        M: FnOnce(S) -> DeferredOutcome<F2, S2>,
    {
        match self.core {
            Outcome::Failure(e) => DeferredOutcomeChain::failure(e.into()),
            Outcome::Success(s) => DeferredOutcomeChain::from_deferred_outcome(f(s)),
        }
    }

    /// Chains a deferred-outcome-returning step on the failure channel.
    #[must_use]
    pub fn map_failure_to_deferred_outcome<F2, S2, M>(self, f: M) -> DeferredOutcomeChain<F2, S2>
    where
        S: Into<S2>,
        F2: Send + 'static,
        S2: Send + 'static,
        M: FnOnce(F) -> DeferredOutcome<F2, S2>,
    {
        match self.core {
            Outcome::Failure(e) => DeferredOutcomeChain::from_deferred_outcome(f(e)),
            Outcome::Success(s) => DeferredOutcomeChain::success(s.into()),
        }
    }

    /// Schedules a deferred side effect on the success payload; the
    /// effect completes before the original outcome is yielded.
    #[must_use]
    pub fn tap_success_to_deferred<D, M>(self, f: M) -> DeferredOutcomeChain<F, S>
    where
        D: Send + 'static,
        M: FnOnce(&S) -> Deferred<D>,
    {
        match self.core {
            Outcome::Failure(e) => DeferredOutcomeChain::failure(e),
            Outcome::Success(s) => {
                let effect = f(&s);
                DeferredOutcomeChain::from_deferred_outcome(Box::pin(async move {
                    effect.await;
                    Outcome::Success(s)
                }))
            }
        }
    }

    /// Schedules a deferred side effect on the failure payload.
    #[must_use]
    pub fn tap_failure_to_deferred<D, M>(self, f: M) -> DeferredOutcomeChain<F, S>
    where
        D: Send + 'static,
        M: FnOnce(&F) -> Deferred<D>,
    {
        match self.core {
            Outcome::Failure(e) => {
                let effect = f(&e);
                DeferredOutcomeChain::from_deferred_outcome(Box::pin(async move {
                    effect.await;
                    Outcome::Failure(e)
                }))
            }
            Outcome::Success(s) => DeferredOutcomeChain::success(s),
        }
    }

    /// Schedules a fallible deferred side effect on the success payload;
    /// an eventual failure replaces the success, an eventual success
    /// keeps the original payload.
    #[must_use]
    pub fn tap_success_to_deferred_outcome<F2, D, M>(self, f: M) -> DeferredOutcomeChain<F2, S>
    where
        F: Into<F2>,
        F2: Send + 'static,
        D: Send + 'static,
        M: FnOnce(&S) -> DeferredOutcome<F2, D>,
    {
        match self.core {
            Outcome::Failure(e) => DeferredOutcomeChain::failure(e.into()),
            Outcome::Success(s) => {
                let effect = f(&s);
                DeferredOutcomeChain::from_deferred_outcome(Box::pin(async move {
                    match effect.await {
                        Outcome::Failure(e) => Outcome::Failure(e),
                        Outcome::Success(_) => Outcome::Success(s),
                    }
                }))
            }
        }
    }

    /// Schedules a fallible deferred side effect on the failure payload;
    /// an eventual success replaces the failure (a recovery), an eventual
    /// failure keeps the original payload.
    #[must_use]
    pub fn tap_failure_to_deferred_outcome<D, S2, M>(self, f: M) -> DeferredOutcomeChain<F, S2>
    where
        S: Into<S2>,
        D: Send + 'static,
        S2: Send + 'static,
        M: FnOnce(&F) -> DeferredOutcome<D, S2>,
    {
        match self.core {
            Outcome::Failure(e) => {
                let effect = f(&e);
                DeferredOutcomeChain::from_deferred_outcome(Box::pin(async move {
                    match effect.await {
                        Outcome::Failure(_) => Outcome::Failure(e),
                        Outcome::Success(s) => Outcome::Success(s),
                    }
                }))
            }
            Outcome::Success(s) => DeferredOutcomeChain::success(s.into()),
        }
    }
}
