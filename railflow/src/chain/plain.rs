//! The plain-track adapter.

use crate::deferred::Deferred;
use crate::deferred_outcome::DeferredOutcome;
use crate::outcome::Outcome;

use super::{DeferredChain, DeferredOutcomeChain, OutcomeChain};

/// An immutable holder of a plain synchronous value, the entry point of
/// most method chains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chain<T> {
    core: T,
}

impl<T> Chain<T> {
    /// Wraps a value for chaining.
    #[must_use]
    pub const fn of(core: T) -> Self {
        Self { core }
    }

    /// The wrapped value.
    #[must_use]
    pub const fn core(&self) -> &T {
        &self.core
    }

    /// Unwraps the value.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.core
    }

    /// Applies a plain function, staying on the plain track.
    #[must_use]
    pub fn map<T2, M>(self, f: M) -> Chain<T2>
    where
        M: FnOnce(T) -> T2,
    {
        Chain::of(f(self.core))
    }

    /// Runs a side effect and passes the value through unchanged.
    #[must_use]
    pub fn tap<M>(self, f: M) -> Self
    where
        M: FnOnce(&T),
    {
        f(&self.core);
        self
    }

    /// Applies an outcome-returning function, transitioning to the
    /// outcome track.
    #[must_use]
    pub fn map_to_outcome<F2, S2, M>(self, f: M) -> OutcomeChain<F2, S2>
    where
        M: FnOnce(T) -> Outcome<F2, S2>,
    {
        OutcomeChain::of(f(self.core))
    }

    /// Runs a fallible side effect, transitioning to the outcome track.
    ///
    /// A failing effect replaces the value with its failure; a succeeding
    /// effect keeps the original value as the success payload.
    #[must_use]
    pub fn tap_to_outcome<F2, D, M>(self, f: M) -> OutcomeChain<F2, T>
    where
        M: FnOnce(&T) -> Outcome<F2, D>,
    {
        match f(&self.core) {
            Outcome::Failure(e) => OutcomeChain::failure(e),
            Outcome::Success(_) => OutcomeChain::success(self.core),
        }
    }
}

impl<T> Chain<T>
where
    T: Send + 'static,
{
    /// Applies a deferred-returning function, transitioning to the
    /// deferred track.
    #[must_use]
    pub fn map_to_deferred<T2, M>(self, f: M) -> DeferredChain<T2>
    where
        T2: Send + 'static,
        M: FnOnce(T) -> Deferred<T2>,
    {
        DeferredChain::from_deferred(f(self.core))
    }

    /// Schedules a deferred side effect, transitioning to the deferred
    /// track; the effect completes before the original value is yielded.
    #[must_use]
    pub fn tap_to_deferred<D, M>(self, f: M) -> DeferredChain<T>
    where
        D: Send + 'static,
        M: FnOnce(&T) -> Deferred<D>,
    {
        let value = self.core;
        let effect = f(&value);
        DeferredChain::from_deferred(Box::pin(async move {
            effect.await;
            value
        }))
    }

    /// Applies a deferred-outcome-returning function, transitioning to
    /// the deferred-outcome track.
    #[must_use]
    pub fn map_to_deferred_outcome<F2, S2, M>(self, f: M) -> DeferredOutcomeChain<F2, S2>
    where
        F2: Send + 'static,
        S2: Send + 'static,
        M: FnOnce(T) -> DeferredOutcome<F2, S2>,
    {
        DeferredOutcomeChain::from_deferred_outcome(f(self.core))
    }

    /// Schedules a fallible deferred side effect, transitioning to the
    /// deferred-outcome track with the original value as the eventual
    /// success payload.
    #[must_use]
    pub fn tap_to_deferred_outcome<F2, D, M>(self, f: M) -> DeferredOutcomeChain<F2, T>
    where
        F2: Send + 'static,
        D: Send + 'static,
        M: FnOnce(&T) -> DeferredOutcome<F2, D>,
    {
        let value = self.core;
        let effect = f(&value);
        DeferredOutcomeChain::from_deferred_outcome(Box::pin(async move {
            match effect.await {
                Outcome::Failure(e) => Outcome::Failure(e),
                Outcome::Success(_) => Outcome::Success(value),
            }
        }))
    }
}
