//! The deferred-outcome-track adapter.

use std::future::Future;

use crate::deferred::Deferred;
use crate::deferred_outcome::{self, DeferredOutcome};
use crate::outcome::Outcome;

/// An immutable holder of a [`DeferredOutcome`], exposing the full lifted
/// algebra as fluent methods.
///
/// The sixteen operations mirror [`crate::deferred_outcome`] one to one;
/// each is a thin delegation, so chains and pipelines stay equivalent.
pub struct DeferredOutcomeChain<F, S> {
    core: DeferredOutcome<F, S>,
}

impl<F, S> DeferredOutcomeChain<F, S>
where
    F: Send + 'static,
    S: Send + 'static,
{
    /// Wraps a failure payload as an immediately-resolving chain.
    #[must_use]
    pub fn failure(value: F) -> Self {
        Self::from_deferred_outcome(deferred_outcome::failure(value))
    }

    /// Wraps a success payload as an immediately-resolving chain.
    #[must_use]
    pub fn success(value: S) -> Self {
        Self::from_deferred_outcome(deferred_outcome::success(value))
    }

    /// Lifts an already-resolved outcome onto the deferred track.
    #[must_use]
    pub fn from_outcome(outcome: Outcome<F, S>) -> Self {
        Self::from_deferred_outcome(deferred_outcome::from_outcome(outcome))
    }

    /// Wraps an existing deferred-outcome handle.
    #[must_use]
    pub fn from_deferred_outcome(core: DeferredOutcome<F, S>) -> Self {
        Self { core }
    }

    /// Normalizes any host-runtime future of an outcome into a chain.
    #[must_use]
    pub fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Outcome<F, S>> + Send + 'static,
    {
        Self::from_deferred_outcome(Box::pin(future))
    }

    /// Marks the eventual value of a deferred computation as a failure.
    #[must_use]
    pub fn failure_from_deferred(deferred: Deferred<F>) -> Self {
        Self::from_deferred_outcome(deferred_outcome::failure_from_deferred(deferred))
    }

    /// Marks the eventual value of a deferred computation as a success.
    #[must_use]
    pub fn success_from_deferred(deferred: Deferred<S>) -> Self {
        Self::from_deferred_outcome(deferred_outcome::success_from_deferred(deferred))
    }

    /// The host-awaitable form of the held outcome, for final
    /// consumption.
    #[must_use]
    pub fn into_deferred_outcome(self) -> DeferredOutcome<F, S> {
        self.core
    }

    /// See [`deferred_outcome::map_success`].
    #[must_use]
    pub fn map_success<S2, M>(self, f: M) -> DeferredOutcomeChain<F, S2>
    where
        S2: Send + 'static,
        M: FnOnce(S) -> S2 + Send + 'static,
    {
        DeferredOutcomeChain::from_deferred_outcome(deferred_outcome::map_success(self.core, f))
    }

    /// See [`deferred_outcome::map_failure`].
    #[must_use]
    pub fn map_failure<F2, M>(self, f: M) -> DeferredOutcomeChain<F2, S>
    where
        F2: Send + 'static,
        M: FnOnce(F) -> F2 + Send + 'static,
    {
        DeferredOutcomeChain::from_deferred_outcome(deferred_outcome::map_failure(self.core, f))
    }

    /// See [`deferred_outcome::map_success_to_outcome`].
    #[must_use]
    pub fn map_success_to_outcome<F2, S2, M>(self, f: M) -> DeferredOutcomeChain<F2, S2>
    where
        F: Into<F2>,
        F2: Send + 'static,
        S2: Send + 'static,
        M: FnOnce(S) -> Outcome<F2, S2> + Send + 'static,
    {
        DeferredOutcomeChain::from_deferred_outcome(deferred_outcome::map_success_to_outcome(
            self.core, f,
        ))
    }

    /// See [`deferred_outcome::map_failure_to_outcome`].
    #[must_use]
    pub fn map_failure_to_outcome<F2, S2, M>(self, f: M) -> DeferredOutcomeChain<F2, S2>
    where
        S: Into<S2>,
        F2: Send + 'static,
        S2: Send + 'static,
        M: FnOnce(F) -> Outcome<F2, S2> + Send + 'static,
    {
        DeferredOutcomeChain::from_deferred_outcome(deferred_outcome::map_failure_to_outcome(
            self.core, f,
        ))
    }

    /// See [`deferred_outcome::map_success_to_deferred`].
    #[must_use]
    pub fn map_success_to_deferred<S2, M>(self, f: M) -> DeferredOutcomeChain<F, S2>
    where
        S2: Send + 'static,
        M: FnOnce(S) -> Deferred<S2> + Send + 'static,
    {
        DeferredOutcomeChain::from_deferred_outcome(deferred_outcome::map_success_to_deferred(
            self.core, f,
        ))
    }

    /// See [`deferred_outcome::map_failure_to_deferred`].
    #[must_use]
    pub fn map_failure_to_deferred<F2, M>(self, f: M) -> DeferredOutcomeChain<F2, S>
    where
        F2: Send + 'static,
        M: FnOnce(F) -> Deferred<F2> + Send + 'static,
    {
        DeferredOutcomeChain::from_deferred_outcome(deferred_outcome::map_failure_to_deferred(
            self.core, f,
        ))
    }

    /// See [`deferred_outcome::map_success_to_deferred_outcome`].
    #[must_use]
    pub fn map_success_to_deferred_outcome<F2, S2, M>(self, f: M) -> DeferredOutcomeChain<F2, S2>
    where
        F: Into<F2>,
        F2: Send + 'static,
        S2: Send + 'static,
        M: FnOnce(S) -> DeferredOutcome<F2, S2> + Send + 'static,
    {
        DeferredOutcomeChain::from_deferred_outcome(
            deferred_outcome::map_success_to_deferred_outcome(self.core, f),
        )
    }

    /// See [`deferred_outcome::map_failure_to_deferred_outcome`].
    #[must_use]
    pub fn map_failure_to_deferred_outcome<F2, S2, M>(self, f: M) -> DeferredOutcomeChain<F2, S2>
    where
        S: Into<S2>,
        F2: Send + 'static,
        S2: Send + 'static,
        M: FnOnce(F) -> DeferredOutcome<F2, S2> + Send + 'static,
    {
        DeferredOutcomeChain::from_deferred_outcome(
            deferred_outcome::map_failure_to_deferred_outcome(self.core, f),
        )
    }

    /// See [`deferred_outcome::tap_success`].
    #[must_use]
    pub fn tap_success<M>(self, f: M) -> Self
    where
        M: FnOnce(&S) + Send + 'static,
    {
        Self::from_deferred_outcome(deferred_outcome::tap_success(self.core, f))
    }

    /// See [`deferred_outcome::tap_failure`].
    #[must_use]
    pub fn tap_failure<M>(self, f: M) -> Self
    where
        M: FnOnce(&F) + Send + 'static,
    {
        Self::from_deferred_outcome(deferred_outcome::tap_failure(self.core, f))
    }

    /// See [`deferred_outcome::tap_success_to_outcome`].
    #[must_use]
    pub fn tap_success_to_outcome<F2, D, M>(self, f: M) -> DeferredOutcomeChain<F2, S>
    where
        F: Into<F2>,
        F2: Send + 'static,
        M: FnOnce(&S) -> Outcome<F2, D> + Send + 'static,
    {
        DeferredOutcomeChain::from_deferred_outcome(deferred_outcome::tap_success_to_outcome(
            self.core, f,
        ))
    }

    /// See [`deferred_outcome::tap_failure_to_outcome`].
    #[must_use]
    pub fn tap_failure_to_outcome<D, S2, M>(self, f: M) -> DeferredOutcomeChain<F, S2>
    where
        S: Into<S2>,
        S2: Send + 'static,
        M: FnOnce(&F) -> Outcome<D, S2> + Send + 'static,
    {
        DeferredOutcomeChain::from_deferred_outcome(deferred_outcome::tap_failure_to_outcome(
            self.core, f,
        ))
    }

    /// See [`deferred_outcome::tap_success_to_deferred`].
    #[must_use]
    pub fn tap_success_to_deferred<D, M>(self, f: M) -> Self
    where
        D: Send + 'static,
        M: FnOnce(&S) -> Deferred<D> + Send + 'static,
    {
        Self::from_deferred_outcome(deferred_outcome::tap_success_to_deferred(self.core, f))
    }

    /// See [`deferred_outcome::tap_failure_to_deferred`].
    #[must_use]
    pub fn tap_failure_to_deferred<D, M>(self, f: M) -> Self
    where
        D: Send + 'static,
        M: FnOnce(&F) -> Deferred<D> + Send + 'static,
    {
        Self::from_deferred_outcome(deferred_outcome::tap_failure_to_deferred(self.core, f))
    }

    /// See [`deferred_outcome::tap_success_to_deferred_outcome`].
    #[must_use]
    pub fn tap_success_to_deferred_outcome<F2, D, M>(self, f: M) -> DeferredOutcomeChain<F2, S>
    where
        F: Into<F2>,
        F2: Send + 'static,
        D: Send + 'static,
        M: FnOnce(&S) -> DeferredOutcome<F2, D> + Send + 'static,
    {
        DeferredOutcomeChain::from_deferred_outcome(
            deferred_outcome::tap_success_to_deferred_outcome(self.core, f),
        )
    }

    /// See [`deferred_outcome::tap_failure_to_deferred_outcome`].
    #[must_use]
    pub fn tap_failure_to_deferred_outcome<D, S2, M>(self, f: M) -> DeferredOutcomeChain<F, S2>
    where
        S: Into<S2>,
        D: Send + 'static,
        S2: Send + 'static,
        M: FnOnce(&F) -> DeferredOutcome<D, S2> + Send + 'static,
    {
        DeferredOutcomeChain::from_deferred_outcome(
            deferred_outcome::tap_failure_to_deferred_outcome(self.core, f),
        )
    }
}

impl<F, S> std::fmt::Debug for DeferredOutcomeChain<F, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeferredOutcomeChain").finish_non_exhaustive()
    }
}
