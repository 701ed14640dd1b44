//! The deferred-plain-track adapter.

use std::future::Future;

use crate::deferred::{self, Deferred};
use crate::deferred_outcome::DeferredOutcome;
use crate::outcome::Outcome;

use super::DeferredOutcomeChain;

/// An immutable holder of a [`Deferred`] plain value.
///
/// Constructing a chain never blocks; awaiting happens only when the
/// handle obtained from [`DeferredChain::into_deferred`] is driven by the
/// host runtime.
pub struct DeferredChain<T> {
    core: Deferred<T>,
}

impl<T> DeferredChain<T>
where
    T: Send + 'static,
{
    /// Wraps an already-known value as an immediately-resolving chain.
    #[must_use]
    pub fn of(value: T) -> Self {
        Self::from_deferred(deferred::of(value))
    }

    /// Wraps an existing deferred handle.
    #[must_use]
    pub fn from_deferred(core: Deferred<T>) -> Self {
        Self { core }
    }

    /// Normalizes any host-runtime future into a chain.
    #[must_use]
    pub fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = T> + Send + 'static,
    {
        Self::from_deferred(deferred::from_future(future))
    }

    /// The host-awaitable form of the held value, for final consumption.
    #[must_use]
    pub fn into_deferred(self) -> Deferred<T> {
        self.core
    }

    /// See [`deferred::map`].
    #[must_use]
    pub fn map<T2, M>(self, f: M) -> DeferredChain<T2>
    where
        T2: Send + 'static,
        M: FnOnce(T) -> T2 + Send + 'static,
    {
        DeferredChain::from_deferred(deferred::map(self.core, f))
    }

    /// See [`deferred::map_to_deferred`].
    #[must_use]
    pub fn map_to_deferred<T2, M>(self, f: M) -> DeferredChain<T2>
    where
        T2: Send + 'static,
        M: FnOnce(T) -> Deferred<T2> + Send + 'static,
    {
        DeferredChain::from_deferred(deferred::map_to_deferred(self.core, f))
    }

    /// See [`deferred::tap`].
    #[must_use]
    pub fn tap<M>(self, f: M) -> Self
    where
        M: FnOnce(&T) + Send + 'static,
    {
        Self::from_deferred(deferred::tap(self.core, f))
    }

    /// See [`deferred::tap_to_deferred`].
    #[must_use]
    pub fn tap_to_deferred<D, M>(self, f: M) -> Self
    where
        D: Send + 'static,
        M: FnOnce(&T) -> Deferred<D> + Send + 'static,
    {
        Self::from_deferred(deferred::tap_to_deferred(self.core, f))
    }

    /// Applies an outcome-returning function to the eventual value,
    /// transitioning to the deferred-outcome track.
    #[must_use]
    pub fn map_to_outcome<F2, S2, M>(self, f: M) -> DeferredOutcomeChain<F2, S2>
    where
        F2: Send + 'static,
        S2: Send + 'static,
        M: FnOnce(T) -> Outcome<F2, S2> + Send + 'static,
    {
        let core = self.core;
        DeferredOutcomeChain::from_deferred_outcome(Box::pin(async move { f(core.await) }))
    }

    /// Applies a deferred-outcome-returning function to the eventual
    /// value, transitioning to the deferred-outcome track.
    #[must_use]
    pub fn map_to_deferred_outcome<F2, S2, M>(self, f: M) -> DeferredOutcomeChain<F2, S2>
    where
        F2: Send + 'static,
        S2: Send + 'static,
        M: FnOnce(T) -> DeferredOutcome<F2, S2> + Send + 'static,
    {
        let core = self.core;
        DeferredOutcomeChain::from_deferred_outcome(Box::pin(async move { f(core.await).await }))
    }

    /// Runs a fallible side effect on the eventual value; a failure
    /// replaces it, a success keeps the original as the success payload.
    #[must_use]
    pub fn tap_to_outcome<F2, D, M>(self, f: M) -> DeferredOutcomeChain<F2, T>
    where
        F2: Send + 'static,
        M: FnOnce(&T) -> Outcome<F2, D> + Send + 'static,
    {
        let core = self.core;
        DeferredOutcomeChain::from_deferred_outcome(Box::pin(async move {
            let value = core.await;
            match f(&value) {
                Outcome::Failure(e) => Outcome::Failure(e),
                Outcome::Success(_) => Outcome::Success(value),
            }
        }))
    }

    /// Runs a fallible deferred side effect on the eventual value, with
    /// the same trajectory rules as [`DeferredChain::tap_to_outcome`].
    #[must_use]
    pub fn tap_to_deferred_outcome<F2, D, M>(self, f: M) -> DeferredOutcomeChain<F2, T>
    where
        F2: Send + 'static,
        D: Send + 'static,
        M: FnOnce(&T) -> DeferredOutcome<F2, D> + Send + 'static,
    {
        let core = self.core;
        DeferredOutcomeChain::from_deferred_outcome(Box::pin(async move {
            let value = core.await;
            match f(&value).await {
                Outcome::Failure(e) => Outcome::Failure(e),
                Outcome::Success(_) => Outcome::Success(value),
            }
        }))
    }
}

impl<T> std::fmt::Debug for DeferredChain<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeferredChain").finish_non_exhaustive()
    }
}
