//! The deferred-value algebra: lifting plain functions over values that do
//! not exist yet.
//!
//! A [`Deferred`] is a first-class handle to an eventual value, scheduled
//! and driven entirely by the host runtime. Every combinator here builds a
//! new handle without blocking; the only suspension points in the crate
//! are the explicit awaits inside these combinators. A fault or
//! cancellation raised by the underlying future propagates to the awaiter
//! untouched.


use std::future::Future;

use futures::future::BoxFuture;

/// A handle to a value of type `T` that a host-runtime task will
/// eventually produce.
///
/// `Deferred<T>` is itself a [`Future`], so it already is the
/// host-awaitable form: handing it to the runtime (or `.await`ing it) is
/// the normalization step, no adapter required.
pub type Deferred<T> = BoxFuture<'static, T>;

/// Wraps an already-known value as an immediately-resolving [`Deferred`].
#[must_use]
pub fn of<T>(value: T) -> Deferred<T>
where
    T: Send + 'static,
{
    Box::pin(futures::future::ready(value))
}

/// Normalizes any host-runtime future into a [`Deferred`].
#[must_use]
pub fn from_future<Fut>(future: Fut) -> Deferred<Fut::Output>
where
    Fut: Future + Send + 'static,
{
    Box::pin(future)
}

/// Schedules `f` to transform the eventual value; never blocks the caller.
#[must_use]
pub fn map<T1, T2, M>(deferred: Deferred<T1>, f: M) -> Deferred<T2>
where
    T1: Send + 'static,
    T2: Send + 'static,
    M: FnOnce(T1) -> T2 + Send + 'static,
{
    Box::pin(async move { f(deferred.await) })
}

/// Chains a deferred-returning step without nesting (monadic bind).
#[must_use]
pub fn map_to_deferred<T1, T2, M>(deferred: Deferred<T1>, f: M) -> Deferred<T2>
where
    T1: Send + 'static,
    T2: Send + 'static,
    M: FnOnce(T1) -> Deferred<T2> + Send + 'static,
{
    Box::pin(async move { f(deferred.await).await })
}

/// Schedules a side effect against the eventual value, preserving it.
#[must_use]
pub fn tap<T, M>(deferred: Deferred<T>, f: M) -> Deferred<T>
where
    T: Send + 'static,
    M: FnOnce(&T) + Send + 'static,
{
    Box::pin(async move {
        let value = deferred.await;
        f(&value);
        value
    })
}

/// Schedules a deferred side effect against the eventual value, awaiting
/// the effect before yielding the original value.
#[must_use]
pub fn tap_to_deferred<T, D, M>(deferred: Deferred<T>, f: M) -> Deferred<T>
where
    T: Send + 'static,
    D: Send + 'static,
    M: FnOnce(&T) -> Deferred<D> + Send + 'static,
{
    Box::pin(async move {
        let value = deferred.await;
        f(&value).await;
        value
    })
}
