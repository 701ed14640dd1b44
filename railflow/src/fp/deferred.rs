//! Stage builders for the deferred-plain track.

use crate::deferred::{self, Deferred};

/// Builds a stage applying [`deferred::map`].
#[must_use]
pub fn map<T1, T2, M>(f: M) -> impl FnOnce(Deferred<T1>) -> Deferred<T2>
where
    T1: Send + 'static,
    T2: Send + 'static,
    M: FnOnce(T1) -> T2 + Send + 'static,
{
    move |d| deferred::map(d, f)
}

/// Builds a stage applying [`deferred::map_to_deferred`].
#[must_use]
pub fn map_to_deferred<T1, T2, M>(f: M) -> impl FnOnce(Deferred<T1>) -> Deferred<T2>
where
    T1: Send + 'static,
    T2: Send + 'static,
    M: FnOnce(T1) -> Deferred<T2> + Send + 'static,
{
    move |d| deferred::map_to_deferred(d, f)
}

/// Builds a stage applying [`deferred::tap`].
#[must_use]
pub fn tap<T, M>(f: M) -> impl FnOnce(Deferred<T>) -> Deferred<T>
where
    T: Send + 'static,
    M: FnOnce(&T) + Send + 'static,
{
    move |d| deferred::tap(d, f)
}

/// Builds a stage applying [`deferred::tap_to_deferred`].
#[must_use]
pub fn tap_to_deferred<T, D, M>(f: M) -> impl FnOnce(Deferred<T>) -> Deferred<T>
where
    T: Send + 'static,
    D: Send + 'static,
    M: FnOnce(&T) -> Deferred<D> + Send + 'static,
{
    move |d| deferred::tap_to_deferred(d, f)
}
