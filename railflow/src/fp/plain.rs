//! Stage builders for the plain synchronous track.

/// Lifts a plain function into a pipeline stage. The identity lift: a
/// plain function already is a stage, so this exists for symmetry with
/// the richer tracks and to make pipelines read uniformly.
#[must_use]
pub fn map<T1, T2, M>(f: M) -> impl FnOnce(T1) -> T2
where
    M: FnOnce(T1) -> T2,
{
    f
}

/// Builds a stage that runs `f` for its side effect and passes the value
/// through unchanged.
#[must_use]
pub fn tap<T, M>(f: M) -> impl FnOnce(T) -> T
where
    M: FnOnce(&T),
{
    move |value| {
        f(&value);
        value
    }
}
