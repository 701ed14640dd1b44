//! Left-to-right pipeline evaluation over fixed-arity stage tuples.
//!
//! A pipeline literal is the tuple `(start, stage_1, .., stage_n)` for
//! `0 <= n <= 7`; [`pipe`] folds it strictly left to right with no
//! branching, early exit, or retry. A stage that wants outcome-aware
//! short-circuiting must itself be built from the track algebras (for
//! example via [`crate::fp::outcome::map_success_to_outcome`]), so that
//! skipping is the failure tag propagating through later stages, never
//! control flow here. [`compose`] is [`pipe`] without a bound start
//! value, for reuse at multiple call sites.
//!
//! The arity bound exists only to keep the tuple impls enumerable; it is
//! not a limit of the algebra. Type compatibility between consecutive
//! stages is checked entirely at compile time.


/// A start value followed by stage functions, evaluated left to right.
///
/// Implemented for tuples `(T0,)` through `(T0, F1, .., F7)` where stage
/// `i` is `FnOnce(T(i-1)) -> Ti`.
pub trait Pipeline {
    /// The type produced by the final stage (the start type for an empty
    /// pipeline).
    type Output;

    /// Evaluates the pipeline: `acc = start; acc = stage(acc); ..`.
    fn pipe(self) -> Self::Output;
}

/// An ordered tuple of composable stage functions.
///
/// Implemented for tuples `(F1,)` through `(F1, .., F7)`; `Input` is the
/// parameter type of the first stage.
pub trait Compose<Input> {
    /// The type produced by the final stage.
    type Output;

    /// Collapses the stages into one function, without binding a start
    /// value.
    fn compose(self) -> impl FnOnce(Input) -> Self::Output;
}

/// Evaluates a pipeline tuple strictly left to right.
pub fn pipe<P>(pipeline: P) -> P::Output
where
    P: Pipeline,
{
    pipeline.pipe()
}

/// Collapses a tuple of stages into a single reusable function.
pub fn compose<I, C>(stages: C) -> impl FnOnce(I) -> C::Output
where
    C: Compose<I>,
{
    stages.compose()
}

macro_rules! pipeline_impl {
    ($T0:ident => $Out:ident $(, $f:ident: $F:ident, $In:ident -> $To:ident)*) => {
        impl<$T0 $(, $To, $F)*> Pipeline for ($T0, $($F,)*)
        where
            $($F: FnOnce($In) -> $To,)*
        {
            type Output = $Out;

            fn pipe(self) -> $Out {
                let (acc, $($f,)*) = self;
                $(let acc = $f(acc);)*
                acc
            }
        }
    };
}

macro_rules! compose_impl {
    ($T0:ident => $Out:ident $(, $f:ident: $F:ident, $In:ident -> $To:ident)*) => {
        impl<$T0 $(, $To, $F)*> Compose<$T0> for ($($F,)*)
        where
            $($F: FnOnce($In) -> $To,)*
        {
            type Output = $Out;

            fn compose(self) -> impl FnOnce($T0) -> $Out {
                let ($($f,)*) = self;
                move |acc| {
                    $(let acc = $f(acc);)*
                    acc
                }
            }
        }
    };
}

pipeline_impl!(T0 => T0);
pipeline_impl!(T0 => T1, f1: F1, T0 -> T1);
pipeline_impl!(T0 => T2, f1: F1, T0 -> T1, f2: F2, T1 -> T2);
pipeline_impl!(T0 => T3, f1: F1, T0 -> T1, f2: F2, T1 -> T2, f3: F3, T2 -> T3);
pipeline_impl!(T0 => T4, f1: F1, T0 -> T1, f2: F2, T1 -> T2, f3: F3, T2 -> T3, f4: F4, T3 -> T4);
pipeline_impl!(T0 => T5, f1: F1, T0 -> T1, f2: F2, T1 -> T2, f3: F3, T2 -> T3, f4: F4, T3 -> T4, f5: F5, T4 -> T5);
pipeline_impl!(T0 => T6, f1: F1, T0 -> T1, f2: F2, T1 -> T2, f3: F3, T2 -> T3, f4: F4, T3 -> T4, f5: F5, T4 -> T5, f6: F6, T5 -> T6);
pipeline_impl!(T0 => T7, f1: F1, T0 -> T1, f2: F2, T1 -> T2, f3: F3, T2 -> T3, f4: F4, T3 -> T4, f5: F5, T4 -> T5, f6: F6, T5 -> T6, f7: F7, T6 -> T7);

compose_impl!(T0 => T1, f1: F1, T0 -> T1);
compose_impl!(T0 => T2, f1: F1, T0 -> T1, f2: F2, T1 -> T2);
compose_impl!(T0 => T3, f1: F1, T0 -> T1, f2: F2, T1 -> T2, f3: F3, T2 -> T3);
compose_impl!(T0 => T4, f1: F1, T0 -> T1, f2: F2, T1 -> T2, f3: F3, T2 -> T3, f4: F4, T3 -> T4);
compose_impl!(T0 => T5, f1: F1, T0 -> T1, f2: F2, T1 -> T2, f3: F3, T2 -> T3, f4: F4, T3 -> T4, f5: F5, T4 -> T5);
compose_impl!(T0 => T6, f1: F1, T0 -> T1, f2: F2, T1 -> T2, f3: F3, T2 -> T3, f4: F4, T3 -> T4, f5: F5, T4 -> T5, f6: F6, T5 -> T6);
compose_impl!(T0 => T7, f1: F1, T0 -> T1, f2: F2, T1 -> T2, f3: F3, T2 -> T3, f4: F4, T3 -> T4, f5: F5, T4 -> T5, f6: F6, T5 -> T6, f7: F7, T6 -> T7);
