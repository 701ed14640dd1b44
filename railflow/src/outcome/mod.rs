//! The two-variant outcome model and its synchronous algebra.
//!
//! [`Outcome`] is the railway at rest: a computation either stayed on the
//! success track or switched to the failure track, and the variant tag is
//! the only thing the algebra ever inspects. Payloads are opaque to every
//! operation in this module.

mod wire;


use crate::errors::WrongVariantError;

/// The tag literal carried by [`Outcome::Failure`].
pub const FAILURE_TAG: &str = "failure";

/// The tag literal carried by [`Outcome::Success`].
pub const SUCCESS_TAG: &str = "success";

/// The result of a fallible computation: exactly one of two tagged cases.
///
/// Unlike a thrown error, a `Failure` is an ordinary value that later
/// stages can observe, transform, or recover from. Success-targeted
/// operations pass a `Failure` through unchanged, so a failure produced
/// early in a chain survives to the end without any stage in between
/// having to mention it.
///
/// The failure payload type `F` is chosen per call site and never
/// interpreted here. `Outcome` carries no panic or cancellation channel;
/// panics raised by supplied closures propagate untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Outcome<F, S> {
    /// The computation left the success track, carrying why.
    Failure(F),
    /// The computation stayed on the success track, carrying its value.
    Success(S),
}

impl<F, S> Outcome<F, S> {
    /// Returns `true` for the `Failure` variant.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns `true` for the `Success` variant.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The wire tag of this outcome: `"failure"` or `"success"`.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Failure(_) => FAILURE_TAG,
            Self::Success(_) => SUCCESS_TAG,
        }
    }

    /// The failure payload, if this is a `Failure`.
    #[must_use]
    pub const fn failure_value(&self) -> Option<&F> {
        match self {
            Self::Failure(e) => Some(e),
            Self::Success(_) => None,
        }
    }

    /// The success payload, if this is a `Success`.
    #[must_use]
    pub const fn success_value(&self) -> Option<&S> {
        match self {
            Self::Failure(_) => None,
            Self::Success(s) => Some(s),
        }
    }

    /// Extracts the failure payload, or reports which variant was found.
    ///
    /// The unexpected success payload rides along in the error so it is
    /// never silently dropped.
    pub fn into_failure(self) -> Result<F, WrongVariantError<S>> {
        match self {
            Self::Failure(e) => Ok(e),
            Self::Success(s) => Err(WrongVariantError::new(FAILURE_TAG, SUCCESS_TAG, s)),
        }
    }

    /// Extracts the success payload, or reports which variant was found.
    pub fn into_success(self) -> Result<S, WrongVariantError<F>> {
        match self {
            Self::Failure(e) => Err(WrongVariantError::new(SUCCESS_TAG, FAILURE_TAG, e)),
            Self::Success(s) => Ok(s),
        }
    }

    /// Applies `f` to the success payload; failures pass through unchanged.
    ///
    /// This is the functor map on the success channel:
    /// `o.map_success(|x| x)` equals `o`, and mapping twice equals mapping
    /// the composition once.
    #[must_use]
    pub fn map_success<S2, M>(self, f: M) -> Outcome<F, S2>
    where
        M: FnOnce(S) -> S2,
    {
        match self {
            Self::Failure(e) => Outcome::Failure(e),
            Self::Success(s) => Outcome::Success(f(s)),
        }
    }

    /// Applies `f` to the failure payload; successes pass through unchanged.
    #[must_use]
    pub fn map_failure<F2, M>(self, f: M) -> Outcome<F2, S>
    where
        M: FnOnce(F) -> F2,
    {
        match self {
            Self::Failure(e) => Outcome::Failure(f(e)),
            Self::Success(s) => Outcome::Success(s),
        }
    }

    /// Chains an outcome-returning step on the success channel (monadic bind).
    ///
    /// On `Success(s)` the result is `f(s)`; on `Failure(e)` the step never
    /// runs and the failure is widened into the step's failure type via
    /// [`Into`] — the Rust rendering of a failure-type union.
    #[must_use]
    pub fn map_success_to_outcome<F2, S2, M>(self, f: M) -> Outcome<F2, S2>
    where
        F: Into<F2>,
        M: FnOnce(S) -> Outcome<F2, S2>,
    {
        match self {
            Self::Failure(e) => Outcome::Failure(e.into()),
            Self::Success(s) => f(s),
        }
    }

    /// Chains an outcome-returning step on the failure channel.
    ///
    /// The mirror image of [`Outcome::map_success_to_outcome`]: the step
    /// may recover (by returning `Success`) or replace the failure.
    #[must_use]
    pub fn map_failure_to_outcome<F2, S2, M>(self, f: M) -> Outcome<F2, S2>
    where
        S: Into<S2>,
        M: FnOnce(F) -> Outcome<F2, S2>,
    {
        match self {
            Self::Failure(e) => f(e),
            Self::Success(s) => Outcome::Success(s.into()),
        }
    }

    /// Runs `f` for its side effect on the success payload, then returns
    /// `self` unchanged.
    #[must_use]
    pub fn tap_success<M>(self, f: M) -> Self
    where
        M: FnOnce(&S),
    {
        if let Self::Success(s) = &self {
            f(s);
        }
        self
    }

    /// Runs `f` for its side effect on the failure payload, then returns
    /// `self` unchanged.
    #[must_use]
    pub fn tap_failure<M>(self, f: M) -> Self
    where
        M: FnOnce(&F),
    {
        if let Self::Failure(e) = &self {
            f(e);
        }
        self
    }

    /// Runs a fallible side effect on the success payload.
    ///
    /// The one place a side effect may change the chain's trajectory: if
    /// `f` fails, that failure replaces the success; if `f` succeeds, its
    /// payload is discarded and the original success is kept. Models
    /// "persist the value, aborting on persistence failure, without
    /// replacing the value being persisted".
    #[must_use]
    pub fn tap_success_to_outcome<F2, D, M>(self, f: M) -> Outcome<F2, S>
    where
        F: Into<F2>,
        M: FnOnce(&S) -> Outcome<F2, D>,
    {
        match self {
            Self::Failure(e) => Outcome::Failure(e.into()),
            Self::Success(s) => match f(&s) {
                Outcome::Failure(e) => Outcome::Failure(e),
                Outcome::Success(_) => Outcome::Success(s),
            },
        }
    }

    /// Runs a fallible side effect on the failure payload.
    ///
    /// If `f` succeeds, its success payload replaces the failure
    /// (a recovery); if `f` itself fails, the new failure is discarded and
    /// the original failure is kept.
    #[must_use]
    pub fn tap_failure_to_outcome<D, S2, M>(self, f: M) -> Outcome<F, S2>
    where
        S: Into<S2>,
        M: FnOnce(&F) -> Outcome<D, S2>,
    {
        match self {
            Self::Failure(e) => match f(&e) {
                Outcome::Failure(_) => Outcome::Failure(e),
                Outcome::Success(s) => Outcome::Success(s),
            },
            Self::Success(s) => Outcome::Success(s.into()),
        }
    }
}

impl<F, S> From<Result<S, F>> for Outcome<F, S> {
    fn from(result: Result<S, F>) -> Self {
        match result {
            Ok(s) => Self::Success(s),
            Err(e) => Self::Failure(e),
        }
    }
}

impl<F, S> From<Outcome<F, S>> for Result<S, F> {
    fn from(outcome: Outcome<F, S>) -> Self {
        match outcome {
            Outcome::Failure(e) => Err(e),
            Outcome::Success(s) => Ok(s),
        }
    }
}
