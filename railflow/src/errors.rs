//! Error types for the railflow crate.
//!
//! The algebra itself has no built-in error type: the `Failure` payload of
//! an [`crate::outcome::Outcome`] is the only failure channel it reacts
//! to. The one typed error lives at the extraction boundary, where a
//! caller asserts a specific variant.

use thiserror::Error;

/// Returned by the checked extractors [`crate::outcome::Outcome::into_success`]
/// and [`crate::outcome::Outcome::into_failure`] when the outcome holds the
/// other variant.
///
/// Carries the unexpected payload so extraction never loses information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected a {expected} outcome, found {found}")]
pub struct WrongVariantError<P> {
    /// The tag the caller asked for.
    pub expected: &'static str,
    /// The tag actually present.
    pub found: &'static str,
    /// The payload of the variant actually present.
    pub payload: P,
}

impl<P> WrongVariantError<P> {
    /// Creates a new wrong-variant error.
    #[must_use]
    pub const fn new(expected: &'static str, found: &'static str, payload: P) -> Self {
        Self {
            expected,
            found,
            payload,
        }
    }

    /// Recovers the unexpected payload.
    #[must_use]
    pub fn into_payload(self) -> P {
        self.payload
    }
}
