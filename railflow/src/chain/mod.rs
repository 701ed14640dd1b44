//! Fluent chaining adapters, one per execution track.
//!
//! Each adapter is an immutable holder of one core payload; every method
//! consumes the receiver and returns a fresh adapter on whichever track
//! the operation lands on. The adapters add no semantics of their own —
//! they are thin delegations to the track algebras, so a method chain and
//! the equivalent point-free pipeline compute identical results.
//!
//! ```
//! use railflow::chain::Chain;
//! use railflow::outcome::Outcome;
//!
//! let outcome = Chain::of("Hello, world!")
//!     .map(str::len)
//!     .map_to_outcome(|n| -> Outcome<String, usize> { Outcome::Success(n) })
//!     .map_success(|n| n * 2)
//!     .into_outcome();
//! assert_eq!(outcome, Outcome::Success(26));
//! ```

mod deferred;
mod deferred_outcome;
mod outcome;
mod plain;

#[cfg(test)]
mod chain_tests;

pub use deferred::DeferredChain;
pub use deferred_outcome::DeferredOutcomeChain;
pub use outcome::OutcomeChain;
pub use plain::Chain;
