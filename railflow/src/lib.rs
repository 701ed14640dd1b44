//! # Railflow
//!
//! Typesafe railway oriented programming: represent a computation's
//! outcome as one of exactly two tagged cases instead of throwing, and
//! compose outcome-producing steps across four execution tracks — plain
//! values, deferred values, outcomes, and deferred outcomes.
//!
//! Two equivalent composition surfaces are provided:
//!
//! - **Chaining**: immutable adapter values with fluent methods
//!   ([`chain`])
//! - **Pipelines**: point-free stage functions folded left to right
//!   ([`fp`] + [`pipeline`])
//!
//! ## Quick Start
//!
//! ```rust
//! use railflow::chain::Chain;
//! use railflow::outcome::Outcome;
//!
//! fn lookup_user(email: &str) -> Outcome<String, u64> {
//!     match email {
//!         "a@x.com" => Outcome::Success(1),
//!         _ => Outcome::Failure("no user".to_string()),
//!     }
//! }
//!
//! let fee = Chain::of("a@x.com")
//!     .map_to_outcome(lookup_user)
//!     .map_success(|subscription| subscription as f64 * 0.1)
//!     .into_outcome();
//! assert_eq!(fee, Outcome::Success(0.1));
//! ```
//!
//! Once a step fails, every later success-targeted step is skipped and
//! the failure rides through unchanged; only failure-targeted steps can
//! observe or recover it. Panics raised by supplied plain functions are
//! deliberately not caught — converting a panic into a `Failure` is the
//! caller's job, so the failure channel stays explicit in the types.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod chain;
pub mod deferred;
pub mod deferred_outcome;
pub mod errors;
pub mod fp;
pub mod outcome;
pub mod pipeline;
pub mod trace;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::chain::{Chain, DeferredChain, DeferredOutcomeChain, OutcomeChain};
    pub use crate::deferred::Deferred;
    pub use crate::deferred_outcome::DeferredOutcome;
    pub use crate::errors::WrongVariantError;
    pub use crate::outcome::Outcome;
    pub use crate::pipeline::{compose, pipe, Compose, Pipeline};
}
