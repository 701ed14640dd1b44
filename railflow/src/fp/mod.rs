//! Point-free combinator builders for pipeline composition.
//!
//! Each submodule mirrors one track's algebra, but instead of applying an
//! operation directly it returns the operation as a stage function, ready
//! to slot into [`crate::pipeline::pipe`] or
//! [`crate::pipeline::compose`]. The builders are thin delegations to the
//! track modules, so the fluent and point-free surfaces are the same
//! algebra by construction.
//!
//! ```
//! use railflow::fp;
//! use railflow::outcome::Outcome;
//! use railflow::pipeline::pipe;
//!
//! let fee = pipe((
//!     Outcome::<String, i32>::Success(42),
//!     fp::outcome::map_success(|cents| f64::from(cents) / 10.0),
//! ));
//! assert_eq!(fee, Outcome::Success(4.2));
//! ```

pub mod deferred;
pub mod deferred_outcome;
pub mod outcome;
pub mod plain;

#[cfg(test)]
mod fp_tests;
