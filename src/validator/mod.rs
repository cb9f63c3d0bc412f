//! Evaluator strategies
//!
//! This module provides three interchangeable engines that accumulate
//! checks and expose a single run operation:
//!
//! - [`LazyValidator`] — evaluates in registration order at `validate`
//!   time, stopping at the first failure.
//! - [`ParallelValidator`] — evaluates every check concurrently at
//!   `validate` time; the reported error is still the earliest-registered
//!   failure.
//! - [`EagerValidator`] — evaluates checks as they are added, freezing at
//!   the first failure; `validate` just reads the recorded verdict.
//!
//! All three share the [`Validator`] contract: running with zero
//! registered checks succeeds, and `with_options` leaves the receiver
//! untouched, returning a new evaluator.
//!
//! # Example
//!
//! ```
//! use attest::prelude::*;
//!
//! let validator = LazyValidator::new().with_options([
//!     not_empty(200).boxed(),
//!     not_empty("OK").boxed(),
//! ]);
//! assert_eq!(validator.validate(), Ok(()));
//! ```

mod eager;
mod lazy;
mod parallel;

pub use eager::EagerValidator;
pub use lazy::LazyValidator;
pub use parallel::ParallelValidator;

use crate::check::BoxedCheck;
use crate::error::ValidateError;

/// The common evaluator contract.
///
/// An evaluator accumulates checks and produces a single verdict: `Ok(())`
/// or exactly one [`ValidateError`]. When and how the checks run is the
/// strategy's business; which failure is reported is not — every strategy
/// reports the earliest-registered failure.
pub trait Validator: Sized {
    /// Return a new evaluator with `options` appended.
    ///
    /// The receiver is not modified, so earlier evaluator values remain
    /// valid snapshots.
    fn with_options<I>(&self, options: I) -> Self
    where
        I: IntoIterator<Item = BoxedCheck>;

    /// Run the accumulated checks per this strategy's rules.
    ///
    /// With zero registered checks this always succeeds.
    fn validate(&self) -> Result<(), ValidateError>;
}

// An absent evaluator is inert: additions are ignored and validation
// succeeds. This replaces the nil-receiver contract of pointer languages
// with an explicit `Option`-wrapped evaluator.
impl<V: Validator> Validator for Option<V> {
    fn with_options<I>(&self, options: I) -> Self
    where
        I: IntoIterator<Item = BoxedCheck>,
    {
        self.as_ref().map(|validator| validator.with_options(options))
    }

    fn validate(&self) -> Result<(), ValidateError> {
        match self {
            Some(validator) => validator.validate(),
            None => Ok(()),
        }
    }
}
