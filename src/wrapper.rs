//! Generic single-value wrapper
//!
//! [`ValueValidator<T>`] binds a composed value check to a value type, so
//! the same rule set can be re-run against any number of supplied values.

use std::fmt;
use std::sync::Arc;

use crate::check::value::{and, BoxedValueCheck, ValueCheck, ValueCheckExt};
use crate::check::{BoxedCheck, CheckExt};
use crate::error::ValidateError;

/// A reusable, composed validation rule over values of type `T`.
///
/// Starts at the identity check (always succeeds); each
/// [`with_options`](ValueValidator::with_options) call ANDs the new
/// checks onto the composed check. Unlike the evaluators' copy-on-add
/// persistence, the wrapper is a single mutable accumulator — adding
/// options consumes it and there is no earlier snapshot to go back to.
/// The asymmetry is intentional: evaluators are registered once and
/// snapshotted, a wrapper is a rule set built once and applied many
/// times.
///
/// [`validate`](ValueValidator::validate) re-runs every check against the
/// supplied value on each call; nothing is memoized.
///
/// # Example
///
/// ```
/// use attest::check::value::{self, ValueCheckExt};
/// use attest::error::DEFAULT_VALUE;
/// use attest::ValueValidator;
///
/// let rule = ValueValidator::new().with_options([value::not_default::<i32>().boxed()]);
/// assert_eq!(rule.validate(&200), Ok(()));
/// assert_eq!(rule.validate(&0), Err(DEFAULT_VALUE));
/// ```
pub struct ValueValidator<T> {
    check: Option<BoxedValueCheck<T>>,
}

impl<T> ValueValidator<T> {
    /// Create a wrapper holding the identity check: every value passes
    /// until options are added.
    pub fn new() -> Self {
        Self { check: None }
    }
}

impl<T: Send + Sync + 'static> ValueValidator<T> {
    /// AND the given checks onto the composed check.
    ///
    /// Consumes and returns the wrapper for chaining; the previous
    /// composition is absorbed, not snapshotted.
    pub fn with_options<I>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = BoxedValueCheck<T>>,
    {
        let added = and(options);
        self.check = Some(match self.check.take() {
            Some(existing) => and([existing, added.boxed()]).boxed(),
            None => added.boxed(),
        });
        self
    }

    /// Run the composed check against `value`.
    pub fn validate(&self, value: &T) -> Result<(), ValidateError> {
        match &self.check {
            Some(check) => check.evaluate(value),
            None => Ok(()),
        }
    }

    /// Bind the composed check to a fixed value, producing a
    /// zero-argument check for embedding in the
    /// [`and`](crate::check::and)/[`or`](crate::check::or) combinators.
    ///
    /// The wrapper itself is unaffected and can keep validating other
    /// values.
    ///
    /// # Example
    ///
    /// ```
    /// use attest::check::value::{self, ValueCheckExt};
    /// use attest::check::{or, Check};
    /// use attest::ValueValidator;
    ///
    /// let rule = ValueValidator::new().with_options([value::not_default::<i32>().boxed()]);
    /// let either = or([rule.to_option(0), rule.to_option(200)]);
    /// assert_eq!(either.evaluate(), Ok(()));
    /// ```
    pub fn to_option(&self, value: T) -> BoxedCheck {
        match &self.check {
            Some(check) => {
                let check = Arc::clone(check);
                (move || check.evaluate(&value)).boxed()
            }
            None => {
                let pass = || -> Result<(), ValidateError> { Ok(()) };
                pass.boxed()
            }
        }
    }
}

impl<T> Default for ValueValidator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ValueValidator<T> {
    fn clone(&self) -> Self {
        Self {
            check: self.check.clone(),
        }
    }
}

impl<T> fmt::Debug for ValueValidator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueValidator")
            .field("registered", &self.check.is_some())
            .finish()
    }
}

// A wrapper is itself a value check, and an absent wrapper behaves as an
// already-succeeded one.
impl<T: Send + Sync + 'static> ValueCheck<T> for ValueValidator<T> {
    fn evaluate(&self, value: &T) -> Result<(), ValidateError> {
        self.validate(value)
    }
}

impl<T: Send + Sync + 'static> ValueCheck<T> for Option<ValueValidator<T>> {
    fn evaluate(&self, value: &T) -> Result<(), ValidateError> {
        match self {
            Some(wrapper) => wrapper.validate(value),
            None => Ok(()),
        }
    }
}
