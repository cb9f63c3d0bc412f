//! Core check trait and logical combinators
//!
//! This module provides the foundational `Check` trait and the logical
//! combinators for composing checks.

use std::fmt;
use std::sync::Arc;

use crate::error::{ValidateError, NO_ALTERNATIVE_MATCHED};

/// A deferred, zero-argument validation check.
///
/// Evaluating a check runs its test once and returns `Ok(())` on success
/// or the check's failure value on failure. Checks are pure and reusable;
/// evaluating one never mutates it.
///
/// Closures of the right shape are checks too, via a blanket impl:
///
/// ```
/// use attest::check::Check;
/// use attest::error::INVALID_LENGTH;
///
/// let check = || if 3 < 5 { Ok(()) } else { Err(INVALID_LENGTH) };
/// assert_eq!(check.evaluate(), Ok(()));
/// ```
pub trait Check: Send + Sync {
    /// Run the check, returning the first failure if any.
    fn evaluate(&self) -> Result<(), ValidateError>;
}

// Blanket impl for closures
impl<F> Check for F
where
    F: Fn() -> Result<(), ValidateError> + Send + Sync,
{
    #[inline]
    fn evaluate(&self) -> Result<(), ValidateError> {
        self()
    }
}

/// A shared, type-erased check.
///
/// Evaluators store checks in this form. `Arc` rather than `Box` so that
/// the persistent evaluators can share the composed chain between
/// snapshots without cloning it.
pub type BoxedCheck = Arc<dyn Check>;

impl<C: Check + ?Sized> Check for Arc<C> {
    #[inline]
    fn evaluate(&self) -> Result<(), ValidateError> {
        (**self).evaluate()
    }
}

/// Extension trait for check combinators.
///
/// Provides method chaining for deriving new checks from existing ones.
/// All methods return concrete types.
pub trait CheckExt: Check + Sized {
    /// Replace any failure of this check with `error`.
    ///
    /// The original error is discarded, not wrapped.
    ///
    /// # Example
    ///
    /// ```
    /// use attest::check::{not_empty, Check, CheckExt};
    /// use attest::ValidateError;
    ///
    /// let err = ValidateError::new("Code", "code is required");
    /// let check = not_empty(0).with_error(err.clone());
    /// assert_eq!(check.evaluate(), Err(err));
    /// ```
    fn with_error(self, error: ValidateError) -> WithError<Self> {
        WithError { inner: self, error }
    }

    /// Invert this check's verdict.
    ///
    /// If the inner check fails, the derived check succeeds; if the inner
    /// check succeeds, the derived check fails with `error`.
    ///
    /// # Example
    ///
    /// ```
    /// use attest::check::{not_empty, Check, CheckExt};
    /// use attest::error::NOT_EMPTY_VALUE;
    ///
    /// let is_empty = not_empty("set").not(NOT_EMPTY_VALUE);
    /// assert_eq!(is_empty.evaluate(), Err(NOT_EMPTY_VALUE));
    /// ```
    fn not(self, error: ValidateError) -> Not<Self> {
        Not { inner: self, error }
    }

    /// Erase this check into a shared [`BoxedCheck`] handle.
    fn boxed(self) -> BoxedCheck
    where
        Self: 'static,
    {
        Arc::new(self)
    }
}

impl<C: Check + Sized> CheckExt for C {}

/// The atomic check: a boolean test paired with a fixed error.
///
/// Created by [`require`]. Every built-in primitive is a `Require`
/// instance over a specific test and a specific catalog error, so the
/// combinators can treat all of them uniformly.
#[derive(Clone)]
pub struct Require<F> {
    test: F,
    error: ValidateError,
}

/// Build a check from a boolean test and the error to produce on failure.
///
/// Invoking the check calls the test once; `true` maps to `Ok(())`,
/// `false` to `Err(error)`.
///
/// # Example
///
/// ```
/// use attest::check::{require, Check};
/// use attest::ValidateError;
///
/// let err = ValidateError::new("Extras", "extras must be present");
/// let extras: Option<i32> = None;
/// let check = require(move || extras.is_some(), err.clone());
/// assert_eq!(check.evaluate(), Err(err));
/// ```
pub fn require<F>(test: F, error: ValidateError) -> Require<F>
where
    F: Fn() -> bool + Send + Sync,
{
    Require { test, error }
}

impl<F> Check for Require<F>
where
    F: Fn() -> bool + Send + Sync,
{
    fn evaluate(&self) -> Result<(), ValidateError> {
        if (self.test)() {
            Ok(())
        } else {
            Err(self.error.clone())
        }
    }
}

impl<F> fmt::Debug for Require<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Require")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

/// Error-override combinator, created by [`CheckExt::with_error`].
#[derive(Clone, Debug)]
pub struct WithError<C> {
    inner: C,
    error: ValidateError,
}

impl<C: Check> Check for WithError<C> {
    fn evaluate(&self) -> Result<(), ValidateError> {
        match self.inner.evaluate() {
            Ok(()) => Ok(()),
            Err(_) => Err(self.error.clone()),
        }
    }
}

/// Negation combinator, created by [`CheckExt::not`].
#[derive(Clone, Debug)]
pub struct Not<C> {
    inner: C,
    error: ValidateError,
}

impl<C: Check> Check for Not<C> {
    fn evaluate(&self) -> Result<(), ValidateError> {
        match self.inner.evaluate() {
            Ok(()) => Err(self.error.clone()),
            Err(_) => Ok(()),
        }
    }
}

/// Short-circuit conjunction over a list of checks, created by [`and`].
#[derive(Clone)]
pub struct And {
    checks: Vec<BoxedCheck>,
}

/// Combine checks with AND logic: the first failure wins.
///
/// Checks are evaluated in the given order; later checks are never run
/// once one has failed. An empty list always succeeds. An absent entry is
/// expressed as `Option<BoxedCheck>` and skipped by flattening at the
/// call boundary:
///
/// ```
/// use attest::check::{and, not_empty, Check, CheckExt};
///
/// let maybe: Option<attest::check::BoxedCheck> = None;
/// let check = and([maybe, Some(not_empty(1).boxed())].into_iter().flatten());
/// assert_eq!(check.evaluate(), Ok(()));
/// ```
pub fn and<I>(checks: I) -> And
where
    I: IntoIterator<Item = BoxedCheck>,
{
    And {
        checks: checks.into_iter().collect(),
    }
}

impl Check for And {
    fn evaluate(&self) -> Result<(), ValidateError> {
        for check in &self.checks {
            check.evaluate()?;
        }
        Ok(())
    }
}

impl fmt::Debug for And {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("And")
            .field("checks", &self.checks.len())
            .finish()
    }
}

/// Disjunction over a list of checks, created by [`or`].
#[derive(Clone)]
pub struct Or {
    checks: Vec<BoxedCheck>,
}

/// Combine checks with OR logic: the first success wins.
///
/// Checks are evaluated in the given order and evaluation stops at the
/// first success. If every check fails, or the list is empty, the result
/// is [`NO_ALTERNATIVE_MATCHED`](crate::error::NO_ALTERNATIVE_MATCHED) —
/// the individual branch errors are discarded, not aggregated.
///
/// # Example
///
/// ```
/// use attest::check::{and, is_empty, not_empty, or, Check, CheckExt};
/// use attest::error::NO_ALTERNATIVE_MATCHED;
///
/// // Both must be empty, or both must be set.
/// let check = or([
///     and([is_empty("optional").boxed(), is_empty("").boxed()]).boxed(),
///     and([not_empty("optional").boxed(), not_empty("").boxed()]).boxed(),
/// ]);
/// assert_eq!(check.evaluate(), Err(NO_ALTERNATIVE_MATCHED));
/// ```
pub fn or<I>(checks: I) -> Or
where
    I: IntoIterator<Item = BoxedCheck>,
{
    Or {
        checks: checks.into_iter().collect(),
    }
}

impl Check for Or {
    fn evaluate(&self) -> Result<(), ValidateError> {
        for check in &self.checks {
            if check.evaluate().is_ok() {
                return Ok(());
            }
        }
        Err(NO_ALTERNATIVE_MATCHED)
    }
}

impl fmt::Debug for Or {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Or")
            .field("checks", &self.checks.len())
            .finish()
    }
}
