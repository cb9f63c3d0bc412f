//! Value-parameterized checks
//!
//! The checks in the rest of this module tree capture their subject at
//! construction time. The `value` module is the other shape: a check over
//! a *supplied* value, `(&T) -> Result`, reusable across many values of
//! the same type. [`crate::ValueValidator`] composes these, and
//! [`crate::ValueValidator::to_option`] adapts a composed value check
//! back into a zero-argument [`Check`](super::Check).
//!
//! # Example
//!
//! ```
//! use attest::check::value::{self, ValueCheck};
//! use attest::error::DEFAULT_VALUE;
//!
//! let check = value::not_default::<i32>();
//! assert_eq!(check.evaluate(&200), Ok(()));
//! assert_eq!(check.evaluate(&0), Err(DEFAULT_VALUE));
//! ```

use std::fmt;
use std::sync::Arc;

use crate::error::{
    ValidateError, DEFAULT_VALUE, ELEMENT_NOT_FOUND, EMPTY_VALUE, INVALID_LENGTH,
    NOT_DEFAULT_VALUE, NOT_EMPTY_VALUE, NO_ALTERNATIVE_MATCHED,
};

/// A validation check over a supplied value of type `T`.
///
/// Like [`Check`](super::Check) but parameterized: the same check value
/// can be evaluated against many subjects. Closures of shape
/// `Fn(&T) -> Result<(), ValidateError>` are value checks via a blanket
/// impl.
pub trait ValueCheck<T: ?Sized>: Send + Sync {
    /// Run the check against `value`, returning the first failure if any.
    fn evaluate(&self, value: &T) -> Result<(), ValidateError>;
}

// Blanket impl for closures
impl<T: ?Sized, F> ValueCheck<T> for F
where
    F: Fn(&T) -> Result<(), ValidateError> + Send + Sync,
{
    #[inline]
    fn evaluate(&self, value: &T) -> Result<(), ValidateError> {
        self(value)
    }
}

/// A shared, type-erased value check.
pub type BoxedValueCheck<T> = Arc<dyn ValueCheck<T>>;

impl<T: ?Sized, C: ValueCheck<T> + ?Sized> ValueCheck<T> for Arc<C> {
    #[inline]
    fn evaluate(&self, value: &T) -> Result<(), ValidateError> {
        (**self).evaluate(value)
    }
}

/// Extension trait for value checks.
pub trait ValueCheckExt<T: ?Sized>: ValueCheck<T> + Sized {
    /// Erase this check into a shared [`BoxedValueCheck`] handle.
    fn boxed(self) -> BoxedValueCheck<T>
    where
        Self: 'static,
        T: 'static,
    {
        Arc::new(self)
    }
}

impl<T: ?Sized, C: ValueCheck<T> + Sized> ValueCheckExt<T> for C {}

/// The atomic value check: a boolean test paired with a fixed error.
#[derive(Clone)]
pub struct Require<F> {
    test: F,
    error: ValidateError,
}

/// Build a value check from a boolean test and the error to produce on
/// failure.
///
/// # Example
///
/// ```
/// use attest::check::value::{self, ValueCheck};
/// use attest::ValidateError;
///
/// let err = ValidateError::new("Code", "code must be set");
/// let check = value::require(|code: &i32| *code != 0, err.clone());
/// assert_eq!(check.evaluate(&200), Ok(()));
/// assert_eq!(check.evaluate(&0), Err(err));
/// ```
pub fn require<T, F>(test: F, error: ValidateError) -> Require<F>
where
    T: ?Sized,
    F: Fn(&T) -> bool + Send + Sync,
{
    Require { test, error }
}

impl<T: ?Sized, F> ValueCheck<T> for Require<F>
where
    F: Fn(&T) -> bool + Send + Sync,
{
    fn evaluate(&self, value: &T) -> Result<(), ValidateError> {
        if (self.test)(value) {
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

/// Check that the supplied value differs from its type's default.
///
/// Fails with [`DEFAULT_VALUE`](crate::error::DEFAULT_VALUE).
pub fn not_default<T>() -> Require<impl Fn(&T) -> bool + Send + Sync>
where
    T: Default + PartialEq + Send + Sync,
{
    require(|value: &T| *value != T::default(), DEFAULT_VALUE)
}

/// Check that the supplied value equals its type's default.
///
/// Fails with [`NOT_DEFAULT_VALUE`](crate::error::NOT_DEFAULT_VALUE).
pub fn is_default<T>() -> Require<impl Fn(&T) -> bool + Send + Sync>
where
    T: Default + PartialEq + Send + Sync,
{
    require(|value: &T| *value == T::default(), NOT_DEFAULT_VALUE)
}

/// Check that the supplied collection is empty.
///
/// Fails with [`NOT_EMPTY_VALUE`](crate::error::NOT_EMPTY_VALUE).
pub fn is_empty<V, T>() -> Require<impl Fn(&V) -> bool + Send + Sync>
where
    V: AsRef<[T]> + Send + Sync,
    T: Send + Sync,
{
    require(|value: &V| value.as_ref().is_empty(), NOT_EMPTY_VALUE)
}

/// Check that the supplied collection is not empty.
///
/// Fails with [`EMPTY_VALUE`](crate::error::EMPTY_VALUE).
pub fn not_empty<V, T>() -> Require<impl Fn(&V) -> bool + Send + Sync>
where
    V: AsRef<[T]> + Send + Sync,
    T: Send + Sync,
{
    require(|value: &V| !value.as_ref().is_empty(), EMPTY_VALUE)
}

/// Check that the supplied collection's length is within `min..=max`.
///
/// Fails with [`INVALID_LENGTH`](crate::error::INVALID_LENGTH).
///
/// # Example
///
/// ```
/// use attest::check::value::{self, ValueCheck};
/// use attest::error::INVALID_LENGTH;
///
/// let check = value::length_between::<Vec<i32>, i32>(1, 3);
/// assert_eq!(check.evaluate(&vec![1, 2, 3]), Ok(()));
/// assert_eq!(check.evaluate(&vec![]), Err(INVALID_LENGTH));
/// ```
pub fn length_between<V, T>(min: usize, max: usize) -> Require<impl Fn(&V) -> bool + Send + Sync>
where
    V: AsRef<[T]> + Send + Sync,
    T: Send + Sync,
{
    require(
        move |value: &V| {
            let len = value.as_ref().len();
            len >= min && len <= max
        },
        INVALID_LENGTH,
    )
}

/// Check that the supplied collection contains `element`.
///
/// Fails with [`ELEMENT_NOT_FOUND`](crate::error::ELEMENT_NOT_FOUND).
pub fn contains<V, T>(element: T) -> Require<impl Fn(&V) -> bool + Send + Sync>
where
    V: AsRef<[T]> + Send + Sync,
    T: PartialEq + Send + Sync,
{
    require(move |value: &V| value.as_ref().contains(&element), ELEMENT_NOT_FOUND)
}

/// Short-circuit conjunction over value checks, created by [`and`].
pub struct And<T> {
    checks: Vec<BoxedValueCheck<T>>,
}

/// Combine value checks with AND logic: the first failure wins.
///
/// Checks run in the given order against the same supplied value; an
/// empty list always succeeds.
pub fn and<T, I>(checks: I) -> And<T>
where
    I: IntoIterator<Item = BoxedValueCheck<T>>,
{
    And {
        checks: checks.into_iter().collect(),
    }
}

impl<T> ValueCheck<T> for And<T> {
    fn evaluate(&self, value: &T) -> Result<(), ValidateError> {
        for check in &self.checks {
            check.evaluate(value)?;
        }
        Ok(())
    }
}

impl<T> Clone for And<T> {
    fn clone(&self) -> Self {
        And {
            checks: self.checks.clone(),
        }
    }
}

impl<T> fmt::Debug for And<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("And")
            .field("checks", &self.checks.len())
            .finish()
    }
}

/// Disjunction over value checks, created by [`or`].
pub struct Or<T> {
    checks: Vec<BoxedValueCheck<T>>,
}

/// Combine value checks with OR logic: the first success wins.
///
/// If every check fails, or the list is empty, the result is
/// [`NO_ALTERNATIVE_MATCHED`](crate::error::NO_ALTERNATIVE_MATCHED); the
/// branch errors are discarded.
pub fn or<T, I>(checks: I) -> Or<T>
where
    I: IntoIterator<Item = BoxedValueCheck<T>>,
{
    Or {
        checks: checks.into_iter().collect(),
    }
}

impl<T> ValueCheck<T> for Or<T> {
    fn evaluate(&self, value: &T) -> Result<(), ValidateError> {
        for check in &self.checks {
            if check.evaluate(value).is_ok() {
                return Ok(());
            }
        }
        Err(NO_ALTERNATIVE_MATCHED)
    }
}

impl<T> Clone for Or<T> {
    fn clone(&self) -> Self {
        Or {
            checks: self.checks.clone(),
        }
    }
}

impl<T> fmt::Debug for Or<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Or")
            .field("checks", &self.checks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require() {
        let err = ValidateError::new("test", "test error");
        let check = require(|v: &i32| *v > 0, err.clone());
        assert_eq!(check.evaluate(&1), Ok(()));
        assert_eq!(check.evaluate(&0), Err(err));
    }

    #[test]
    fn test_not_default_and_is_default() {
        assert_eq!(not_default::<i32>().evaluate(&1), Ok(()));
        assert_eq!(not_default::<i32>().evaluate(&0), Err(DEFAULT_VALUE));
        assert_eq!(is_default::<i32>().evaluate(&0), Ok(()));
        assert_eq!(is_default::<i32>().evaluate(&1), Err(NOT_DEFAULT_VALUE));
    }

    #[test]
    fn test_emptiness() {
        let check = is_empty::<Vec<i32>, i32>();
        assert_eq!(check.evaluate(&vec![]), Ok(()));
        assert_eq!(check.evaluate(&vec![1]), Err(NOT_EMPTY_VALUE));

        let check = not_empty::<Vec<i32>, i32>();
        assert_eq!(check.evaluate(&vec![1]), Ok(()));
        assert_eq!(check.evaluate(&vec![]), Err(EMPTY_VALUE));
    }

    #[test]
    fn test_length_between() {
        let check = length_between::<Vec<i32>, i32>(1, 3);
        assert_eq!(check.evaluate(&vec![1, 2, 3]), Ok(()));
        assert_eq!(check.evaluate(&vec![1, 2, 3, 4]), Err(INVALID_LENGTH));
    }

    #[test]
    fn test_contains() {
        let check = contains::<Vec<i32>, i32>(1);
        assert_eq!(check.evaluate(&vec![1, 2, 3]), Ok(()));
        assert_eq!(check.evaluate(&vec![2, 3]), Err(ELEMENT_NOT_FOUND));
    }

    #[test]
    fn test_and_first_failure_wins() {
        let check = and::<Vec<i32>, _>([
            length_between::<Vec<i32>, i32>(2, 3).boxed(),
            contains::<Vec<i32>, i32>(4).boxed(),
        ]);
        assert_eq!(check.evaluate(&vec![1, 2, 3]), Err(ELEMENT_NOT_FOUND));

        let check = and::<Vec<i32>, _>([
            length_between::<Vec<i32>, i32>(4, 5).boxed(),
            contains::<Vec<i32>, i32>(4).boxed(),
        ]);
        assert_eq!(check.evaluate(&vec![1, 2, 3]), Err(INVALID_LENGTH));
    }

    #[test]
    fn test_and_all_pass() {
        let check = and::<Vec<i32>, _>([
            length_between::<Vec<i32>, i32>(1, 3).boxed(),
            contains::<Vec<i32>, i32>(1).boxed(),
        ]);
        assert_eq!(check.evaluate(&vec![1, 2, 3]), Ok(()));
    }

    #[test]
    fn test_or() {
        let check = or::<Vec<i32>, _>([
            length_between::<Vec<i32>, i32>(4, 5).boxed(),
            contains::<Vec<i32>, i32>(1).boxed(),
        ]);
        assert_eq!(check.evaluate(&vec![1, 2, 3]), Ok(()));

        let check = or::<Vec<i32>, _>([
            length_between::<Vec<i32>, i32>(4, 5).boxed(),
            contains::<Vec<i32>, i32>(4).boxed(),
        ]);
        assert_eq!(check.evaluate(&vec![1, 2, 3]), Err(NO_ALTERNATIVE_MATCHED));
    }

    #[test]
    fn test_closure_as_value_check() {
        let check = |value: &i32| {
            if *value % 2 == 0 {
                Ok(())
            } else {
                Err(ValidateError::new("IsEven", "value is odd"))
            }
        };
        assert_eq!(check.evaluate(&4), Ok(()));
        assert!(check.evaluate(&3).is_err());
    }
}
