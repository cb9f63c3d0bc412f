//! Bound-value primitive checks
//!
//! This module provides the built-in checks that capture a value at
//! construction time and test it when evaluated. Each one is a
//! [`Require`](super::Require) instance over a specific test and a
//! specific catalog error.

use super::combinators::{require, CheckExt, Not, Require};
use crate::error::{ELEMENT_NOT_FOUND, EMPTY_VALUE, INVALID_LENGTH, NOT_EMPTY_VALUE};

/// Check that `value` is not the empty/default value for its type.
///
/// The "zero value" is made explicit through the `Default` bound: the
/// check fails with [`EMPTY_VALUE`](crate::error::EMPTY_VALUE) when
/// `value == T::default()`.
///
/// # Example
///
/// ```
/// use attest::check::{not_empty, Check};
/// use attest::error::EMPTY_VALUE;
///
/// assert_eq!(not_empty(200).evaluate(), Ok(()));
/// assert_eq!(not_empty(0).evaluate(), Err(EMPTY_VALUE));
/// assert_eq!(not_empty(String::new()).evaluate(), Err(EMPTY_VALUE));
/// ```
pub fn not_empty<T>(value: T) -> Require<impl Fn() -> bool + Send + Sync>
where
    T: Default + PartialEq + Send + Sync + 'static,
{
    require(move || value != T::default(), EMPTY_VALUE)
}

/// Check that `value` equals the empty/default value for its type.
///
/// Derived by negating [`not_empty`]; fails with
/// [`NOT_EMPTY_VALUE`](crate::error::NOT_EMPTY_VALUE).
///
/// # Example
///
/// ```
/// use attest::check::{is_empty, Check};
/// use attest::error::NOT_EMPTY_VALUE;
///
/// assert_eq!(is_empty("").evaluate(), Ok(()));
/// assert_eq!(is_empty("set").evaluate(), Err(NOT_EMPTY_VALUE));
/// ```
pub fn is_empty<T>(value: T) -> Not<Require<impl Fn() -> bool + Send + Sync>>
where
    T: Default + PartialEq + Send + Sync + 'static,
{
    not_empty(value).not(NOT_EMPTY_VALUE)
}

/// Check that the slice length is within `min..=max`.
///
/// The length is captured at construction; fails with
/// [`INVALID_LENGTH`](crate::error::INVALID_LENGTH).
///
/// # Example
///
/// ```
/// use attest::check::{length_between, Check};
/// use attest::error::INVALID_LENGTH;
///
/// let items = [1, 2, 3];
/// assert_eq!(length_between(&items, 1, 3).evaluate(), Ok(()));
/// assert_eq!(length_between(&items, 4, 5).evaluate(), Err(INVALID_LENGTH));
/// ```
pub fn length_between<T>(items: &[T], min: usize, max: usize) -> Require<impl Fn() -> bool + Send + Sync> {
    let len = items.len();
    require(move || len >= min && len <= max, INVALID_LENGTH)
}

/// Check that `haystack` contains `element`.
///
/// Fails with [`ELEMENT_NOT_FOUND`](crate::error::ELEMENT_NOT_FOUND).
///
/// # Example
///
/// ```
/// use attest::check::{contains, Check};
/// use attest::error::ELEMENT_NOT_FOUND;
///
/// assert_eq!(contains(vec![1, 2, 3], 2).evaluate(), Ok(()));
/// assert_eq!(contains(vec![1, 2, 3], 4).evaluate(), Err(ELEMENT_NOT_FOUND));
/// ```
pub fn contains<T>(haystack: Vec<T>, element: T) -> Require<impl Fn() -> bool + Send + Sync>
where
    T: PartialEq + Send + Sync + 'static,
{
    require(move || haystack.contains(&element), ELEMENT_NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::Check;

    #[test]
    fn test_not_empty_string() {
        assert_eq!(not_empty(String::from("test")).evaluate(), Ok(()));
        assert_eq!(not_empty(String::new()).evaluate(), Err(EMPTY_VALUE));
    }

    #[test]
    fn test_not_empty_numeric_zero_is_empty() {
        assert_eq!(not_empty(1).evaluate(), Ok(()));
        assert_eq!(not_empty(0).evaluate(), Err(EMPTY_VALUE));
    }

    #[test]
    fn test_not_empty_option() {
        assert_eq!(not_empty(Some(0)).evaluate(), Ok(()));
        assert_eq!(not_empty(None::<i32>).evaluate(), Err(EMPTY_VALUE));
    }

    #[test]
    fn test_is_empty() {
        assert_eq!(is_empty("").evaluate(), Ok(()));
        assert_eq!(is_empty("test").evaluate(), Err(NOT_EMPTY_VALUE));
    }

    #[test]
    fn test_length_boundaries() {
        let items = [1, 2, 3];
        // Inclusive at both ends.
        assert_eq!(length_between(&items, 3, 5).evaluate(), Ok(()));
        assert_eq!(length_between(&items, 1, 3).evaluate(), Ok(()));
        assert_eq!(length_between(&items, 4, 5).evaluate(), Err(INVALID_LENGTH));
        assert_eq!(length_between(&items, 1, 2).evaluate(), Err(INVALID_LENGTH));
    }

    #[test]
    fn test_length_of_empty_slice() {
        let items: [i32; 0] = [];
        assert_eq!(length_between(&items, 0, 3).evaluate(), Ok(()));
        assert_eq!(length_between(&items, 1, 3).evaluate(), Err(INVALID_LENGTH));
    }

    #[test]
    fn test_contains() {
        assert_eq!(contains(vec!["a", "b"], "a").evaluate(), Ok(()));
        assert_eq!(
            contains(vec!["a", "b"], "c").evaluate(),
            Err(ELEMENT_NOT_FOUND)
        );
        assert_eq!(contains(Vec::<i32>::new(), 1).evaluate(), Err(ELEMENT_NOT_FOUND));
    }
}
