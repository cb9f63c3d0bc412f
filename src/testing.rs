//! Testing utilities
//!
//! Assertion macros for code that produces validation results.
//!
//! # Examples
//!
//! ```rust
//! use attest::{assert_invalid, assert_valid};
//! use attest::check::{not_empty, Check};
//! use attest::error::EMPTY_VALUE;
//!
//! assert_valid!(not_empty(200).evaluate());
//! assert_invalid!(not_empty(0).evaluate());
//! assert_invalid!(not_empty(0).evaluate(), EMPTY_VALUE);
//! ```

/// Assert that a validation result is `Ok(())`.
///
/// Panics with the rendered error if the result is a failure.
#[macro_export]
macro_rules! assert_valid {
    ($result:expr) => {
        match $result {
            Ok(()) => {}
            Err(err) => panic!("expected validation to pass, got: {}", err),
        }
    };
}

/// Assert that a validation result is a failure.
///
/// With a second argument, also assert that the failure equals the given
/// error value.
#[macro_export]
macro_rules! assert_invalid {
    ($result:expr) => {
        match $result {
            Ok(()) => panic!("expected validation to fail, but it passed"),
            Err(_) => {}
        }
    };
    ($result:expr, $expected:expr) => {
        match $result {
            Ok(()) => panic!("expected validation to fail, but it passed"),
            Err(err) => assert_eq!(err, $expected),
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::check::{not_empty, Check};
    use crate::error::EMPTY_VALUE;

    #[test]
    fn test_assert_valid_passes() {
        assert_valid!(not_empty(1).evaluate());
    }

    #[test]
    fn test_assert_invalid_passes() {
        assert_invalid!(not_empty(0).evaluate());
        assert_invalid!(not_empty(0).evaluate(), EMPTY_VALUE);
    }

    #[test]
    #[should_panic(expected = "expected validation to pass")]
    fn test_assert_valid_panics_on_failure() {
        assert_valid!(not_empty(0).evaluate());
    }

    #[test]
    #[should_panic(expected = "expected validation to fail")]
    fn test_assert_invalid_panics_on_success() {
        assert_invalid!(not_empty(1).evaluate());
    }
}
