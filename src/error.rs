//! Validation error values and the error catalog
//!
//! This module provides the `ValidateError` type, an immutable pair of
//! check name and human-readable message, together with the catalog of
//! sentinel errors produced by the built-in checks.
//!
//! Errors are compared by value, never by type inspection: calling code
//! that needs to distinguish failure kinds compares against the catalog
//! constants.
//!
//! # Examples
//!
//! ```
//! use attest::error::{ValidateError, EMPTY_VALUE};
//!
//! let err = ValidateError::new("IsNotEmpty", "value is empty");
//! assert_eq!(err, EMPTY_VALUE);
//! assert_eq!(
//!     err.to_string(),
//!     "[validation error] error validating IsNotEmpty:value is empty"
//! );
//! ```

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

/// An immutable validation failure value.
///
/// A `ValidateError` pairs the name of the check that failed with a
/// human-readable message. Two errors with identical name and message are
/// interchangeable, so equality comparison against the catalog constants
/// is the supported way to test for a specific failure.
///
/// # Example
///
/// ```
/// use attest::ValidateError;
///
/// let err = ValidateError::new("Port", "port out of range");
/// assert_eq!(err.check_name(), "Port");
/// assert_eq!(err.message(), "port out of range");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidateError {
    check_name: Cow<'static, str>,
    message: Cow<'static, str>,
}

impl ValidateError {
    /// Create a new validation error from a check name and message.
    pub fn new(check_name: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        ValidateError {
            check_name: check_name.into(),
            message: message.into(),
        }
    }

    /// Create a validation error from static strings, usable in `const` context.
    ///
    /// The catalog constants below are all built this way.
    pub const fn new_static(check_name: &'static str, message: &'static str) -> Self {
        ValidateError {
            check_name: Cow::Borrowed(check_name),
            message: Cow::Borrowed(message),
        }
    }

    /// The name of the check that produced this error.
    pub fn check_name(&self) -> &str {
        &self.check_name
    }

    /// The human-readable failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[validation error] error validating {}:{}",
            self.check_name, self.message
        )
    }
}

impl StdError for ValidateError {}

/// A non-empty check failed: the value was the empty/default value.
pub const EMPTY_VALUE: ValidateError = ValidateError::new_static("IsNotEmpty", "value is empty");

/// An empty check failed: the value was set.
pub const NOT_EMPTY_VALUE: ValidateError = ValidateError::new_static("IsEmpty", "value is not empty");

/// A not-default check failed: the value equalled its default.
pub const DEFAULT_VALUE: ValidateError =
    ValidateError::new_static("IsNotDefault", "value is the default value");

/// A default check failed: the value differed from its default.
pub const NOT_DEFAULT_VALUE: ValidateError =
    ValidateError::new_static("IsDefault", "value is not the default value");

/// A length check failed: the length was outside the inclusive bounds.
pub const INVALID_LENGTH: ValidateError = ValidateError::new_static("IsLength", "invalid length");

/// Every branch of an `or` failed (or the branch list was empty).
///
/// The individual branch errors are deliberately discarded; see
/// [`crate::check::or`].
pub const NO_ALTERNATIVE_MATCHED: ValidateError =
    ValidateError::new_static("Or", "no alternative matched");

/// A membership check failed: the element was not in the collection.
pub const ELEMENT_NOT_FOUND: ValidateError =
    ValidateError::new_static("Contains", "element not found");

/// A URL shape check failed.
pub const INVALID_URL: ValidateError = ValidateError::new_static("IsValidUrl", "invalid url");

/// A JSON shape check failed.
pub const INVALID_JSON: ValidateError = ValidateError::new_static("IsValidJson", "invalid json");

/// An email shape check failed.
pub const INVALID_EMAIL: ValidateError = ValidateError::new_static("IsValidEmail", "invalid email");
