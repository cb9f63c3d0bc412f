//! String shape checks
//!
//! URL, JSON and email well-formedness checks over a captured string.
//! Like everything else in this module tree they are plain
//! [`Require`](super::Require) instances; the shape test runs when the
//! check is evaluated, not when it is built.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use super::combinators::{require, Require};
use crate::error::{INVALID_EMAIL, INVALID_JSON, INVALID_URL};

// WHATWG HTML5 email pattern.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern compiles")
});

/// Check that the string parses as an absolute URL.
///
/// Fails with [`INVALID_URL`](crate::error::INVALID_URL).
///
/// # Example
///
/// ```
/// use attest::check::{is_valid_url, Check};
/// use attest::error::INVALID_URL;
///
/// assert_eq!(is_valid_url("https://example.com/path").evaluate(), Ok(()));
/// assert_eq!(is_valid_url("not a url").evaluate(), Err(INVALID_URL));
/// ```
pub fn is_valid_url(url: impl Into<String>) -> Require<impl Fn() -> bool + Send + Sync> {
    let url = url.into();
    require(move || Url::parse(&url).is_ok(), INVALID_URL)
}

/// Check that the string is well-formed JSON.
///
/// Fails with [`INVALID_JSON`](crate::error::INVALID_JSON).
///
/// # Example
///
/// ```
/// use attest::check::{is_valid_json, Check};
/// use attest::error::INVALID_JSON;
///
/// assert_eq!(is_valid_json(r#"{"key": [1, 2]}"#).evaluate(), Ok(()));
/// assert_eq!(is_valid_json(r#"{"key": "#).evaluate(), Err(INVALID_JSON));
/// ```
pub fn is_valid_json(json: impl Into<String>) -> Require<impl Fn() -> bool + Send + Sync> {
    let json = json.into();
    require(
        move || serde_json::from_str::<serde_json::Value>(&json).is_ok(),
        INVALID_JSON,
    )
}

/// Check that the string has the shape of an email address.
///
/// Fails with [`INVALID_EMAIL`](crate::error::INVALID_EMAIL).
///
/// # Example
///
/// ```
/// use attest::check::{is_valid_email, Check};
/// use attest::error::INVALID_EMAIL;
///
/// assert_eq!(is_valid_email("user@example.com").evaluate(), Ok(()));
/// assert_eq!(is_valid_email("user@").evaluate(), Err(INVALID_EMAIL));
/// ```
pub fn is_valid_email(email: impl Into<String>) -> Require<impl Fn() -> bool + Send + Sync> {
    let email = email.into();
    require(move || EMAIL_PATTERN.is_match(&email), INVALID_EMAIL)
}
