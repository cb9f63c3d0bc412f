//! # Attest
//!
//! A Rust library for composable validation.
//!
//! ## Philosophy
//!
//! A validation rule is a small value — a boolean test paired with the
//! error it produces on failure. **Attest** builds everything from that
//! one shape:
//!
//! - **Checks** compose with logical combinators (`and`, `or`, `not`,
//!   error override) into arbitrarily nested rules.
//! - **Evaluators** accumulate checks and run them under interchangeable
//!   strategies: sequential short-circuit, parallel fan-out, or eager
//!   evaluate-on-add.
//! - **Value wrappers** bind a composed rule to a value type so it can be
//!   re-applied to any number of values.
//!
//! The result of every rule is exactly `Ok(())` or exactly one
//! [`ValidateError`], compared by value against the error catalog.
//!
//! ## Quick Example
//!
//! ```rust
//! use attest::prelude::*;
//! use attest::error::EMPTY_VALUE;
//!
//! struct Response {
//!     code: i32,
//!     message: String,
//! }
//!
//! let response = Response { code: 0, message: "OK".into() };
//!
//! let result = LazyValidator::new()
//!     .with_options([
//!         not_empty(response.code).boxed(),
//!         not_empty(response.message.clone()).boxed(),
//!     ])
//!     .validate();
//!
//! assert_eq!(result, Err(EMPTY_VALUE));
//! ```
//!
//! For more examples, see the `tests` directory.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod check;
pub mod error;
pub mod testing;
pub mod validator;
pub mod wrapper;

// Re-exports
pub use check::{and, or, require, BoxedCheck, Check, CheckExt};
pub use error::ValidateError;
pub use validator::{EagerValidator, LazyValidator, ParallelValidator, Validator};
pub use wrapper::ValueValidator;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::check::value;
    pub use crate::check::value::{ValueCheck, ValueCheckExt};
    pub use crate::check::{
        and, contains, is_empty, is_valid_email, is_valid_json, is_valid_url, length_between,
        not_empty, or, require, BoxedCheck, Check, CheckExt,
    };
    pub use crate::error::ValidateError;
    pub use crate::validator::{EagerValidator, LazyValidator, ParallelValidator, Validator};
    pub use crate::wrapper::ValueValidator;
}
