//! Composable validation checks
//!
//! This module provides the check abstraction and everything that builds
//! checks: the atomic [`require`] factory, the built-in primitives, and
//! the logical combinators.
//!
//! # Philosophy
//!
//! Instead of writing verbose boolean expressions or ad-hoc helper
//! functions, checks are small values that can be:
//!
//! - built from a boolean test and a fixed error ([`require`])
//! - combined with logical operators ([`and`], [`or`], [`CheckExt::not`])
//! - handed to any evaluator strategy in [`crate::validator`]
//!
//! # Example
//!
//! ```
//! use attest::check::{and, not_empty, Check, CheckExt};
//! use attest::error::EMPTY_VALUE;
//!
//! let check = and([
//!     not_empty(200).boxed(),
//!     not_empty("").boxed(),
//! ]);
//! assert_eq!(check.evaluate(), Err(EMPTY_VALUE));
//! ```
//!
//! Checks in this module capture their subject when built; the [`value`]
//! submodule provides the value-parameterized shape instead.

mod combinators;
mod options;
mod string;

pub mod value;

// Core trait and combinator types
pub use combinators::{and, or, require, And, BoxedCheck, Check, CheckExt, Not, Or, Require, WithError};

// Bound-value primitives
pub use options::{contains, is_empty, length_between, not_empty};

// String shape checks
pub use string::{is_valid_email, is_valid_json, is_valid_url};
