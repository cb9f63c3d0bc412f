//! Sequential lazy evaluator

use std::fmt;
use std::sync::Arc;

use super::Validator;
use crate::check::{and, BoxedCheck, Check, CheckExt};
use crate::error::ValidateError;

/// An evaluator that runs its checks in registration order at
/// [`validate`](Validator::validate) time, stopping at the first failure.
///
/// `with_options` is copy-on-add: it returns a new evaluator whose
/// composed check is `and([existing, and(new)])` and leaves the receiver
/// untouched, so earlier evaluator values remain valid snapshots. The
/// snapshots share the underlying check chain rather than cloning it.
///
/// Evaluation is side-effect-free on the evaluator itself: `validate` can
/// be called repeatedly and re-runs every held check each time — there is
/// no caching of the verdict.
///
/// # Example
///
/// ```
/// use attest::prelude::*;
/// use attest::error::EMPTY_VALUE;
///
/// let base = LazyValidator::new();
/// let checked = base.with_options([not_empty(0).boxed()]);
///
/// // The original snapshot is unaffected by the addition.
/// assert_eq!(base.validate(), Ok(()));
/// assert_eq!(checked.validate(), Err(EMPTY_VALUE));
/// ```
#[derive(Clone, Default)]
pub struct LazyValidator {
    check: Option<BoxedCheck>,
}

impl LazyValidator {
    /// Create an evaluator with no checks registered; it validates to
    /// `Ok(())` until options are added.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Validator for LazyValidator {
    fn with_options<I>(&self, options: I) -> Self
    where
        I: IntoIterator<Item = BoxedCheck>,
    {
        let added = and(options);
        let check = match &self.check {
            Some(existing) => and([Arc::clone(existing), added.boxed()]).boxed(),
            None => added.boxed(),
        };
        Self { check: Some(check) }
    }

    fn validate(&self) -> Result<(), ValidateError> {
        let result = match &self.check {
            Some(check) => check.evaluate(),
            None => Ok(()),
        };
        #[cfg(feature = "tracing")]
        if let Err(err) = &result {
            tracing::debug!(%err, "lazy validation failed");
        }
        result
    }
}

impl fmt::Debug for LazyValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyValidator")
            .field("registered", &self.check.is_some())
            .finish()
    }
}
