//! Parallel evaluator

use std::fmt;

use rayon::prelude::*;

use super::Validator;
use crate::check::{BoxedCheck, Check};
use crate::error::ValidateError;

/// An evaluator that runs every held check concurrently at
/// [`validate`](Validator::validate) time.
///
/// `with_options` is copy-on-add, as with [`LazyValidator`]: it returns a
/// new evaluator with the options appended and leaves the receiver
/// untouched.
///
/// `validate` fans out one unit of work per check, waits for all of them
/// to finish, then scans the results in registration order — so
/// concurrency affects *when* each check's side effects run, but the
/// reported error is deterministically the earliest-registered failure,
/// not the first to finish. Every check always runs to completion, even
/// once an earlier-registered one has failed: there is no cancellation.
/// This trades the sequential strategy's short-circuit for uniform
/// latency when the checks are independent.
///
/// Checks must not mutate shared state observed by sibling checks; no
/// synchronization is provided between them and their execution order is
/// unspecified.
///
/// [`LazyValidator`]: super::LazyValidator
///
/// # Example
///
/// ```
/// use attest::prelude::*;
/// use attest::error::EMPTY_VALUE;
///
/// let validator = ParallelValidator::new().with_options([
///     not_empty(0).boxed(),
///     not_empty("OK").boxed(),
/// ]);
/// assert_eq!(validator.validate(), Err(EMPTY_VALUE));
/// ```
#[derive(Clone, Default)]
pub struct ParallelValidator {
    options: Vec<BoxedCheck>,
}

impl ParallelValidator {
    /// Create an evaluator with no checks registered; it validates to
    /// `Ok(())` until options are added.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Validator for ParallelValidator {
    fn with_options<I>(&self, options: I) -> Self
    where
        I: IntoIterator<Item = BoxedCheck>,
    {
        let mut combined = self.options.clone();
        combined.extend(options);
        Self { options: combined }
    }

    fn validate(&self) -> Result<(), ValidateError> {
        #[cfg(feature = "tracing")]
        tracing::trace!(checks = self.options.len(), "fanning out parallel validation");

        let results: Vec<Result<(), ValidateError>> = self
            .options
            .par_iter()
            .map(|check| check.evaluate())
            .collect();

        // Completion order is nondeterministic; the collected results are
        // index-ordered, so this scan reports the earliest-registered
        // failure.
        let verdict: Result<(), ValidateError> = results.into_iter().collect();
        #[cfg(feature = "tracing")]
        if let Err(err) = &verdict {
            tracing::debug!(%err, "parallel validation failed");
        }
        verdict
    }
}

impl fmt::Debug for ParallelValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParallelValidator")
            .field("options", &self.options.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::{require, CheckExt};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counted_check(calls: &Arc<AtomicUsize>, passes: bool, error: ValidateError) -> BoxedCheck {
        let calls = Arc::clone(calls);
        require(
            move || {
                calls.fetch_add(1, Ordering::SeqCst);
                passes
            },
            error,
        )
        .boxed()
    }

    #[test]
    fn test_empty_validator_succeeds() {
        assert_eq!(ParallelValidator::new().validate(), Ok(()));
    }

    #[test]
    fn test_all_passing() {
        let validator = ParallelValidator::new().with_options([
            require(|| true, ValidateError::new("a", "b")).boxed(),
            require(|| true, ValidateError::new("c", "d")).boxed(),
        ]);
        assert_eq!(validator.validate(), Ok(()));
    }

    #[test]
    fn test_reports_earliest_registered_failure() {
        let first = ValidateError::new("first", "first error");
        let second = ValidateError::new("second", "second error");
        // Repeat to shake out scheduling orders: the verdict must not
        // depend on which check finishes first.
        for _ in 0..64 {
            let validator = ParallelValidator::new().with_options([
                require(|| true, ValidateError::new("pass", "pass")).boxed(),
                require(|| false, first.clone()).boxed(),
                require(|| false, second.clone()).boxed(),
            ]);
            assert_eq!(validator.validate(), Err(first.clone()));
        }
    }

    #[test]
    fn test_every_check_runs_despite_failure() {
        let calls = Arc::new(AtomicUsize::new(0));
        let validator = ParallelValidator::new().with_options([
            counted_check(&calls, false, ValidateError::new("first", "first error")),
            counted_check(&calls, true, ValidateError::new("unused", "unused")),
            counted_check(&calls, true, ValidateError::new("unused", "unused")),
        ]);
        assert!(validator.validate().is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_snapshots_are_persistent() {
        let base = ParallelValidator::new();
        let err = ValidateError::new("test", "test error");
        let checked = base.with_options([require(|| false, err.clone()).boxed()]);
        assert_eq!(base.validate(), Ok(()));
        assert_eq!(checked.validate(), Err(err));
    }
}
