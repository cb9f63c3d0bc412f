//! Accumulating evaluator

use super::Validator;
use crate::check::{BoxedCheck, Check};
use crate::error::ValidateError;

/// An evaluator that runs checks as they are added, in the style of a
/// hand-written if-chain.
///
/// The evaluator holds a single verdict slot rather than a check
/// sequence. `with_options` evaluates the new options left to right and
/// freezes the slot at the first failure; once frozen, later
/// `with_options` calls return an evaluator stuck at that error *without
/// evaluating any of their options* — construction itself short-circuits,
/// so options added after a failure cost nothing.
///
/// `validate` just reads the slot. The cost of evaluation lives entirely
/// at construction time: checks run exactly once no matter how many times
/// `validate` is called.
///
/// # Example
///
/// ```
/// use attest::prelude::*;
/// use attest::error::EMPTY_VALUE;
///
/// let validator = EagerValidator::new()
///     .with_options([not_empty(0).boxed()])
///     .with_options([not_empty("never evaluated").boxed()]);
/// assert_eq!(validator.validate(), Err(EMPTY_VALUE));
/// ```
#[derive(Clone, Debug, Default)]
pub struct EagerValidator {
    error: Option<ValidateError>,
}

impl EagerValidator {
    /// Create an evaluator with an empty verdict slot; it validates to
    /// `Ok(())` until a failing option is added.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Validator for EagerValidator {
    fn with_options<I>(&self, options: I) -> Self
    where
        I: IntoIterator<Item = BoxedCheck>,
    {
        if self.error.is_some() {
            return self.clone();
        }
        for option in options {
            if let Err(err) = option.evaluate() {
                #[cfg(feature = "tracing")]
                tracing::debug!(%err, "eager validation froze");
                return Self { error: Some(err) };
            }
        }
        Self { error: None }
    }

    fn validate(&self) -> Result<(), ValidateError> {
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::{require, CheckExt};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counted_check(calls: &Arc<AtomicUsize>, passes: bool) -> BoxedCheck {
        let calls = Arc::clone(calls);
        require(
            move || {
                calls.fetch_add(1, Ordering::SeqCst);
                passes
            },
            ValidateError::new("test", "test error"),
        )
        .boxed()
    }

    #[test]
    fn test_empty_validator_succeeds() {
        assert_eq!(EagerValidator::new().validate(), Ok(()));
    }

    #[test]
    fn test_first_failure_freezes_the_slot() {
        let first = ValidateError::new("first", "first error");
        let validator = EagerValidator::new().with_options([
            require(|| false, first.clone()).boxed(),
            require(|| false, ValidateError::new("second", "second error")).boxed(),
        ]);
        assert_eq!(validator.validate(), Err(first));
    }

    #[test]
    fn test_construction_short_circuits_within_a_call() {
        let calls = Arc::new(AtomicUsize::new(0));
        let err = ValidateError::new("test", "test error");
        let validator = EagerValidator::new().with_options([
            require(|| false, err).boxed(),
            counted_check(&calls, true),
        ]);
        assert!(validator.validate().is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_construction_short_circuits_across_calls() {
        let calls = Arc::new(AtomicUsize::new(0));
        let err = ValidateError::new("test", "test error");
        let failed = EagerValidator::new().with_options([require(|| false, err.clone()).boxed()]);
        let frozen = failed.with_options([counted_check(&calls, true)]);
        assert_eq!(frozen.validate(), Err(err));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_checks_run_once_regardless_of_validate_calls() {
        let calls = Arc::new(AtomicUsize::new(0));
        let validator = EagerValidator::new().with_options([counted_check(&calls, true)]);
        assert_eq!(validator.validate(), Ok(()));
        assert_eq!(validator.validate(), Ok(()));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_all_passing_stays_open() {
        let validator = EagerValidator::new()
            .with_options([require(|| true, ValidateError::new("a", "b")).boxed()])
            .with_options([require(|| true, ValidateError::new("c", "d")).boxed()]);
        assert_eq!(validator.validate(), Ok(()));
    }
}
