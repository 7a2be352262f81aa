//! Synchronous retry executors.

use super::budget::AttemptBudget;
use super::state::{AttemptFailure, AttemptState};

/// Run `operation` until it succeeds or the budget is used up.
///
/// The operation is invoked at least once. After each failure one attempt is
/// spent; if any remain the operation runs again immediately, otherwise the
/// error from that last failure is returned exactly as the operation produced
/// it. Earlier errors are dropped.
///
/// Any side effects of `operation` happen again on every attempt.
///
/// # Example
///
/// ```rust
/// use reattempt::{retry, AttemptBudget};
///
/// let mut calls = 0;
/// let result: Result<i32, &str> = retry(
///     || {
///         calls += 1;
///         Err("unavailable")
///     },
///     AttemptBudget::new(3),
/// );
///
/// assert_eq!(result, Err("unavailable"));
/// assert_eq!(calls, 3);
/// ```
pub fn retry<T, E, F>(operation: F, budget: AttemptBudget) -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
{
    retry_with_hooks(operation, budget, |_: &AttemptFailure<'_, E>| {})
}

/// [`retry`] with the default budget of two attempts.
///
/// # Example
///
/// ```rust
/// use reattempt::retry_default;
///
/// let mut calls = 0;
/// let result: Result<(), _> = retry_default(|| {
///     calls += 1;
///     Err(calls)
/// });
///
/// // Second failure wins
/// assert_eq!(result, Err(2));
/// ```
pub fn retry_default<T, E, F>(operation: F) -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
{
    retry(operation, AttemptBudget::default())
}

/// Retry with a hook for observability.
///
/// `on_failure` runs after every failed attempt, including the last one,
/// and receives the attempt number, the attempts left and the error. Use it
/// for logging or metrics; it cannot change the outcome.
///
/// # Example
///
/// ```rust
/// use reattempt::{retry_with_hooks, AttemptBudget, AttemptFailure};
///
/// let mut log = Vec::new();
/// let result: Result<(), &str> = retry_with_hooks(
///     || Err("bad luck"),
///     AttemptBudget::default(),
///     |failure: &AttemptFailure<'_, &str>| {
///         log.push(format!("attempt {} failed: {}", failure.attempt, failure.error));
///     },
/// );
///
/// assert!(result.is_err());
/// assert_eq!(log, vec!["attempt 1 failed: bad luck", "attempt 2 failed: bad luck"]);
/// ```
pub fn retry_with_hooks<T, E, F, H>(
    mut operation: F,
    budget: AttemptBudget,
    mut on_failure: H,
) -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
    H: FnMut(&AttemptFailure<'_, E>),
{
    let mut state = AttemptState::start(budget);

    loop {
        match operation() {
            Ok(value) => {
                state.record_success();
                return Ok(value);
            }
            Err(error) => {
                let failure = state.record_failure(&error);
                trace_failure(&failure);
                on_failure(&failure);

                if !failure.will_retry {
                    return Err(error);
                }
            }
        }
    }
}

#[cfg(feature = "tracing")]
pub(crate) fn trace_failure<E>(failure: &AttemptFailure<'_, E>) {
    if failure.will_retry {
        tracing::debug!(
            attempt = failure.attempt,
            remaining = failure.remaining,
            will_retry = failure.will_retry,
            "attempt failed, retrying"
        );
    } else {
        tracing::debug!(
            attempt = failure.attempt,
            remaining = failure.remaining,
            will_retry = failure.will_retry,
            "attempt failed, budget exhausted"
        );
    }
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
pub(crate) fn trace_failure<E>(_failure: &AttemptFailure<'_, E>) {}

/// Extension trait giving fallible closures a `.retry()` method.
///
/// Implemented for every `FnMut() -> Result<T, E>`.
///
/// # Example
///
/// ```rust
/// use reattempt::{AttemptBudget, Retryable};
///
/// let mut remaining_failures = 2;
/// let result = (|| {
///     if remaining_failures > 0 {
///         remaining_failures -= 1;
///         Err("flaky")
///     } else {
///         Ok("done")
///     }
/// })
/// .retry(AttemptBudget::new(3));
///
/// assert_eq!(result, Ok("done"));
/// ```
pub trait Retryable<T, E>: FnMut() -> Result<T, E> + Sized {
    /// Run this operation under [`retry`] with the given budget.
    fn retry(self, budget: AttemptBudget) -> Result<T, E> {
        retry(self, budget)
    }

    /// Run this operation under [`retry_default`].
    fn retry_default(self) -> Result<T, E> {
        retry_default(self)
    }
}

impl<T, E, F> Retryable<T, E> for F where F: FnMut() -> Result<T, E> {}
