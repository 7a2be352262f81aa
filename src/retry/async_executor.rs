//! Async retry executors.
//!
//! Same loop as the synchronous executors, for operations that produce
//! futures. A fresh future is created for every attempt; nothing sleeps or
//! yields between attempts, so the only suspension points are the ones
//! inside the operation's own futures.

use std::future::Future;

use super::budget::AttemptBudget;
use super::executor::trace_failure;
use super::state::{AttemptFailure, AttemptState};

/// Retry an async operation using a factory function.
///
/// Each attempt calls `make_future` and awaits the result. Futures are
/// consumed when awaited, so retrying means building the operation again
/// from scratch.
///
/// # Example
///
/// ```rust
/// use reattempt::{retry_async, AttemptBudget};
///
/// # tokio_test::block_on(async {
/// let mut calls = 0;
/// let result = retry_async(
///     || {
///         calls += 1;
///         let n = calls;
///         async move { if n < 2 { Err("not yet") } else { Ok(n) } }
///     },
///     AttemptBudget::default(),
/// )
/// .await;
///
/// assert_eq!(result, Ok(2));
/// # });
/// ```
pub async fn retry_async<T, E, F, Fut>(make_future: F, budget: AttemptBudget) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    retry_async_with_hooks(make_future, budget, |_: &AttemptFailure<'_, E>| {}).await
}

/// Retry an async operation with a hook for observability.
///
/// The hook is synchronous and runs after every failed attempt.
///
/// # Example
///
/// ```rust
/// use reattempt::{retry_async_with_hooks, AttemptBudget};
///
/// # tokio_test::block_on(async {
/// let mut failures = Vec::new();
/// let result: Result<(), String> = retry_async_with_hooks(
///     || async { Err("refused".to_string()) },
///     AttemptBudget::new(2),
///     |failure| failures.push(failure.attempt),
/// )
/// .await;
///
/// assert!(result.is_err());
/// assert_eq!(failures, vec![1, 2]);
/// # });
/// ```
pub async fn retry_async_with_hooks<T, E, F, Fut, H>(
    mut make_future: F,
    budget: AttemptBudget,
    mut on_failure: H,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    H: FnMut(&AttemptFailure<'_, E>),
{
    let mut state = AttemptState::start(budget);

    loop {
        match make_future().await {
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

#[cfg(test)]
mod async_tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_retry_async_success_first_try() {
        let calls = Arc::new(AtomicU32::new(0));
        let result: Result<_, String> = retry_async(
            {
                let calls = calls.clone();
                move || {
                    calls.fetch_add(1, Ordering::SeqCst);
                    async { Ok(42) }
                }
            },
            AttemptBudget::new(3),
        )
        .await;

        assert_eq!(result, Ok(42));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_retry_async_exhausted_returns_last_error() {
        let calls = Arc::new(AtomicU32::new(0));
        let result: Result<(), u32> = retry_async(
            {
                let calls = calls.clone();
                move || {
                    let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
                    async move { Err(n) }
                }
            },
            AttemptBudget::new(4),
        )
        .await;

        assert_eq!(result, Err(4));
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_retry_async_negative_budget_runs_once() {
        let calls = Arc::new(AtomicU32::new(0));
        let result: Result<(), &str> = retry_async(
            {
                let calls = calls.clone();
                move || {
                    calls.fetch_add(1, Ordering::SeqCst);
                    async { Err("down") }
                }
            },
            AttemptBudget::new(-2),
        )
        .await;

        assert_eq!(result, Err("down"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_retry_async_operation_can_await() {
        let calls = Arc::new(AtomicU32::new(0));
        let result = retry_async(
            {
                let calls = calls.clone();
                move || {
                    let calls = calls.clone();
                    async move {
                        tokio::task::yield_now().await;
                        if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                            Err("first attempt")
                        } else {
                            Ok("second attempt")
                        }
                    }
                }
            },
            AttemptBudget::default(),
        )
        .await;

        assert_eq!(result, Ok("second attempt"));
    }
}
