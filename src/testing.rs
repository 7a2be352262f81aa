//! Testing utilities for code that retries.
//!
//! Retry behavior is all about how many times something ran, so these
//! helpers build operations with a known failure pattern and count their
//! invocations through a shared [`CallCounter`].
//!
//! # Examples
//!
//! ```rust
//! use reattempt::testing::{failing_times, CallCounter};
//! use reattempt::{assert_calls, retry, AttemptBudget};
//!
//! let counter = CallCounter::new();
//! let result = retry(failing_times(1, "ok", "flaky", &counter), AttemptBudget::new(3));
//!
//! assert_eq!(result, Ok("ok"));
//! assert_calls!(counter, 2);
//! ```

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Shared invocation counter.
///
/// Clones share the same count, so one clone can be moved into an operation
/// while another stays with the test.
///
/// # Example
///
/// ```rust
/// use reattempt::testing::CallCounter;
///
/// let counter = CallCounter::new();
/// let inside = counter.clone();
///
/// assert_eq!(inside.record(), 1);
/// assert_eq!(inside.record(), 2);
/// assert_eq!(counter.calls(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CallCounter {
    calls: Arc<AtomicU32>,
}

impl CallCounter {
    /// Create a counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one call and return its 1-indexed number.
    pub fn record(&self) -> u32 {
        self.calls.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Total calls recorded so far.
    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    /// Reset the count to zero.
    pub fn reset(&self) {
        self.calls.store(0, Ordering::SeqCst);
    }
}

/// An operation that fails `failures` times with `error`, then returns `value`
/// on every later call.
///
/// # Example
///
/// ```rust
/// use reattempt::testing::{failing_times, CallCounter};
///
/// let counter = CallCounter::new();
/// let mut op = failing_times(2, 'v', 'e', &counter);
///
/// assert_eq!(op(), Err('e'));
/// assert_eq!(op(), Err('e'));
/// assert_eq!(op(), Ok('v'));
/// assert_eq!(counter.calls(), 3);
/// ```
pub fn failing_times<T, E>(
    failures: u32,
    value: T,
    error: E,
    counter: &CallCounter,
) -> impl FnMut() -> Result<T, E>
where
    T: Clone,
    E: Clone,
{
    let counter = counter.clone();
    move || {
        if counter.record() <= failures {
            Err(error.clone())
        } else {
            Ok(value.clone())
        }
    }
}

/// An operation that never succeeds.
///
/// `make_error` receives the 1-indexed call number, which makes it easy to
/// check which attempt's error came out of an executor.
///
/// # Example
///
/// ```rust
/// use reattempt::testing::{always_failing, CallCounter};
///
/// let counter = CallCounter::new();
/// let mut op = always_failing::<(), _, _>(&counter, |call| format!("call {}", call));
///
/// assert_eq!(op(), Err("call 1".to_string()));
/// assert_eq!(op(), Err("call 2".to_string()));
/// ```
pub fn always_failing<T, E, G>(
    counter: &CallCounter,
    mut make_error: G,
) -> impl FnMut() -> Result<T, E>
where
    G: FnMut(u32) -> E,
{
    let counter = counter.clone();
    move || Err(make_error(counter.record()))
}

/// Assert that a [`CallCounter`] saw exactly the given number of calls.
///
/// # Example
///
/// ```rust
/// use reattempt::testing::CallCounter;
/// use reattempt::assert_calls;
///
/// let counter = CallCounter::new();
/// counter.record();
/// assert_calls!(counter, 1);
/// ```
#[macro_export]
macro_rules! assert_calls {
    ($counter:expr, $expected:expr) => {
        match ($counter.calls(), $expected) {
            (actual, expected) => {
                if actual != expected {
                    panic!("Expected {} calls, got {}", expected, actual);
                }
            }
        }
    };
}
