//! Retrying operations that fail by panicking.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use super::budget::AttemptBudget;
use super::executor::retry;

/// Run a panicking-on-failure operation until it returns or the budget is used up.
///
/// Intermediate panics are caught. When the last allowed attempt panics,
/// that panic is resumed with its original payload, so callers (and test
/// harnesses) see the same panic a standalone call would have produced.
///
/// The panic hook still runs for every caught panic, so messages for the
/// swallowed attempts appear on stderr unless the hook is replaced.
///
/// # Example
///
/// ```rust
/// use reattempt::{retry_unwind, AttemptBudget};
///
/// let mut calls = 0;
/// let value = retry_unwind(
///     || {
///         calls += 1;
///         if calls == 1 {
///             panic!("bad luck");
///         }
///         4 + 2
///     },
///     AttemptBudget::default(),
/// );
///
/// assert_eq!(value, 6);
/// assert_eq!(calls, 2);
/// ```
pub fn retry_unwind<T, F>(mut operation: F, budget: AttemptBudget) -> T
where
    F: FnMut() -> T,
{
    // The operation is retried after unwinding, so any state it mutated
    // may be observed half-updated on the next attempt.
    let outcome = retry(
        || panic::catch_unwind(AssertUnwindSafe(&mut operation)),
        budget,
    );

    match outcome {
        Ok(value) => value,
        Err(payload) => panic::resume_unwind(payload),
    }
}

/// Extract the message from a panic payload, if it carries a string.
///
/// # Example
///
/// ```rust
/// use reattempt::panic_message;
///
/// let payload = std::panic::catch_unwind(|| panic!("disk full")).unwrap_err();
/// assert_eq!(panic_message(payload.as_ref()), Some("disk full"));
/// ```
pub fn panic_message(payload: &(dyn Any + Send)) -> Option<&str> {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        Some(*message)
    } else {
        payload.downcast_ref::<String>().map(String::as_str)
    }
}
