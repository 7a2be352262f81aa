//! Bounded, immediate retry of fallible operations.
//!
//! Everything here follows one loop:
//!
//! 1. run the operation
//! 2. on success, return the value
//! 3. on failure, spend one attempt from the budget
//! 4. with attempts left, go to 1 straight away; otherwise return the error
//!
//! # Quick Start
//!
//! ```rust
//! use reattempt::retry::{retry, AttemptBudget};
//!
//! let mut attempts = 0;
//! let result: Result<(), String> = retry(
//!     || {
//!         attempts += 1;
//!         Err(format!("failure #{}", attempts))
//!     },
//!     AttemptBudget::new(3),
//! );
//!
//! // Only the last failure survives
//! assert_eq!(result, Err("failure #3".to_string()));
//! assert_eq!(attempts, 3);
//! ```
//!
//! # Budgets
//!
//! - `AttemptBudget::default()` allows 2 attempts (one retry)
//! - `AttemptBudget::single()` allows exactly one attempt
//! - budgets of zero or below still run the operation once
//!
//! # Executors
//!
//! - [`retry`] / [`retry_default`]: `FnMut() -> Result<T, E>`
//! - [`retry_with_hooks`]: same, with a callback per failed attempt
//! - [`retry_unwind`]: `FnMut() -> T` operations that fail by panicking
//! - `retry_async` (feature `async`): operations returning futures
//!
//! # Logging
//!
//! With the `tracing` feature enabled every failed attempt is reported as a
//! `DEBUG` event. Without it the executors do no I/O of their own.

mod budget;
mod error;
mod executor;
#[cfg(feature = "serde")]
mod serde_impl;
mod state;
mod unwind;

#[cfg(feature = "async")]
mod async_executor;

pub use budget::{AttemptBudget, DEFAULT_MAX_ATTEMPTS};
pub use error::ParseBudgetError;
pub use executor::{retry, retry_default, retry_with_hooks, Retryable};
pub use state::{AttemptFailure, AttemptState};
pub use unwind::{panic_message, retry_unwind};

#[cfg(feature = "async")]
pub use async_executor::{retry_async, retry_async_with_hooks};
