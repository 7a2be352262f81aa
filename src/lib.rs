//! # Reattempt
//!
//! > *"Try it again, but not forever"*
//!
//! A small Rust library for re-running a fallible operation a bounded number
//! of times.
//!
//! ## Philosophy
//!
//! **Reattempt** does exactly one thing:
//! - **Bounded** = a fixed attempt budget (default 2), at least one attempt always
//! - **Immediate** = no delay, no backoff, no jitter between attempts
//! - **Transparent** = the final error comes back verbatim, earlier ones are dropped
//!
//! ## Quick Example
//!
//! ```rust
//! use reattempt::{retry, AttemptBudget};
//!
//! let mut calls = 0;
//! let result = retry(
//!     || {
//!         calls += 1;
//!         if calls < 2 {
//!             Err("bad luck")
//!         } else {
//!             Ok(4 + 2)
//!         }
//!     },
//!     AttemptBudget::default(),
//! );
//!
//! assert_eq!(result, Ok(6));
//! assert_eq!(calls, 2);
//! ```
//!
//! Errors are not wrapped, so `?` works the same as on a single call:
//!
//! ```rust
//! use reattempt::Retryable;
//!
//! fn parse_port(raw: &str) -> Result<u16, std::num::ParseIntError> {
//!     let port = (|| raw.parse::<u16>()).retry_default()?;
//!     Ok(port)
//! }
//!
//! assert_eq!(parse_port("8080"), Ok(8080));
//! assert!(parse_port("http").is_err());
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod retry;
pub mod testing;

// Re-exports
pub use retry::{
    panic_message, retry, retry_default, retry_unwind, retry_with_hooks, AttemptBudget,
    AttemptFailure, AttemptState, ParseBudgetError, Retryable, DEFAULT_MAX_ATTEMPTS,
};

#[cfg(feature = "async")]
pub use retry::{retry_async, retry_async_with_hooks};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::retry::{retry, retry_default, retry_with_hooks, AttemptBudget, Retryable};
}
