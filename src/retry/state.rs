//! The attempt loop as a two-state machine.

use super::budget::AttemptBudget;

/// Where a retry loop currently stands.
///
/// A loop starts in `Attempting` and ends in `Done`, either because the
/// operation succeeded or because a failure used up the last attempt.
/// Every executor in this crate drives one of these; it is public so the
/// same loop can be written by hand around operations that don't fit the
/// provided executors.
///
/// # Examples
///
/// ```rust
/// use reattempt::{AttemptBudget, AttemptState};
///
/// let mut state = AttemptState::start(AttemptBudget::new(2));
/// assert_eq!(state.attempt(), 1);
///
/// let failure = state.record_failure(&"timeout");
/// assert!(failure.will_retry);
/// assert_eq!(state.attempt(), 2);
///
/// let failure = state.record_failure(&"timeout");
/// assert!(!failure.will_retry);
/// assert!(state.is_done());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptState {
    /// The given attempt (1-indexed) is next to run or running.
    Attempting {
        /// Which attempt this is.
        attempt: u32,
        /// Counter before this attempt is spent. Starts at the raw budget,
        /// so it can be zero or negative on the first attempt.
        remaining: i32,
    },
    /// The loop has finished.
    Done {
        /// Total attempts made.
        attempts: u32,
    },
}

/// Information about a failed attempt, passed to hooks.
#[derive(Debug, Clone)]
pub struct AttemptFailure<'a, E> {
    /// Which attempt just failed (1-indexed).
    pub attempt: u32,
    /// Attempts still allowed after this one.
    pub remaining: u32,
    /// The error from the failed attempt.
    pub error: &'a E,
    /// Whether the operation will be invoked again.
    pub will_retry: bool,
}

impl AttemptState {
    /// Begin a loop with the given budget.
    pub const fn start(budget: AttemptBudget) -> Self {
        Self::Attempting {
            attempt: 1,
            remaining: budget.max_attempts(),
        }
    }

    /// The current attempt number, or the total number made once done.
    pub fn attempt(&self) -> u32 {
        match *self {
            Self::Attempting { attempt, .. } => attempt,
            Self::Done { attempts } => attempts,
        }
    }

    /// Returns true once the loop has reached its terminal state.
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done { .. })
    }

    /// The current attempt succeeded.
    pub fn record_success(&mut self) {
        *self = Self::Done {
            attempts: self.attempt(),
        };
    }

    /// The current attempt failed with `error`.
    ///
    /// Spends one attempt and moves to the next one if any are left,
    /// otherwise finishes the loop. Recording a failure on a finished loop
    /// reports the last attempt again and never schedules a retry.
    pub fn record_failure<'a, E>(&mut self, error: &'a E) -> AttemptFailure<'a, E> {
        match *self {
            Self::Attempting { attempt, remaining } => {
                let remaining = remaining.saturating_sub(1);
                let will_retry = remaining > 0;

                *self = if will_retry {
                    Self::Attempting {
                        attempt: attempt.saturating_add(1),
                        remaining,
                    }
                } else {
                    Self::Done { attempts: attempt }
                };

                AttemptFailure {
                    attempt,
                    remaining: remaining.max(0) as u32,
                    error,
                    will_retry,
                }
            }
            Self::Done { attempts } => AttemptFailure {
                attempt: attempts,
                remaining: 0,
                error,
                will_retry: false,
            },
        }
    }
}
