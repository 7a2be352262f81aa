//! Attempt budget configuration.

use std::fmt;
use std::str::FromStr;

use super::error::ParseBudgetError;

/// Number of attempts allowed when the caller does not pick one.
pub const DEFAULT_MAX_ATTEMPTS: i32 = 2;

/// The maximum number of times an operation may be invoked.
///
/// Budgets are pure data - they describe how many attempts are allowed but
/// never run anything. The count includes the first attempt, so a budget of
/// 3 means one initial attempt plus up to two retries.
///
/// # Bounds Behavior
///
/// Zero and negative budgets are accepted as-is and still permit exactly one
/// attempt. The raw value is kept so it can be reported back unchanged;
/// [`effective_attempts`](Self::effective_attempts) gives the real count.
///
/// # Examples
///
/// ```rust
/// use reattempt::AttemptBudget;
///
/// let budget = AttemptBudget::default();
/// assert_eq!(budget.max_attempts(), 2);
///
/// let budget = AttemptBudget::new(0);
/// assert_eq!(budget.max_attempts(), 0);
/// assert_eq!(budget.effective_attempts(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttemptBudget {
    max_attempts: i32,
}

impl AttemptBudget {
    /// Create a budget allowing up to `max_attempts` invocations.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reattempt::AttemptBudget;
    ///
    /// let budget = AttemptBudget::new(5);
    /// assert_eq!(budget.effective_attempts(), 5);
    /// assert!(budget.allows_retry());
    /// ```
    pub const fn new(max_attempts: i32) -> Self {
        Self { max_attempts }
    }

    /// A budget of exactly one attempt: the operation is never retried.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reattempt::AttemptBudget;
    ///
    /// assert!(!AttemptBudget::single().allows_retry());
    /// ```
    pub const fn single() -> Self {
        Self::new(1)
    }

    /// Replace the maximum number of attempts.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reattempt::AttemptBudget;
    ///
    /// let budget = AttemptBudget::default().with_max_attempts(4);
    /// assert_eq!(budget.max_attempts(), 4);
    /// ```
    pub fn with_max_attempts(mut self, max_attempts: i32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// The configured value, exactly as supplied (may be zero or negative).
    pub const fn max_attempts(&self) -> i32 {
        self.max_attempts
    }

    /// How many times an always-failing operation will actually be invoked.
    pub const fn effective_attempts(&self) -> u32 {
        if self.max_attempts < 1 {
            1
        } else {
            self.max_attempts as u32
        }
    }

    /// Whether a failed first attempt can be followed by another one.
    pub const fn allows_retry(&self) -> bool {
        self.max_attempts > 1
    }
}

impl Default for AttemptBudget {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}

impl From<i32> for AttemptBudget {
    fn from(max_attempts: i32) -> Self {
        Self::new(max_attempts)
    }
}

impl From<AttemptBudget> for i32 {
    fn from(budget: AttemptBudget) -> Self {
        budget.max_attempts
    }
}

impl fmt::Display for AttemptBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.max_attempts)
    }
}

/// Parses a decimal attempt count, ignoring surrounding whitespace.
///
/// ```rust
/// use reattempt::AttemptBudget;
///
/// let budget: AttemptBudget = " 3 ".parse().unwrap();
/// assert_eq!(budget, AttemptBudget::new(3));
///
/// assert!("three".parse::<AttemptBudget>().is_err());
/// ```
impl FromStr for AttemptBudget {
    type Err = ParseBudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i32>()
            .map(Self::new)
            .map_err(|source| ParseBudgetError::new(s, source))
    }
}
