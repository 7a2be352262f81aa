//! Error types for budget configuration.
//!
//! The executors themselves never create errors: an exhausted budget hands
//! back the operation's own error unchanged.

use std::num::ParseIntError;

/// Error returned when an [`AttemptBudget`](super::AttemptBudget) cannot be
/// parsed from text.
///
/// # Examples
///
/// ```rust
/// use reattempt::AttemptBudget;
///
/// let err = "lots".parse::<AttemptBudget>().unwrap_err();
/// assert_eq!(err.input(), "lots");
/// assert!(err.to_string().contains("invalid attempt budget"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBudgetError {
    input: String,
    source: ParseIntError,
}

impl ParseBudgetError {
    pub(crate) fn new(input: &str, source: ParseIntError) -> Self {
        Self {
            input: input.to_string(),
            source,
        }
    }

    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The underlying integer parse failure.
    pub fn parse_error(&self) -> &ParseIntError {
        &self.source
    }
}

impl std::fmt::Display for ParseBudgetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid attempt budget {:?}: {}",
            self.input, self.source
        )
    }
}

impl std::error::Error for ParseBudgetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

#[cfg(test)]
mod error_tests {
    use super::*;
    use crate::AttemptBudget;
    use std::error::Error;

    #[test]
    fn test_parse_budget_error_display() {
        let err = "x1".parse::<AttemptBudget>().unwrap_err();
        let display = format!("{}", err);
        assert!(display.contains("invalid attempt budget"));
        assert!(display.contains("\"x1\""));
    }

    #[test]
    fn test_parse_budget_error_source() {
        let err = "".parse::<AttemptBudget>().unwrap_err();
        assert!(err.source().is_some());
        assert_eq!(err.parse_error(), &"".parse::<i32>().unwrap_err());
    }

    #[test]
    fn test_input_keeps_original_text() {
        let err = "  nope  ".parse::<AttemptBudget>().unwrap_err();
        assert_eq!(err.input(), "  nope  ");
    }
}
