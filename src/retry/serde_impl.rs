//! Serde support for attempt budgets (feature-gated)
//!
//! A budget serializes as its bare attempt count, so it reads naturally in
//! configuration files.
//!
//! # Example
//!
//! ```rust,ignore
//! use serde::Deserialize;
//! use reattempt::AttemptBudget;
//!
//! #[derive(Deserialize)]
//! struct ClientConfig {
//!     url: String,
//!     attempts: AttemptBudget,
//! }
//!
//! let json = r#"{"url": "http://localhost", "attempts": 3}"#;
//! let config: ClientConfig = serde_json::from_str(json).unwrap();
//! assert_eq!(config.attempts, AttemptBudget::new(3));
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::budget::AttemptBudget;

impl Serialize for AttemptBudget {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.max_attempts().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AttemptBudget {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i32::deserialize(deserializer).map(AttemptBudget::new)
    }
}
