//! Retries an operation that fails on even clock ticks, logging each failure.
//!
//! Run with: cargo run --example bad_luck --features tracing

use reattempt::{retry_with_hooks, AttemptBudget, AttemptFailure};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug)]
struct BadLuck(u128);

impl fmt::Display for BadLuck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bad luck on tick {}", self.0)
    }
}

impl std::error::Error for BadLuck {}

fn add2(i: i32) -> i32 {
    i + 2
}

fn maybe_fail<T>(action: impl FnOnce() -> T) -> Result<T, BadLuck> {
    let tick = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() / 100)
        .unwrap_or(1);

    if tick % 2 == 0 {
        Err(BadLuck(tick))
    } else {
        Ok(action())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let budget: AttemptBudget = std::env::args()
        .nth(1)
        .map(|raw| raw.parse::<AttemptBudget>())
        .transpose()?
        .unwrap_or_default();

    tracing::info!(%budget, "adding 2 to 4");

    let result = retry_with_hooks(
        || maybe_fail(|| add2(4)),
        budget,
        |failure: &AttemptFailure<'_, BadLuck>| {
            tracing::warn!("Got exception: {}", failure.error);
        },
    );

    match result {
        Ok(value) => tracing::info!("result: {}", value),
        Err(e) => tracing::error!("gave up: {}", e),
    }

    Ok(())
}
