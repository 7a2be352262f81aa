//! Retries a simulated flaky async fetch.
//!
//! Run with: cargo run --example async_fetch --features async

use reattempt::{retry_async_with_hooks, AttemptBudget};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

async fn fetch(request: u32) -> Result<String, String> {
    tokio::time::sleep(Duration::from_millis(20)).await;
    if request < 3 {
        Err(format!("request {} refused", request))
    } else {
        Ok(format!("payload from request {}", request))
    }
}

#[tokio::main]
async fn main() {
    let requests = Arc::new(AtomicU32::new(0));

    let result = retry_async_with_hooks(
        {
            let requests = requests.clone();
            move || fetch(requests.fetch_add(1, Ordering::SeqCst) + 1)
        },
        AttemptBudget::new(3),
        |failure| {
            println!(
                "attempt {} failed: {} ({} left)",
                failure.attempt, failure.error, failure.remaining
            )
        },
    )
    .await;

    match result {
        Ok(body) => println!("got {}", body),
        Err(e) => println!("giving up: {}", e),
    }
    println!("requests sent: {}", requests.load(Ordering::SeqCst));
}
