//! Tests and examples for the testing utilities
//!
//! This suite shows how to test code that retries, using the helpers from
//! `reattempt::testing`.

use reattempt::prelude::*;
use reattempt::testing::{always_failing, failing_times, CallCounter};
use reattempt::{assert_calls, AttemptFailure};

// Example domain types for testing
#[derive(Debug, Clone, PartialEq)]
enum FetchError {
    Timeout,
    NotFound(String),
}

#[derive(Debug, Clone, PartialEq)]
struct Profile {
    name: String,
}

struct Directory {
    counter: CallCounter,
    outages: u32,
}

impl Directory {
    fn with_outages(outages: u32) -> Self {
        Self {
            counter: CallCounter::new(),
            outages,
        }
    }

    fn lookup(&self, name: &str) -> Result<Profile, FetchError> {
        if self.counter.record() <= self.outages {
            return Err(FetchError::Timeout);
        }
        if name.is_empty() {
            Err(FetchError::NotFound(name.to_string()))
        } else {
            Ok(Profile {
                name: name.to_string(),
            })
        }
    }
}

fn load_profile(dir: &Directory, name: &str, budget: AttemptBudget) -> Result<Profile, FetchError> {
    retry(|| dir.lookup(name), budget)
}

#[test]
fn test_lookup_survives_one_outage_with_default_budget() {
    let dir = Directory::with_outages(1);

    let profile = load_profile(&dir, "ada", AttemptBudget::default());

    assert_eq!(
        profile,
        Ok(Profile {
            name: "ada".to_string()
        })
    );
    assert_calls!(dir.counter, 2);
}

#[test]
fn test_lookup_gives_up_after_budget() {
    let dir = Directory::with_outages(5);

    let profile = load_profile(&dir, "ada", AttemptBudget::new(3));

    assert_eq!(profile, Err(FetchError::Timeout));
    assert_calls!(dir.counter, 3);
}

#[test]
fn test_permanent_error_still_uses_budget() {
    let dir = Directory::with_outages(0);

    let profile = load_profile(&dir, "", AttemptBudget::new(4));

    assert_eq!(profile, Err(FetchError::NotFound(String::new())));
    assert_calls!(dir.counter, 4);
}

#[test]
fn test_counter_reset_between_runs() {
    let counter = CallCounter::new();

    let _ = retry(failing_times(1, (), (), &counter), AttemptBudget::new(2));
    assert_calls!(counter, 2);

    counter.reset();
    let _: Result<(), _> = retry(
        always_failing(&counter, |call| call),
        AttemptBudget::single(),
    );
    assert_calls!(counter, 1);
}

#[test]
fn test_hook_builds_failure_trace() {
    let counter = CallCounter::new();
    let mut trace = Vec::new();

    let result: Result<(), String> = retry_with_hooks(
        always_failing(&counter, |call| format!("outage {}", call)),
        AttemptBudget::new(3),
        |failure: &AttemptFailure<'_, String>| {
            trace.push(format!("{} (retry: {})", failure.error, failure.will_retry));
        },
    );

    assert_eq!(result, Err("outage 3".to_string()));
    assert_eq!(
        trace,
        vec![
            "outage 1 (retry: true)",
            "outage 2 (retry: true)",
            "outage 3 (retry: false)",
        ]
    );
}

#[test]
fn test_counter_moves_into_threads() {
    let counter = CallCounter::new();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let counter = counter.clone();
            std::thread::spawn(move || {
                let _: Result<(), _> =
                    retry(always_failing(&counter, |call| call), AttemptBudget::new(2));
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    // Independent executors, shared counter
    assert_calls!(counter, 8);
}

#[test]
fn test_retryable_in_prelude() {
    let counter = CallCounter::new();

    let result = failing_times(1, 5, "flaky", &counter).retry(AttemptBudget::new(2));

    assert_eq!(result, Ok(5));
    assert_calls!(counter, 2);
}
