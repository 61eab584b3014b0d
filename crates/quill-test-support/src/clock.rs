//! Test clocks — deterministic `Clock` implementations for tests.

use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, TimeDelta, Utc};
use quill_core::clock::Clock;

/// A clock that always returns a fixed point in time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A clock that advances by a fixed step on every reading. Lets tests observe
/// a strictly increasing sequence of timestamps without sleeping.
#[derive(Debug)]
pub struct SteppingClock {
    current: Mutex<DateTime<Utc>>,
    step: TimeDelta,
}

impl SteppingClock {
    /// Creates a clock that first reports `start` and then advances by `step`
    /// on each subsequent reading.
    #[must_use]
    pub fn new(start: DateTime<Utc>, step: TimeDelta) -> Self {
        Self {
            current: Mutex::new(start),
            step,
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        // The stored instant stays valid even if a holder panicked; recover
        // from poisoning instead of propagating it.
        let mut current = self
            .current
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let reported = *current;
        *current = reported + self.step;
        reported
    }
}
