//! Clock abstraction for determinism.

use chrono::{DateTime, Timelike, Utc};

/// Abstraction over system time for deterministic behavior.
///
/// Timestamps are canonically UTC; callers that need the host-local
/// convention convert with [`DateTime::with_timezone`].
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current time as whole seconds since the Unix epoch.
    fn unix_seconds(&self) -> i64 {
        self.now().timestamp()
    }

    /// Returns the current time as whole milliseconds since the Unix epoch.
    fn unix_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }
}

/// Granularity of the timestamps a clock reports.
///
/// Components finer than the chosen precision are discarded, never rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimePrecision {
    /// Whole seconds.
    Seconds,
    /// Whole milliseconds.
    Milliseconds,
    /// Whole microseconds.
    Microseconds,
    /// Full nanosecond resolution (no truncation).
    #[default]
    Nanoseconds,
}

impl TimePrecision {
    /// Discards every component of `instant` finer than this precision.
    #[must_use]
    pub fn truncate(self, instant: DateTime<Utc>) -> DateTime<Utc> {
        let nanos = instant.nanosecond();
        let kept = match self {
            Self::Seconds => 0,
            Self::Milliseconds => nanos - nanos % 1_000_000,
            Self::Microseconds => nanos - nanos % 1_000,
            Self::Nanoseconds => nanos,
        };
        // `with_nanosecond` only rejects out-of-range values; `kept` never
        // exceeds the nanoseconds already present on `instant`.
        instant.with_nanosecond(kept).unwrap_or(instant)
    }
}

/// Production clock that delegates to the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    precision: TimePrecision,
}

impl SystemClock {
    /// Creates a clock that reports full nanosecond resolution.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            precision: TimePrecision::Nanoseconds,
        }
    }

    /// Creates a clock that truncates every reading to `precision`.
    #[must_use]
    pub const fn with_precision(precision: TimePrecision) -> Self {
        Self { precision }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        self.precision.truncate(Utc::now())
    }
}
