//! Current-time accessor.

use chrono::{DateTime, Utc};
use quill_core::clock::Clock;

/// Returns the current time as reported by `clock`.
///
/// Precision and truncation policy belong to the clock; the reading is
/// forwarded unchanged.
#[must_use]
pub fn current_time(clock: &dyn Clock) -> DateTime<Utc> {
    clock.now()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeDelta, TimeZone, Timelike, Utc};

    use quill_core::clock::{SystemClock, TimePrecision};
    use quill_test_support::{FixedClock, SteppingClock};

    use super::current_time;

    fn fixed_clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap())
    }

    #[test]
    fn test_returns_exactly_what_the_clock_reports() {
        let clock = fixed_clock();
        assert_eq!(current_time(&clock), clock.0);
    }

    #[test]
    fn test_successive_readings_are_non_decreasing() {
        let clock = SystemClock::new();
        let first = current_time(&clock);
        let second = current_time(&clock);
        assert!(second >= first);
    }

    #[test]
    fn test_stepping_clock_yields_increasing_readings() {
        let start = Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap();
        let clock = SteppingClock::new(start, TimeDelta::milliseconds(250));

        let first = current_time(&clock);
        let second = current_time(&clock);
        let third = current_time(&clock);

        assert!(first < second && second < third);
        assert_eq!(third - first, TimeDelta::milliseconds(500));
    }

    #[test]
    fn test_truncation_policy_is_the_clocks_own() {
        let clock = SystemClock::with_precision(TimePrecision::Seconds);
        assert_eq!(current_time(&clock).nanosecond(), 0);
    }
}
