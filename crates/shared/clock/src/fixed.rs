use chrono::{TimeZone, Utc};
use holdfast_core::Timestamp;
use holdfast_ports::Clock;

/// Frozen clock for deterministic tests
///
/// Always returns the instant it was constructed with, which pins the
/// seasonal factor the estimator sees.
pub struct FixedClock {
    instant: Timestamp,
}

impl FixedClock {
    pub fn new(instant: Timestamp) -> Self {
        Self { instant }
    }

    /// Pin to noon UTC on the first day of a month (1-indexed)
    pub fn at_month(year: i32, month: u32) -> Self {
        let instant = Utc
            .with_ymd_and_hms(year, month, 1, 12, 0, 0)
            .single()
            .unwrap_or_else(Utc::now);
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.instant
    }

    fn name(&self) -> &str {
        "FixedClock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_is_frozen() {
        let clock = FixedClock::at_month(2026, 6);
        let t1 = clock.now();
        let t2 = clock.now();
        assert_eq!(t1, t2);
        assert_eq!(clock.month0(), 5);
    }
}
