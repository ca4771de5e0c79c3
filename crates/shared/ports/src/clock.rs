use holdfast_core::Timestamp;

/// Port for time abstraction
///
/// This allows the system to use different time sources:
/// - Real system time for production
/// - Fixed time for deterministic seasonal-factor tests
pub trait Clock: Send + Sync {
    /// Get the current time according to this clock
    fn now(&self) -> Timestamp;

    /// Current month, 0-indexed (January = 0), for seasonal lookups
    fn month0(&self) -> usize {
        use chrono::Datelike;
        self.now().month0() as usize
    }

    /// Get the clock's name/identifier for debugging
    fn name(&self) -> &str {
        "Clock"
    }
}
