//! Holdfast Clock Infrastructure
//!
//! Time sources for the settlement kernel:
//! - [`SystemClock`] returns real wall-clock time for production
//! - [`FixedClock`] pins time for deterministic seasonal-factor tests

mod fixed;
mod system;

pub use fixed::FixedClock;
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use holdfast_ports::Clock;
