//! Holdfast Pricing
//!
//! The market-rate estimator suggests an hourly rate for a service
//! category in a location, adjusted for season, demand, urgency, and
//! contractor availability:
//!
//! ```text
//! MarketRateInput ──► ┌──────────────────────────────────────┐
//!                     │        MarketRateEstimator           │
//!                     │  base rate ── category table         │
//!                     │  × location ── ordered region keys   │
//!                     │  × seasonal ── month via Clock port  │
//!                     │  × demand   ── high/low partitions   │
//!                     │  × availability ── JitterSource port │
//!                     └──────────────────┬───────────────────┘
//!                                        │
//!                                        ▼
//!                            MarketContext + adjustment factor
//! ```
//!
//! Unknown categories and locations fall back to defaults; the estimator
//! never errors. The only non-determinism is the availability jitter,
//! injected through [`holdfast_ports::JitterSource`].

mod estimator;
mod jitter;

pub use estimator::MarketRateEstimator;
pub use jitter::{FixedJitter, RandomJitter};
