//! Market-rate domain types and lookup tables
//!
//! All tables are immutable injected configuration - construct a
//! [`RateTables`] (usually `Default`) and hand it to the estimator.
//! Nothing in here reads clocks or random sources; the estimator
//! supplies month and jitter from its own ports.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::values::{Money, Multiplier};

/// How contested a service category currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemandLevel {
    High,
    Medium,
    Low,
}

impl DemandLevel {
    /// Price multiplier applied when adjusting a rate for demand
    pub fn multiplier(&self) -> Multiplier {
        match self {
            DemandLevel::High => dec!(1.15),
            DemandLevel::Low => dec!(0.9),
            DemandLevel::Medium => Decimal::ONE,
        }
    }
}

/// How soon the customer needs the work done
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    #[default]
    Medium,
    /// Premium pricing applies
    High,
}

/// What the caller knows about the job being priced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketRateInput {
    /// Service category, e.g. "plumbing" (unknown falls back to defaults)
    pub category: String,
    /// Free-text location, matched by substring against known regions
    pub location: String,
    /// Optional urgency, defaults to Medium
    pub urgency: Option<Urgency>,
}

impl MarketRateInput {
    pub fn new(category: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            location: location.into(),
            urgency: None,
        }
    }

    pub fn with_urgency(mut self, urgency: Urgency) -> Self {
        self.urgency = Some(urgency);
        self
    }
}

/// Snapshot of market conditions for one category/location pair.
///
/// Transient - recomputed per call, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketContext {
    /// Suggested hourly price (base rate scaled by location)
    pub average_price: Money,
    /// average_price +/- 30%
    pub price_range: (Money, Money),
    /// Demand classification for the category
    pub demand_level: DemandLevel,
    /// Month-of-year pricing factor
    pub seasonal_factor: Multiplier,
    /// Regional pricing factor
    pub location_multiplier: Multiplier,
    /// Fraction of contractors free to take the job, in [0.2, 1.0]
    pub contractor_availability: Decimal,
}

/// Immutable pricing tables for the market-rate estimator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateTables {
    /// Hourly base rate per category
    pub base_rates: Vec<(String, Money)>,

    /// Fallback when the category is unknown
    pub default_base_rate: Money,

    /// Ordered region keys matched by substring; first match wins, so
    /// London zone keys must precede the plain city names
    pub location_multipliers: Vec<(String, Multiplier)>,

    /// Fallback when no region key matches
    pub default_location_multiplier: Multiplier,

    /// Month-indexed factors, January first (0-indexed)
    pub seasonal_factors: [Multiplier; 12],

    /// Categories currently in high demand
    pub high_demand: Vec<String>,

    /// Categories currently in low demand
    pub low_demand: Vec<String>,
}

impl RateTables {
    /// Hourly base rate for a category, defaulting for unknown/empty input
    pub fn base_rate(&self, category: &str) -> Money {
        let category = normalize(category);
        self.base_rates
            .iter()
            .find(|(key, _)| *key == category)
            .map(|(_, rate)| *rate)
            .unwrap_or(self.default_base_rate)
    }

    /// Regional multiplier by ordered substring match on the location text
    pub fn location_multiplier(&self, location: &str) -> Multiplier {
        let location = normalize(location);
        self.location_multipliers
            .iter()
            .find(|(key, _)| location.contains(key.as_str()))
            .map(|(_, m)| *m)
            .unwrap_or(self.default_location_multiplier)
    }

    /// Seasonal factor for a 0-indexed month; out-of-range months (should
    /// not happen with a real clock) fall back to 1.0
    pub fn seasonal_factor(&self, month0: usize) -> Multiplier {
        self.seasonal_factors
            .get(month0)
            .copied()
            .unwrap_or(Decimal::ONE)
    }

    /// Demand classification for a category
    pub fn demand_level(&self, category: &str) -> DemandLevel {
        let category = normalize(category);
        if self.high_demand.iter().any(|c| *c == category) {
            DemandLevel::High
        } else if self.low_demand.iter().any(|c| *c == category) {
            DemandLevel::Low
        } else {
            DemandLevel::Medium
        }
    }

    /// Deterministic availability before jitter: a fixed base shifted by
    /// demand (busy trades have fewer free contractors) and by region
    /// (expensive regions run busier)
    pub fn availability_base(&self, demand: DemandLevel, location_multiplier: Multiplier) -> Decimal {
        let mut base = dec!(0.70);
        match demand {
            DemandLevel::High => base -= dec!(0.15),
            DemandLevel::Low => base += dec!(0.10),
            DemandLevel::Medium => {}
        }
        if location_multiplier >= dec!(1.5) {
            base -= dec!(0.10);
        }
        base
    }
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

impl Default for RateTables {
    fn default() -> Self {
        let rate = |key: &str, value: Decimal| (key.to_string(), value);
        Self {
            base_rates: vec![
                rate("plumbing", dec!(45)),
                rate("electrical", dec!(50)),
                rate("heating", dec!(55)),
                rate("roofing", dec!(48)),
                rate("carpentry", dec!(40)),
                rate("plastering", dec!(35)),
                rate("tiling", dec!(38)),
                rate("painting", dec!(30)),
                rate("gardening", dec!(28)),
                rate("cleaning", dec!(22)),
            ],
            default_base_rate: dec!(35),
            // Zone keys before city keys: "central london" must win over
            // any later, looser match
            location_multipliers: vec![
                rate("central london", dec!(1.8)),
                rate("inner london", dec!(1.5)),
                rate("outer london", dec!(1.3)),
                rate("london", dec!(1.4)),
                rate("manchester", dec!(1.15)),
                rate("bristol", dec!(1.15)),
                rate("edinburgh", dec!(1.15)),
                rate("birmingham", dec!(1.1)),
                rate("leeds", dec!(1.05)),
                rate("glasgow", dec!(1.05)),
                rate("liverpool", dec!(1.0)),
                rate("sheffield", dec!(0.95)),
                rate("newcastle", dec!(0.95)),
            ],
            default_location_multiplier: Decimal::ONE,
            seasonal_factors: [
                dec!(0.90), // Jan
                dec!(0.92),
                dec!(1.00),
                dec!(1.05),
                dec!(1.10),
                dec!(1.15), // Jun
                dec!(1.15),
                dec!(1.10),
                dec!(1.05),
                dec!(1.00),
                dec!(0.95),
                dec!(1.05), // Dec
            ],
            high_demand: vec![
                "plumbing".to_string(),
                "electrical".to_string(),
                "heating".to_string(),
                "roofing".to_string(),
            ],
            low_demand: vec!["cleaning".to_string(), "gardening".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_rate_lookup_and_default() {
        let tables = RateTables::default();
        assert_eq!(tables.base_rate("plumbing"), dec!(45));
        assert_eq!(tables.base_rate("  Plumbing "), dec!(45));
        assert_eq!(tables.base_rate("unknown_xyz"), dec!(35));
        assert_eq!(tables.base_rate(""), dec!(35));
    }

    #[test]
    fn test_location_zone_keys_win_over_city() {
        let tables = RateTables::default();
        assert_eq!(tables.location_multiplier("Central London"), dec!(1.8));
        assert_eq!(tables.location_multiplier("Camden, Inner London"), dec!(1.5));
        // Plain "London" falls through the zone keys
        assert_eq!(tables.location_multiplier("London"), dec!(1.4));
        assert_eq!(tables.location_multiplier("Greater Manchester"), dec!(1.15));
        assert_eq!(tables.location_multiplier("Nowhereville"), dec!(1.0));
    }

    #[test]
    fn test_demand_partition() {
        let tables = RateTables::default();
        assert_eq!(tables.demand_level("plumbing"), DemandLevel::High);
        assert_eq!(tables.demand_level("cleaning"), DemandLevel::Low);
        assert_eq!(tables.demand_level("painting"), DemandLevel::Medium);
        assert_eq!(tables.demand_level("unknown_xyz"), DemandLevel::Medium);
    }

    #[test]
    fn test_seasonal_factor_bounds() {
        let tables = RateTables::default();
        assert_eq!(tables.seasonal_factor(0), dec!(0.90));
        assert_eq!(tables.seasonal_factor(5), dec!(1.15));
        assert_eq!(tables.seasonal_factor(12), Decimal::ONE);
    }

    #[test]
    fn test_availability_base_shifts() {
        let tables = RateTables::default();
        assert_eq!(
            tables.availability_base(DemandLevel::Medium, dec!(1.0)),
            dec!(0.70)
        );
        assert_eq!(
            tables.availability_base(DemandLevel::High, dec!(1.8)),
            dec!(0.45)
        );
        assert_eq!(
            tables.availability_base(DemandLevel::Low, dec!(0.95)),
            dec!(0.80)
        );
    }
}
