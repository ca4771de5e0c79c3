//! Market-rate estimation
//!
//! Pure table lookups composed with the clock (seasonal factor) and the
//! jitter source (availability noise). Tables come from
//! [`holdfast_core::RateTables`]; pass custom tables to override pricing
//! in tests or per-region deployments.

use std::sync::Arc;

use holdfast_core::{
    DemandLevel, MarketContext, MarketRateInput, Money, Multiplier, RateTables, Urgency, round2,
};
use holdfast_ports::{Clock, JitterSource};
use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Relative width of the availability jitter band
const JITTER_BAND: Decimal = dec!(0.10);

/// Suggests hourly rates from static pricing tables
pub struct MarketRateEstimator {
    tables: RateTables,
    clock: Arc<dyn Clock>,
    jitter: Arc<dyn JitterSource>,
}

impl MarketRateEstimator {
    /// Create an estimator with the production tables
    pub fn new(clock: Arc<dyn Clock>, jitter: Arc<dyn JitterSource>) -> Self {
        Self::with_tables(RateTables::default(), clock, jitter)
    }

    /// Create an estimator with custom tables
    pub fn with_tables(
        tables: RateTables,
        clock: Arc<dyn Clock>,
        jitter: Arc<dyn JitterSource>,
    ) -> Self {
        Self {
            tables,
            clock,
            jitter,
        }
    }

    /// Get the tables this estimator prices from
    pub fn tables(&self) -> &RateTables {
        &self.tables
    }

    /// Estimate market conditions for a category/location pair.
    ///
    /// Never fails: unknown categories and locations use table defaults.
    pub fn estimate(&self, input: &MarketRateInput) -> MarketContext {
        let base_rate = self.tables.base_rate(&input.category);
        let location_multiplier = self.tables.location_multiplier(&input.location);
        let seasonal_factor = self.tables.seasonal_factor(self.clock.month0());
        let demand_level = self.tables.demand_level(&input.category);
        let contractor_availability = self.availability(demand_level, location_multiplier);

        let average_price = round2(base_rate * location_multiplier);
        let price_range = (
            round2(average_price * dec!(0.7)),
            round2(average_price * dec!(1.3)),
        );

        debug!(
            "estimate category={} location={} base={} loc_mult={} season={} demand={:?}",
            input.category,
            input.location,
            base_rate,
            location_multiplier,
            seasonal_factor,
            demand_level
        );

        MarketContext {
            average_price,
            price_range,
            demand_level,
            seasonal_factor,
            location_multiplier,
            contractor_availability,
        }
    }

    /// Combined multiplier for applying a context to a quoted price:
    /// location x seasonal x demand x availability x urgency.
    pub fn adjustment_factor(&self, ctx: &MarketContext, urgency: Option<Urgency>) -> Multiplier {
        let availability_multiplier = if ctx.contractor_availability < dec!(0.4) {
            dec!(1.2)
        } else if ctx.contractor_availability > dec!(0.8) {
            dec!(0.95)
        } else {
            Decimal::ONE
        };
        let urgency_multiplier = match urgency {
            Some(Urgency::High) => dec!(1.25),
            _ => Decimal::ONE,
        };

        ctx.location_multiplier
            * ctx.seasonal_factor
            * ctx.demand_level.multiplier()
            * availability_multiplier
            * urgency_multiplier
    }

    /// One-call convenience: estimate, then apply the adjustment factor
    /// to the category base rate.
    pub fn suggested_rate(&self, input: &MarketRateInput) -> Money {
        let ctx = self.estimate(input);
        let factor = self.adjustment_factor(&ctx, input.urgency);
        round2(self.tables.base_rate(&input.category) * factor)
    }

    /// Availability base for the demand/region pair, with bounded jitter,
    /// clamped to [0.2, 1.0]
    fn availability(&self, demand: DemandLevel, location_multiplier: Multiplier) -> Decimal {
        let base = self.tables.availability_base(demand, location_multiplier);
        let jittered = base * (Decimal::ONE + self.jitter.sample() * JITTER_BAND);
        jittered.clamp(dec!(0.2), dec!(1.0)).round_dp(4)
    }
}
