use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::entities::transaction::PaymentType;
use crate::error::{FeeError, FeeResult};
use crate::values::{Money, round2, to_cents};

/// Fee policy for escrow releases
///
/// The platform takes a percentage cut of each release, clamped between a
/// floor and a cap; the processor fee is an estimate of what the payment
/// gateway charged for the original capture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeePolicy {
    /// Platform cut as a fraction of the gross amount
    pub platform_rate: Decimal,

    /// Minimum platform fee per release (in dollars)
    pub min_platform_fee: Money,

    /// Maximum platform fee per release (in dollars)
    pub max_platform_fee: Money,

    /// Processor percentage component
    pub processor_rate: Decimal,

    /// Processor flat component per charge
    pub processor_flat: Money,
}

impl FeePolicy {
    /// Create a policy with explicit platform fee bounds
    pub fn new(platform_rate: Decimal, min_platform_fee: Money, max_platform_fee: Money) -> Self {
        Self {
            platform_rate,
            min_platform_fee,
            max_platform_fee,
            ..Default::default()
        }
    }

    /// Set the processor fee estimate components
    pub fn with_processor_fees(mut self, rate: Decimal, flat: Money) -> Self {
        self.processor_rate = rate;
        self.processor_flat = flat;
        self
    }

    /// Split a captured gross amount into platform fee, processor estimate,
    /// and contractor payout.
    ///
    /// Pure function: validation aside, it always holds that
    /// `platform_fee + net_payout == gross` after rounding.
    pub fn compute_fee_breakdown(
        &self,
        gross: Money,
        payment_type: PaymentType,
    ) -> FeeResult<FeeBreakdown> {
        if gross <= Decimal::ZERO {
            return Err(FeeError::InvalidAmount(gross.to_string()));
        }

        // Clamp before rounding; the bounds are already whole cents
        let platform_fee = round2(
            (gross * self.platform_rate)
                .max(self.min_platform_fee)
                .min(self.max_platform_fee),
        );
        let processor_fee = round2(gross * self.processor_rate + self.processor_flat);
        let net_payout = round2(gross - platform_fee);

        // Unclamped: negative for very small transactions, kept exact for
        // accounting. External summaries clamp via reported_revenue().
        let net_revenue = platform_fee - processor_fee;

        Ok(FeeBreakdown {
            gross_amount: round2(gross),
            platform_fee,
            processor_fee,
            net_payout,
            net_revenue,
            payment_type,
        })
    }
}

impl Default for FeePolicy {
    fn default() -> Self {
        Self {
            platform_rate: dec!(0.05),     // 5% platform cut
            min_platform_fee: dec!(0.50),  // floor
            max_platform_fee: dec!(50.00), // cap
            processor_rate: dec!(0.029),   // 2.9% processor
            processor_flat: dec!(0.30),    // + $0.30 per charge
        }
    }
}

/// How a captured gross amount splits between platform, processor, and
/// contractor. All values in dollars at 2-decimal precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeBreakdown {
    /// Captured gross amount
    pub gross_amount: Money,

    /// Platform cut retained by the marketplace
    pub platform_fee: Money,

    /// Estimated gateway cost for the original charge
    pub processor_fee: Money,

    /// Amount transferred to the contractor
    pub net_payout: Money,

    /// Platform fee minus processor estimate - may be negative for small
    /// transactions, stored unclamped for accounting accuracy
    pub net_revenue: Money,

    /// Stage tag carried through to audit rows
    pub payment_type: PaymentType,
}

impl FeeBreakdown {
    /// Revenue as reported in external-facing summaries: never negative
    pub fn reported_revenue(&self) -> Money {
        self.net_revenue.max(Decimal::ZERO)
    }

    /// Net payout in integer cents for the transfer boundary
    pub fn net_payout_cents(&self) -> i64 {
        to_cents(self.net_payout)
    }

    /// Platform fee in integer cents
    pub fn platform_fee_cents(&self) -> i64 {
        to_cents(self.platform_fee)
    }

    /// Gross amount in integer cents
    pub fn gross_amount_cents(&self) -> i64 {
        to_cents(self.gross_amount)
    }
}
