use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Monetary amount in major currency units - uses Decimal for precision
/// Future: could become a newtype with a currency tag
pub type Money = Decimal;

/// Dimensionless scaling factor (location, seasonal, demand adjustments)
pub type Multiplier = Decimal;

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

/// Build a monetary amount from integer minor units (cents).
///
/// The wire boundary speaks cents to avoid floating-point drift;
/// internally everything is Decimal dollars.
pub fn from_cents(cents: i64) -> Money {
    Decimal::new(cents, 2)
}

/// Convert a monetary amount to integer minor units (cents), rounding
/// half-up to the nearest cent first.
pub fn to_cents(amount: Money) -> i64 {
    (round2(amount) * Decimal::ONE_HUNDRED).to_i64().unwrap_or(0)
}

/// Round to whole cents, half-up
pub fn round2(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_cents_round_trip() {
        assert_eq!(from_cents(10_000), dec!(100.00));
        assert_eq!(to_cents(dec!(100.00)), 10_000);
        assert_eq!(to_cents(dec!(0.445)), 45);
        assert_eq!(from_cents(50), dec!(0.50));
    }

    #[test]
    fn test_negative_cents() {
        assert_eq!(to_cents(dec!(-1.255)), -126);
        assert_eq!(from_cents(-126), dec!(-1.26));
    }
}
