use holdfast_ports::JitterSource;
use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

/// Thread-local RNG jitter source for production use
pub struct RandomJitter;

impl RandomJitter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomJitter {
    fn default() -> Self {
        Self::new()
    }
}

impl JitterSource for RandomJitter {
    fn sample(&self) -> Decimal {
        let raw: f64 = rand::thread_rng().gen_range(-1.0..=1.0);
        Decimal::from_f64(raw).unwrap_or(Decimal::ZERO)
    }
}

/// Fixed jitter source for deterministic tests
pub struct FixedJitter {
    value: Decimal,
}

impl FixedJitter {
    /// `value` must lie in [-1.0, 1.0], matching what the random source
    /// produces
    pub fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// No jitter at all
    pub fn zero() -> Self {
        Self::new(Decimal::ZERO)
    }
}

impl JitterSource for FixedJitter {
    fn sample(&self) -> Decimal {
        self.value
    }
}
