use rust_decimal::Decimal;

/// Port for the availability jitter source
///
/// Contractor availability carries bounded random noise. Hiding the
/// random source behind a port keeps the estimator deterministic under
/// test - swap in a fixed source and every output is reproducible.
pub trait JitterSource: Send + Sync {
    /// A sample in [-1.0, 1.0]; the estimator scales it to its band
    fn sample(&self) -> Decimal;
}
