//! Domain validation errors

use thiserror::Error;

/// Validation failures raised by the fee calculator.
///
/// These are local, synchronous failures - retrying one is meaningless,
/// so the caller surfaces them immediately.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeeError {
    #[error("Invalid amount: {0} (gross amount must be positive)")]
    InvalidAmount(String),

    #[error("Invalid payment type: {0}")]
    InvalidPaymentType(String),
}

pub type FeeResult<T> = std::result::Result<T, FeeError>;
