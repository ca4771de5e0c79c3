use thiserror::Error;

/// Failures reported by the payment and payout providers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Capture declined for intent {intent_id}: {reason}")]
    CaptureDeclined { intent_id: String, reason: String },

    #[error("Transfer rejected for account {account_id}: {reason}")]
    TransferRejected { account_id: String, reason: String },

    #[error("Provider unavailable: {0}")]
    Unavailable(String),
}

pub type GatewayResult<T> = std::result::Result<T, GatewayError>;

/// Failures reported by the persistence layer
///
/// After funds move these are logged and left for reconciliation,
/// never propagated as release failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Write failed for {table}: {reason}")]
    WriteFailed { table: String, reason: String },
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
