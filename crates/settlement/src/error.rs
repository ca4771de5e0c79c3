//! Release workflow errors
//!
//! Only capture and transfer failures surface as errors - they mean no
//! payout happened (or, for a transfer failure, funds are captured but
//! stranded, which the error carries enough context to reconcile).
//! Bookkeeping failures after the transfer are logged, not raised.

use holdfast_core::FeeError;
use holdfast_ports::GatewayError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Capture failed for intent {intent_id}: {source}")]
    CaptureFailed {
        intent_id: String,
        #[source]
        source: GatewayError,
    },

    #[error("Capture for intent {intent_id} did not complete (status {status})")]
    CaptureIncomplete { intent_id: String, status: String },

    #[error("Transfer to {account_id} failed after capture (charge {charge_id}): {source}")]
    TransferFailed {
        account_id: String,
        charge_id: String,
        #[source]
        source: GatewayError,
    },

    #[error(transparent)]
    Fee(#[from] FeeError),
}

pub type Result<T> = std::result::Result<T, Error>;
