use async_trait::async_trait;
use holdfast_core::Money;

use crate::error::GatewayResult;

/// Outcome status of a capture attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureStatus {
    Succeeded,
    /// Gateway accepted the request but the charge is not yet final
    Processing,
    Failed,
}

/// Result of capturing a payment intent
#[derive(Debug, Clone)]
pub struct Capture {
    pub status: CaptureStatus,
    /// Amount the gateway actually captured, in dollars
    pub amount_captured: Money,
    /// Charge the funds now sit on
    pub charge_id: String,
}

/// Receipt for a completed payout transfer
#[derive(Debug, Clone)]
pub struct TransferReceipt {
    pub transfer_id: String,
}

/// Port for the payment capture provider
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Capture a previously authorized payment intent
    async fn capture(&self, intent_id: &str) -> GatewayResult<Capture>;
}

/// Port for the payout transfer provider
#[async_trait]
pub trait PayoutGateway: Send + Sync {
    /// Transfer funds to a connected account.
    ///
    /// The boundary speaks integer cents so no rounding happens inside
    /// the provider.
    async fn transfer(
        &self,
        amount_cents: i64,
        destination_account_id: &str,
    ) -> GatewayResult<TransferReceipt>;
}
