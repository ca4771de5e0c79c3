//! Simulated payment and payout gateways
//!
//! Amounts to capture are registered up front with `authorize`; failure
//! flags flip provider behavior per test.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use holdfast_core::Money;
use holdfast_ports::{
    Capture, CaptureStatus, GatewayError, GatewayResult, PaymentGateway, PayoutGateway,
    TransferReceipt,
};
use log::debug;
use tokio::sync::Mutex;
use uuid::Uuid;

/// In-memory payment capture provider
#[derive(Default)]
pub struct SimPaymentGateway {
    /// Authorized intents and their amounts
    intents: Mutex<HashMap<String, Money>>,
    /// Decline every capture
    decline: AtomicBool,
    /// Report captures as still processing
    stuck_processing: AtomicBool,
}

impl SimPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an authorized intent that can later be captured
    pub async fn authorize(&self, intent_id: impl Into<String>, amount: Money) {
        self.intents.lock().await.insert(intent_id.into(), amount);
    }

    /// Decline all subsequent captures
    pub fn set_decline(&self, decline: bool) {
        self.decline.store(decline, Ordering::SeqCst);
    }

    /// Report all subsequent captures as stuck in processing
    pub fn set_stuck_processing(&self, stuck: bool) {
        self.stuck_processing.store(stuck, Ordering::SeqCst);
    }
}

#[async_trait]
impl PaymentGateway for SimPaymentGateway {
    async fn capture(&self, intent_id: &str) -> GatewayResult<Capture> {
        if self.decline.load(Ordering::SeqCst) {
            return Err(GatewayError::CaptureDeclined {
                intent_id: intent_id.to_string(),
                reason: "card declined".to_string(),
            });
        }

        let amount = self
            .intents
            .lock()
            .await
            .get(intent_id)
            .copied()
            .ok_or_else(|| GatewayError::CaptureDeclined {
                intent_id: intent_id.to_string(),
                reason: "no such payment intent".to_string(),
            })?;

        let status = if self.stuck_processing.load(Ordering::SeqCst) {
            CaptureStatus::Processing
        } else {
            CaptureStatus::Succeeded
        };
        let charge_id = format!("ch_{}", Uuid::new_v4().simple());
        debug!("sim capture {intent_id}: {amount} on {charge_id} ({status:?})");

        Ok(Capture {
            status,
            amount_captured: amount,
            charge_id,
        })
    }
}

/// One transfer the sim payout provider executed
#[derive(Debug, Clone)]
pub struct SimTransfer {
    pub transfer_id: String,
    pub amount_cents: i64,
    pub destination_account_id: String,
}

/// In-memory payout transfer provider
#[derive(Default)]
pub struct SimPayoutGateway {
    transfers: Mutex<Vec<SimTransfer>>,
    /// Reject every transfer
    reject: AtomicBool,
}

impl SimPayoutGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject all subsequent transfers
    pub fn set_reject(&self, reject: bool) {
        self.reject.store(reject, Ordering::SeqCst);
    }

    /// Transfers executed so far
    pub async fn transfers(&self) -> Vec<SimTransfer> {
        self.transfers.lock().await.clone()
    }
}

#[async_trait]
impl PayoutGateway for SimPayoutGateway {
    async fn transfer(
        &self,
        amount_cents: i64,
        destination_account_id: &str,
    ) -> GatewayResult<TransferReceipt> {
        if self.reject.load(Ordering::SeqCst) {
            return Err(GatewayError::TransferRejected {
                account_id: destination_account_id.to_string(),
                reason: "destination account unavailable".to_string(),
            });
        }
        if amount_cents <= 0 {
            return Err(GatewayError::TransferRejected {
                account_id: destination_account_id.to_string(),
                reason: format!("non-positive amount: {amount_cents}"),
            });
        }

        let transfer_id = format!("tr_{}", Uuid::new_v4().simple());
        debug!("sim transfer {transfer_id}: {amount_cents}c to {destination_account_id}");
        self.transfers.lock().await.push(SimTransfer {
            transfer_id: transfer_id.clone(),
            amount_cents,
            destination_account_id: destination_account_id.to_string(),
        });

        Ok(TransferReceipt { transfer_id })
    }
}
