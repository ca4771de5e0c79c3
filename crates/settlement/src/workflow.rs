//! Release workflow
//!
//! Sequential orchestration per transaction: capture the payment intent,
//! split the captured amount, transfer the payout, then write the audit
//! rows. Distinct transactions are independent; the workflow takes
//! `&self` and may be driven concurrently.

use std::sync::Arc;

use holdfast_core::{
    EscrowTransaction, FeeBreakdown, FeePolicy, FeeTransferRecord, NotificationKind,
    NotificationRecord, ReleaseState, StatusUpdate,
};
use holdfast_ports::{
    CaptureStatus, Clock, PaymentGateway, PayoutGateway, SettlementStore,
};
use log::{debug, info, warn};

use crate::error::{Error, Result};

/// What a completed release looked like
#[derive(Debug, Clone)]
pub struct ReleaseOutcome {
    /// Terminal state: `Recorded`, or `Transferred` when bookkeeping
    /// failed after the money moved
    pub state: ReleaseState,
    /// Fee split over the captured amount
    pub breakdown: FeeBreakdown,
    /// Gateway charge the funds came from
    pub charge_id: String,
    /// Payout transfer that moved them
    pub transfer_id: String,
    /// False when any bookkeeping write failed; reconciliation repairs it
    pub audit_recorded: bool,
}

/// Drives a single escrow release end to end
pub struct ReleaseWorkflow<G, P, S> {
    gateway: G,
    payouts: P,
    store: S,
    policy: FeePolicy,
    clock: Arc<dyn Clock>,
}

impl<G, P, S> ReleaseWorkflow<G, P, S>
where
    G: PaymentGateway,
    P: PayoutGateway,
    S: SettlementStore,
{
    /// Create a workflow with the default fee policy
    pub fn new(gateway: G, payouts: P, store: S, clock: Arc<dyn Clock>) -> Self {
        Self {
            gateway,
            payouts,
            store,
            policy: FeePolicy::default(),
            clock,
        }
    }

    /// Override the fee policy
    pub fn with_policy(mut self, policy: FeePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Get the fee policy in force
    pub fn policy(&self) -> &FeePolicy {
        &self.policy
    }

    /// Get the payment capture provider
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Get the payout transfer provider
    pub fn payouts(&self) -> &P {
        &self.payouts
    }

    /// Get the bookkeeping store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Release an escrow transaction to its payee.
    ///
    /// Errors mean no payout reached the contractor. A returned outcome
    /// means the transfer happened; check `audit_recorded` for whether
    /// the bookkeeping rows landed.
    pub async fn release(&self, txn: &EscrowTransaction) -> Result<ReleaseOutcome> {
        let mut state = ReleaseState::Pending;
        debug!("release {}: state={:?}", txn.id, state);

        // 1. Capture
        let capture = self
            .gateway
            .capture(&txn.payment_intent_id)
            .await
            .map_err(|source| Error::CaptureFailed {
                intent_id: txn.payment_intent_id.clone(),
                source,
            })?;
        if capture.status != CaptureStatus::Succeeded {
            return Err(Error::CaptureIncomplete {
                intent_id: txn.payment_intent_id.clone(),
                status: format!("{:?}", capture.status),
            });
        }
        state = ReleaseState::Captured;
        info!(
            "release {}: state={state:?}, captured {} on charge {}",
            txn.id, capture.amount_captured, capture.charge_id
        );
        if capture.amount_captured != txn.amount {
            warn!(
                "release {}: captured amount {} differs from transaction amount {}",
                txn.id, capture.amount_captured, txn.amount
            );
        }

        // 2. Compute the split over what was actually captured
        let breakdown = self
            .policy
            .compute_fee_breakdown(capture.amount_captured, txn.payment_type)?;
        state = ReleaseState::Computed;
        debug!(
            "release {}: state={state:?}, platform_fee={} net_payout={}",
            txn.id, breakdown.platform_fee, breakdown.net_payout
        );

        // 3. Transfer the net payout
        let receipt = self
            .payouts
            .transfer(breakdown.net_payout_cents(), &txn.payee_account_id)
            .await
            .map_err(|source| Error::TransferFailed {
                account_id: txn.payee_account_id.clone(),
                charge_id: capture.charge_id.clone(),
                source,
            })?;
        state = ReleaseState::Transferred;
        info!(
            "release {}: state={state:?}, transferred {} to {} ({})",
            txn.id, breakdown.net_payout, txn.payee_account_id, receipt.transfer_id
        );

        // 4. Best-effort bookkeeping - funds have moved, never roll back
        let audit_recorded = self
            .record(txn, &breakdown, &capture.charge_id, &receipt.transfer_id)
            .await;
        if audit_recorded {
            state = ReleaseState::Recorded;
        }

        Ok(ReleaseOutcome {
            state,
            breakdown,
            charge_id: capture.charge_id,
            transfer_id: receipt.transfer_id,
            audit_recorded,
        })
    }

    /// Write the three bookkeeping rows, each independently
    /// swallow-and-log. Returns true only if all of them landed.
    async fn record(
        &self,
        txn: &EscrowTransaction,
        breakdown: &FeeBreakdown,
        charge_id: &str,
        transfer_id: &str,
    ) -> bool {
        let now = self.clock.now();
        let mut all_ok = true;

        let record = FeeTransferRecord {
            transaction_id: txn.id,
            charge_id: charge_id.to_string(),
            transfer_id: transfer_id.to_string(),
            breakdown: breakdown.clone(),
            recorded_at: now,
        };
        if let Err(err) = self.store.record_fee_transfer(record).await {
            warn!("release {}: fee transfer record not written: {err}", txn.id);
            all_ok = false;
        }

        let update = StatusUpdate::transferred(now);
        if let Err(err) = self.store.update_transaction_status(txn.id, update).await {
            warn!("release {}: status update not written: {err}", txn.id);
            all_ok = false;
        }

        let notification = NotificationRecord {
            account_id: txn.payee_account_id.clone(),
            kind: NotificationKind::PaymentReleased,
            message: format!("Payment of ${} released to your account", breakdown.net_payout),
        };
        if let Err(err) = self.store.insert_notification(notification).await {
            warn!("release {}: notification not written: {err}", txn.id);
            all_ok = false;
        }

        all_ok
    }
}
