//! Bookkeeping records written after funds move
//!
//! These are write-only audit rows: a failure to persist one is logged
//! and left for reconciliation, never rolled back, because the transfer
//! has already happened.

use serde::{Deserialize, Serialize};

use crate::entities::fee::FeeBreakdown;
use crate::entities::transaction::TransactionId;
use crate::values::Timestamp;

/// Audit row tying a transfer back to its charge and fee split
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeTransferRecord {
    pub transaction_id: TransactionId,
    /// Gateway charge the funds came from
    pub charge_id: String,
    /// Payout transfer that moved them
    pub transfer_id: String,
    /// Full split, net_revenue unclamped
    pub breakdown: FeeBreakdown,
    pub recorded_at: Timestamp,
}

/// Fields patched onto the transaction row after release
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub fee_transfer_status: String,
    pub released_at: Timestamp,
}

impl StatusUpdate {
    pub fn transferred(released_at: Timestamp) -> Self {
        Self {
            fee_transfer_status: "transferred".to_string(),
            released_at,
        }
    }
}

/// What kind of notification to show the recipient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    PaymentReleased,
}

/// In-app notification row for the payee
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub account_id: String,
    pub kind: NotificationKind,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::fee::FeePolicy;
    use crate::entities::transaction::PaymentType;
    use rust_decimal_macros::dec;

    #[test]
    fn test_fee_transfer_record_serializes() {
        let breakdown = FeePolicy::default()
            .compute_fee_breakdown(dec!(100), PaymentType::Final)
            .unwrap();
        let record = FeeTransferRecord {
            transaction_id: TransactionId::new(),
            charge_id: "ch_123".to_string(),
            transfer_id: "tr_456".to_string(),
            breakdown,
            recorded_at: chrono::Utc::now(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["charge_id"], "ch_123");
        assert_eq!(json["breakdown"]["net_payout"], "95.00");
    }

    #[test]
    fn test_status_update_tag() {
        let update = StatusUpdate::transferred(chrono::Utc::now());
        assert_eq!(update.fee_transfer_status, "transferred");
    }
}
