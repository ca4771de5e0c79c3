use async_trait::async_trait;
use holdfast_core::{FeeTransferRecord, NotificationRecord, StatusUpdate, TransactionId};

use crate::error::StoreResult;

/// Port for the persistent bookkeeping store
///
/// All three writes are best-effort from the release workflow's point of
/// view: they run after funds have moved and are never rolled back.
#[async_trait]
pub trait SettlementStore: Send + Sync {
    /// Insert the fee/transfer audit row
    async fn record_fee_transfer(&self, record: FeeTransferRecord) -> StoreResult<()>;

    /// Patch release status fields onto the transaction row
    async fn update_transaction_status(
        &self,
        id: TransactionId,
        update: StatusUpdate,
    ) -> StoreResult<()>;

    /// Insert an in-app notification for the payee
    async fn insert_notification(&self, record: NotificationRecord) -> StoreResult<()>;
}
