//! In-memory bookkeeping store
//!
//! Writes land in plain vectors the test can inspect. Any table can be
//! made to fail to exercise the workflow's best-effort recording path.

use std::collections::HashSet;

use async_trait::async_trait;
use holdfast_core::{FeeTransferRecord, NotificationRecord, StatusUpdate, TransactionId};
use holdfast_ports::{SettlementStore, StoreError, StoreResult};
use tokio::sync::Mutex;

/// In-memory settlement store with per-table failure injection
#[derive(Default)]
pub struct InMemorySettlementStore {
    fee_transfers: Mutex<Vec<FeeTransferRecord>>,
    status_updates: Mutex<Vec<(TransactionId, StatusUpdate)>>,
    notifications: Mutex<Vec<NotificationRecord>>,
    failing_tables: Mutex<HashSet<String>>,
}

impl InMemorySettlementStore {
    pub const FEE_TRANSFERS: &'static str = "fee_transfers";
    pub const TRANSACTIONS: &'static str = "transactions";
    pub const NOTIFICATIONS: &'static str = "notifications";

    pub fn new() -> Self {
        Self::default()
    }

    /// Make writes to one table fail
    pub async fn fail_table(&self, table: &str) {
        self.failing_tables.lock().await.insert(table.to_string());
    }

    /// Make every write fail
    pub async fn fail_all(&self) {
        for table in [Self::FEE_TRANSFERS, Self::TRANSACTIONS, Self::NOTIFICATIONS] {
            self.fail_table(table).await;
        }
    }

    async fn check(&self, table: &str) -> StoreResult<()> {
        if self.failing_tables.lock().await.contains(table) {
            return Err(StoreError::WriteFailed {
                table: table.to_string(),
                reason: "injected failure".to_string(),
            });
        }
        Ok(())
    }

    /// Fee transfer rows written so far
    pub async fn fee_transfers(&self) -> Vec<FeeTransferRecord> {
        self.fee_transfers.lock().await.clone()
    }

    /// Status updates written so far
    pub async fn status_updates(&self) -> Vec<(TransactionId, StatusUpdate)> {
        self.status_updates.lock().await.clone()
    }

    /// Notifications written so far
    pub async fn notifications(&self) -> Vec<NotificationRecord> {
        self.notifications.lock().await.clone()
    }
}

#[async_trait]
impl SettlementStore for InMemorySettlementStore {
    async fn record_fee_transfer(&self, record: FeeTransferRecord) -> StoreResult<()> {
        self.check(Self::FEE_TRANSFERS).await?;
        self.fee_transfers.lock().await.push(record);
        Ok(())
    }

    async fn update_transaction_status(
        &self,
        id: TransactionId,
        update: StatusUpdate,
    ) -> StoreResult<()> {
        self.check(Self::TRANSACTIONS).await?;
        self.status_updates.lock().await.push((id, update));
        Ok(())
    }

    async fn insert_notification(&self, record: NotificationRecord) -> StoreResult<()> {
        self.check(Self::NOTIFICATIONS).await?;
        self.notifications.lock().await.push(record);
        Ok(())
    }
}
