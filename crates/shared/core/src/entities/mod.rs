mod fee;
pub mod market;
mod records;
mod release_state;
mod transaction;

pub use fee::{FeeBreakdown, FeePolicy};
pub use market::{DemandLevel, MarketContext, MarketRateInput, RateTables, Urgency};
pub use records::{FeeTransferRecord, NotificationKind, NotificationRecord, StatusUpdate};
pub use release_state::ReleaseState;
pub use transaction::{EscrowTransaction, PaymentType, TransactionId};
