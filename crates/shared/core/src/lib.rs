//! Holdfast Core Domain
//!
//! Pure domain types for the Holdfast escrow settlement kernel.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod error;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    // Market-rate types
    DemandLevel,
    // Escrow lifecycle
    EscrowTransaction,
    // Fee policy types
    FeeBreakdown,
    FeePolicy,
    // Bookkeeping records
    FeeTransferRecord,
    MarketContext,
    MarketRateInput,
    NotificationKind,
    NotificationRecord,
    PaymentType,
    RateTables,
    ReleaseState,
    StatusUpdate,
    TransactionId,
    Urgency,
};
pub use error::{FeeError, FeeResult};
pub use values::{Money, Multiplier, Timestamp, from_cents, round2, to_cents};
