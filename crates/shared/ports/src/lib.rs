//! Holdfast Ports
//!
//! Port definitions (traits) for the Holdfast escrow settlement kernel.
//! These define the boundaries between domain logic and infrastructure.

mod clock;
mod error;
mod gateway;
mod jitter;
mod store;

pub use clock::Clock;
pub use error::{GatewayError, GatewayResult, StoreError, StoreResult};
pub use gateway::{Capture, CaptureStatus, PaymentGateway, PayoutGateway, TransferReceipt};
pub use jitter::JitterSource;
pub use store::SettlementStore;
