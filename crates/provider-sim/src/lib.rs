//! Holdfast Provider Simulation
//!
//! In-memory stand-ins for the payment gateway, payout provider, and
//! bookkeeping store. Each one supports failure injection so workflow
//! tests can exercise every branch of the release state machine without
//! touching a real provider.

mod gateway;
mod store;

pub use gateway::{SimPaymentGateway, SimPayoutGateway, SimTransfer};
pub use store::InMemorySettlementStore;
