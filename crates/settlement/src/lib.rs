//! Holdfast Settlement
//!
//! The release workflow moves escrowed funds to the contractor once a
//! job completes:
//!
//! ```text
//! EscrowTransaction ──► ┌─────────────────────────────────────────┐
//!                       │            ReleaseWorkflow              │
//!                       │  1. capture   ── PaymentGateway port    │
//!                       │  2. compute   ── FeePolicy (pure)       │
//!                       │  3. transfer  ── PayoutGateway port     │
//!                       │  4. record    ── SettlementStore port   │
//!                       └────────────────────┬────────────────────┘
//!                                            │
//!                                            ▼
//!                                      ReleaseOutcome
//! ```
//!
//! State machine: `Pending → Captured → Computed → Transferred →
//! Recorded`, with terminal `Failed` reachable only while the money has
//! not yet moved. Step 4 is best-effort: once the transfer has happened
//! a bookkeeping failure is logged and left for reconciliation, never
//! rolled back.

pub mod error;
pub mod workflow;

// Re-export main types
pub use error::{Error, Result};
pub use workflow::{ReleaseOutcome, ReleaseWorkflow};
