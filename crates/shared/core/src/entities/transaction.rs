use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::error::FeeError;
use crate::values::Money;

/// Unique identifier for an escrow transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionId(pub Uuid);

impl TransactionId {
    /// Generate a fresh transaction ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which stage of the job this payment covers.
///
/// The fee policy is currently identical across types; the tag is carried
/// for audit rows and future per-type differentiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    /// Upfront deposit before work starts
    Deposit,
    /// Intermediate milestone payment
    Milestone,
    /// Final payment on job completion
    Final,
}

impl PaymentType {
    /// String tag used in audit records
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentType::Deposit => "deposit",
            PaymentType::Milestone => "milestone",
            PaymentType::Final => "final",
        }
    }
}

impl FromStr for PaymentType {
    type Err = FeeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deposit" => Ok(PaymentType::Deposit),
            "milestone" => Ok(PaymentType::Milestone),
            "final" => Ok(PaymentType::Final),
            other => Err(FeeError::InvalidPaymentType(other.to_string())),
        }
    }
}

impl std::fmt::Display for PaymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A payment held in escrow pending job completion.
///
/// Immutable once captured - release reads it, never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EscrowTransaction {
    /// Unique transaction identifier
    pub id: TransactionId,
    /// Gross amount held, in dollars
    pub amount: Money,
    /// Stage of the job this payment covers
    pub payment_type: PaymentType,
    /// Provider-side payment intent to capture
    pub payment_intent_id: String,
    /// Connected account the contractor is paid into
    pub payee_account_id: String,
}

impl EscrowTransaction {
    /// Create a new escrow transaction
    pub fn new(
        amount: Money,
        payment_type: PaymentType,
        payment_intent_id: impl Into<String>,
        payee_account_id: impl Into<String>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            amount,
            payment_type,
            payment_intent_id: payment_intent_id.into(),
            payee_account_id: payee_account_id.into(),
        }
    }
}
