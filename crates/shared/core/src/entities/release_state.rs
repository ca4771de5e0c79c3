use serde::{Deserialize, Serialize};

/// Release lifecycle state
///
/// The happy path walks every state in order; `Failed` is only reachable
/// before funds move to the contractor. A release stuck in `Transferred`
/// means the money moved but bookkeeping did not complete - the
/// reconciliation job repairs those.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReleaseState {
    /// Release requested, nothing has happened yet
    Pending,
    /// Payment intent captured at the gateway
    Captured,
    /// Fee breakdown computed over the captured amount
    Computed,
    /// Net payout transferred to the contractor
    Transferred,
    /// All bookkeeping rows written
    Recorded,
    /// Capture or transfer failed - no payout was made
    Failed,
}

impl ReleaseState {
    /// Returns true if the release reached a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ReleaseState::Recorded | ReleaseState::Transferred | ReleaseState::Failed
        )
    }

    /// Returns true if funds reached the contractor
    pub fn funds_moved(&self) -> bool {
        matches!(self, ReleaseState::Transferred | ReleaseState::Recorded)
    }
}
