//! Release Workflow Integration Tests
//!
//! Drives the full release state machine against the simulated
//! providers:
//! 1. Capture the payment intent
//! 2. Compute the fee breakdown over the captured amount
//! 3. Transfer the net payout
//! 4. Best-effort bookkeeping

use std::sync::Arc;

use holdfast_clock::FixedClock;
use holdfast_core::{EscrowTransaction, PaymentType, ReleaseState};
use holdfast_provider_sim::{InMemorySettlementStore, SimPaymentGateway, SimPayoutGateway};
use holdfast_settlement::{Error, ReleaseWorkflow};
use rust_decimal_macros::dec;

fn workflow() -> ReleaseWorkflow<SimPaymentGateway, SimPayoutGateway, InMemorySettlementStore> {
    ReleaseWorkflow::new(
        SimPaymentGateway::new(),
        SimPayoutGateway::new(),
        InMemorySettlementStore::new(),
        Arc::new(FixedClock::at_month(2026, 8)),
    )
}

fn transaction() -> EscrowTransaction {
    EscrowTransaction::new(dec!(100.00), PaymentType::Final, "pi_1", "acct_contractor")
}

#[tokio::test]
async fn test_happy_path_ends_recorded() {
    let _ = env_logger::builder().is_test(true).try_init();
    let wf = workflow();
    wf.gateway().authorize("pi_1", dec!(100.00)).await;
    let txn = transaction();

    let outcome = wf.release(&txn).await.unwrap();

    assert_eq!(outcome.state, ReleaseState::Recorded);
    assert!(outcome.audit_recorded);
    assert_eq!(outcome.breakdown.platform_fee, dec!(5.00));
    assert_eq!(outcome.breakdown.net_payout, dec!(95.00));

    // Transfer moved exactly the net payout in cents
    let transfers = wf.payouts().transfers().await;
    assert_eq!(transfers.len(), 1);
    assert_eq!(transfers[0].amount_cents, 9_500);
    assert_eq!(transfers[0].destination_account_id, "acct_contractor");
    assert_eq!(transfers[0].transfer_id, outcome.transfer_id);

    // All three bookkeeping rows landed
    let records = wf.store().fee_transfers().await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].transaction_id, txn.id);
    assert_eq!(records[0].charge_id, outcome.charge_id);
    assert_eq!(records[0].breakdown.net_revenue, dec!(1.80));

    let updates = wf.store().status_updates().await;
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].1.fee_transfer_status, "transferred");

    assert_eq!(wf.store().notifications().await.len(), 1);
}

#[tokio::test]
async fn test_capture_failure_pays_nobody() {
    let wf = workflow();
    wf.gateway().authorize("pi_1", dec!(100.00)).await;
    wf.gateway().set_decline(true);

    let err = wf.release(&transaction()).await.unwrap_err();
    assert!(matches!(err, Error::CaptureFailed { .. }));

    assert!(wf.payouts().transfers().await.is_empty());
    assert!(wf.store().fee_transfers().await.is_empty());
}

#[tokio::test]
async fn test_incomplete_capture_is_fatal() {
    let wf = workflow();
    wf.gateway().authorize("pi_1", dec!(100.00)).await;
    wf.gateway().set_stuck_processing(true);

    let err = wf.release(&transaction()).await.unwrap_err();
    assert!(matches!(err, Error::CaptureIncomplete { .. }));
    assert!(wf.payouts().transfers().await.is_empty());
}

#[tokio::test]
async fn test_transfer_failure_records_nothing() {
    let wf = workflow();
    wf.gateway().authorize("pi_1", dec!(100.00)).await;
    wf.payouts().set_reject(true);

    let err = wf.release(&transaction()).await.unwrap_err();
    // The error carries the charge for reconciliation
    match err {
        Error::TransferFailed { charge_id, .. } => assert!(charge_id.starts_with("ch_")),
        other => panic!("expected TransferFailed, got {other:?}"),
    }

    assert!(wf.store().fee_transfers().await.is_empty());
    assert!(wf.store().status_updates().await.is_empty());
}

#[tokio::test]
async fn test_store_failure_leaves_transferred_state() {
    let wf = workflow();
    wf.gateway().authorize("pi_1", dec!(100.00)).await;
    wf.store().fail_all().await;

    let outcome = wf.release(&transaction()).await.unwrap();

    // Funds moved even though no bookkeeping landed
    assert_eq!(outcome.state, ReleaseState::Transferred);
    assert!(!outcome.audit_recorded);
    assert_eq!(wf.payouts().transfers().await.len(), 1);
    assert!(wf.store().fee_transfers().await.is_empty());
}

#[tokio::test]
async fn test_single_table_failure_still_writes_the_rest() {
    let wf = workflow();
    wf.gateway().authorize("pi_1", dec!(100.00)).await;
    wf.store()
        .fail_table(InMemorySettlementStore::NOTIFICATIONS)
        .await;

    let outcome = wf.release(&transaction()).await.unwrap();

    assert_eq!(outcome.state, ReleaseState::Transferred);
    assert!(!outcome.audit_recorded);
    // The independent writes still landed
    assert_eq!(wf.store().fee_transfers().await.len(), 1);
    assert_eq!(wf.store().status_updates().await.len(), 1);
    assert!(wf.store().notifications().await.is_empty());
}

#[tokio::test]
async fn test_breakdown_uses_captured_amount() {
    // Gateway captured less than the transaction says it holds
    let wf = workflow();
    wf.gateway().authorize("pi_1", dec!(80.00)).await;

    let outcome = wf.release(&transaction()).await.unwrap();

    assert_eq!(outcome.breakdown.gross_amount, dec!(80.00));
    assert_eq!(outcome.breakdown.platform_fee, dec!(4.00));
    assert_eq!(wf.payouts().transfers().await[0].amount_cents, 7_600);
}

#[tokio::test]
async fn test_concurrent_releases_are_independent() {
    let wf = Arc::new(workflow());
    let mut txns = Vec::new();
    for i in 0..8 {
        let intent = format!("pi_{i}");
        wf.gateway().authorize(intent.as_str(), dec!(100.00)).await;
        txns.push(EscrowTransaction::new(
            dec!(100.00),
            PaymentType::Milestone,
            intent,
            format!("acct_{i}"),
        ));
    }

    let mut handles = Vec::new();
    for txn in txns {
        let wf = wf.clone();
        handles.push(tokio::spawn(async move { wf.release(&txn).await }));
    }
    for handle in handles {
        let outcome = handle.await.unwrap().unwrap();
        assert_eq!(outcome.state, ReleaseState::Recorded);
    }

    assert_eq!(wf.payouts().transfers().await.len(), 8);
    assert_eq!(wf.store().fee_transfers().await.len(), 8);
}
