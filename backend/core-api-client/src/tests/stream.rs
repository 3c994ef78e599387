use crate::error::stream::StreamError;
use crate::stream::{TransactionBatch, check_continuity};

use models::CommittedStateIdentifier;

fn identifiers(state_version: i64, hash: &str) -> CommittedStateIdentifier {
    CommittedStateIdentifier {
        state_version,
        state_tree_hash: format!("state-{hash}"),
        transaction_tree_hash: format!("txn-{hash}"),
        receipt_tree_hash: format!("receipt-{hash}"),
    }
}

/// **VALUE**: Verifies matching identifiers pass the continuity check.
///
/// **BUG THIS CATCHES**: Would catch the comparison using the wrong field and rejecting
/// a perfectly consistent ledger.
#[test]
fn given_identical_identifiers_when_checked_then_continuity_holds() {
    // GIVEN
    let expected = identifiers(10, "aa");

    // WHEN
    let result = check_continuity(&expected, Some(&identifiers(10, "aa")));

    // THEN
    assert!(result.is_ok());
}

/// **VALUE**: Verifies a diverging ledger is detected.
///
/// **WHY THIS MATTERS**: If a node is swapped for one on a different fork, silently
/// continuing would mix two histories into one index.
///
/// **BUG THIS CATCHES**: Would catch the check comparing only state versions, which
/// match on both forks.
#[test]
fn given_different_hashes_when_checked_then_inconsistent_ledger_error() {
    // GIVEN
    let expected = identifiers(10, "aa");

    // WHEN
    let result = check_continuity(&expected, Some(&identifiers(10, "bb")));

    // THEN
    match result {
        Err(StreamError::InconsistentLedger {
            state_version,
            expected,
            actual,
            ..
        }) => {
            assert_eq!(state_version, 10);
            assert!(expected.contains("txn-aa"));
            assert!(actual.contains("txn-bb"));
        }
        other => panic!("expected InconsistentLedger, got {other:?}"),
    }
}

/// **VALUE**: Verifies a missing previous-state marker is treated as inconsistent.
///
/// **BUG THIS CATCHES**: Would catch `None` being accepted, which would skip the
/// check exactly when a misbehaving node omits the field.
#[test]
fn given_missing_previous_identifiers_when_checked_then_inconsistent_ledger_error() {
    // GIVEN / WHEN
    let result = check_continuity(&identifiers(3, "cc"), None);

    // THEN
    assert!(matches!(
        result,
        Err(StreamError::InconsistentLedger { ref actual, .. }) if actual == "none"
    ));
}

/// **VALUE**: Verifies empty batches carry the reported ledger tip.
///
/// **BUG THIS CATCHES**: Would catch the tip being dropped, leaving pollers unable to
/// tell how far behind they are.
#[test]
fn given_out_of_bounds_when_empty_batch_built_then_tip_is_preserved() {
    // GIVEN / WHEN
    let batch = TransactionBatch::empty(51, 50);

    // THEN
    assert!(batch.is_empty());
    assert_eq!(batch.len(), 0);
    assert_eq!(batch.from_state_version, 51);
    assert_eq!(batch.max_ledger_state_version, 50);
    assert!(batch.last_state_identifiers().is_none());
}
