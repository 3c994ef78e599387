use crate::transaction::{TransactionStatusResponse, TransactionSubmitRequest};
use crate::{CoreApiModel, ModelError, NetworkStatusResponse};

use serde_json::json;

/// **VALUE**: Verifies `to_json` output reads back as an equal value.
///
/// **WHY THIS MATTERS**: The CLI prints models with `to_json`; scripts feed that output
/// back into requests.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - Optional fields are emitted in a form that fails to deserialize
/// - Discriminators are written in a form that is not read back
#[test]
fn given_network_status_when_round_tripping_through_to_json_then_equal() {
    // GIVEN: A network status response as a node would send it
    let status: NetworkStatusResponse = serde_json::from_value(json!({
        "pre_genesis_state_identifier": {
            "state_version": 0,
            "state_tree_hash": "00",
            "transaction_tree_hash": "00",
            "receipt_tree_hash": "00"
        },
        "genesis_epoch_round": { "epoch": 1, "round": 0 },
        "current_state_identifier": {
            "state_version": 1234,
            "state_tree_hash": "aa",
            "transaction_tree_hash": "bb",
            "receipt_tree_hash": "cc"
        },
        "current_protocol_version": "bottlenose"
    }))
    .expect("valid status");

    // WHEN: Rendering and parsing again
    let rendered = status.to_json().expect("renders");
    let parsed = NetworkStatusResponse::from_json(&rendered).expect("parses");

    // THEN: Should be equal and pretty printed
    assert_eq!(parsed, status);
    assert_eq!(parsed.current_state_version(), 1234);
    assert!(rendered.contains('\n'));
}

/// **VALUE**: Verifies compact rendering is single-line.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - `to_json_compact` accidentally pretty prints
#[test]
fn given_request_when_rendering_compact_then_single_line() {
    // GIVEN: A submit request
    let request = TransactionSubmitRequest::new("mainnet", "4d22");

    // WHEN: Rendering compactly
    let rendered = request.to_json_compact().expect("renders");

    // THEN: One line, unset options omitted
    assert_eq!(
        rendered,
        r#"{"network":"mainnet","notarized_transaction_hex":"4d22"}"#
    );
}

/// **VALUE**: Verifies a missing required field fails to construct the model.
///
/// **WHY THIS MATTERS**: Required fields must never silently default.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - `#[serde(default)]` is added to a required field
/// - Errors are not mapped to `ModelError::Json`
#[test]
fn given_json_missing_required_field_when_parsing_then_returns_json_error() {
    // GIVEN: A status response without `known_payloads`
    let body = r#"{"intent_status":"NotSeen","status_description":"unknown"}"#;

    // WHEN: Parsing
    let result = TransactionStatusResponse::from_json(body);

    // THEN: Should be a JSON error naming the field
    match result {
        Err(ModelError::Json { message, .. }) => assert!(message.contains("known_payloads")),
        other => panic!("expected JSON error, got {other:?}"),
    }
}
