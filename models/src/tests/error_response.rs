use crate::error_response::{
    StreamTransactionsErrorDetails, SubmitRejectedErrorDetails, TransactionSubmitErrorDetails,
};
use crate::{ErrorResponse, ErrorResponseType, LtsTransactionSubmitErrorDetails};

use serde_json::json;

/// **VALUE**: Verifies the long schema name is accepted as an `error_type` discriminator.
///
/// **WHY THIS MATTERS**: Older nodes and some proxies emit `BasicErrorResponse` instead of
/// `Basic`. Rejecting it would turn every such error into an opaque JSON failure.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - The serde alias on a variant is removed
/// - The discriminator property is renamed
#[test]
fn given_long_discriminator_name_when_deserializing_error_response_then_maps_to_basic() {
    // GIVEN: An error body using the long schema name
    let body = json!({
        "error_type": "BasicErrorResponse",
        "code": 400,
        "message": "Invalid network",
        "trace_id": "abc123"
    });

    // WHEN: Deserializing
    let response: ErrorResponse = serde_json::from_value(body).expect("valid error body");

    // THEN: Should be the Basic variant with all common fields
    assert_eq!(response.error_type(), ErrorResponseType::Basic);
    assert_eq!(response.code(), 400);
    assert_eq!(response.message(), "Invalid network");
    assert_eq!(response.trace_id(), Some("abc123"));
}

/// **VALUE**: Verifies serialization always emits the short discriminator value.
///
/// **WHY THIS MATTERS**: Output must match what current nodes emit so that logged or
/// forwarded errors are re-readable by any client.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - A `rename` replaces the `alias`, changing the emitted tag
#[test]
fn given_basic_error_when_serializing_then_emits_short_discriminator() {
    // GIVEN: A basic error response
    let response = ErrorResponse::basic(404, "Not found");

    // WHEN: Serializing to a JSON value
    let value = serde_json::to_value(&response).expect("serializable");

    // THEN: The tag is the short form and the absent trace id is omitted
    assert_eq!(value["error_type"], "Basic");
    assert_eq!(value["code"], 404);
    assert!(value.get("trace_id").is_none());
}

/// **VALUE**: Verifies nested discriminated details are decoded for submit errors.
///
/// **WHY THIS MATTERS**: Wallets decide whether to resubmit based on the rejection details.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - Details are dropped or fail to decode inside the outer union
/// - Optional retry fields become required
#[test]
fn given_rejected_submit_error_when_deserializing_then_details_are_typed() {
    // GIVEN: A transaction submit error with rejection details
    let body = json!({
        "error_type": "TransactionSubmit",
        "code": 400,
        "message": "Transaction rejected",
        "details": {
            "type": "Rejected",
            "error_message": "Signature invalid",
            "is_fresh": true,
            "is_payload_rejection_permanent": true,
            "is_intent_rejection_permanent": false,
            "retry_from_epoch": 12
        }
    });

    // WHEN: Deserializing
    let response: ErrorResponse = serde_json::from_value(body).expect("valid error body");

    // THEN: Details should be the Rejected variant
    let ErrorResponse::TransactionSubmit(detailed) = response else {
        panic!("expected TransactionSubmit variant");
    };
    match detailed.details {
        Some(TransactionSubmitErrorDetails::Rejected(SubmitRejectedErrorDetails {
            error_message,
            retry_from_epoch,
            retry_from_timestamp,
            ..
        })) => {
            assert_eq!(error_message, "Signature invalid");
            assert_eq!(retry_from_epoch, Some(12));
            assert!(retry_from_timestamp.is_none());
        }
        other => panic!("unexpected details: {other:?}"),
    }
}

/// **VALUE**: Verifies the stream out-of-bounds error carries the ledger tip.
///
/// **WHY THIS MATTERS**: The stream reader treats this error as "caught up" and needs
/// `max_ledger_state_version` to know where the ledger ends.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - The details alias or field name drifts from the API
#[test]
fn given_stream_out_of_bounds_error_when_deserializing_then_exposes_max_state_version() {
    // GIVEN: A stream transactions error using long names everywhere
    let body = json!({
        "error_type": "StreamTransactionsErrorResponse",
        "code": 400,
        "message": "Requested state version out of bounds",
        "details": {
            "type": "RequestedStateVersionOutOfBoundsErrorDetails",
            "max_ledger_state_version": 1500
        }
    });

    // WHEN: Deserializing
    let response: ErrorResponse = serde_json::from_value(body).expect("valid error body");

    // THEN: The typed details hold the ledger tip
    let ErrorResponse::StreamTransactions(detailed) = response else {
        panic!("expected StreamTransactions variant");
    };
    assert_eq!(
        detailed.details,
        Some(StreamTransactionsErrorDetails::RequestedStateVersionOutOfBounds {
            max_ledger_state_version: 1500
        })
    );
}

/// **VALUE**: Verifies an unknown discriminator is rejected.
///
/// **WHY THIS MATTERS**: Enum and union values accept exactly their listed strings; silently
/// mapping unknown errors to a default would hide API drift.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - An `#[serde(other)]` catch-all is introduced
#[test]
fn given_unknown_error_type_when_deserializing_then_fails() {
    // GIVEN: An error body with an unknown discriminator
    let body = json!({ "error_type": "Mystery", "code": 500, "message": "?" });

    // WHEN: Deserializing
    let result = serde_json::from_value::<ErrorResponse>(body);

    // THEN: Should fail
    assert!(result.is_err());
}

/// **VALUE**: Verifies LTS submit details classify which failures are worth retrying.
///
/// **WHY THIS MATTERS**: Exchanges automate resubmission off this classification.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - Permanent rejections are reported as retryable, causing endless resubmission
#[test]
fn given_lts_submit_details_when_checking_retryable_then_follows_permanence() {
    // GIVEN: A full mempool and a permanent rejection
    let mempool_full = LtsTransactionSubmitErrorDetails::MempoolFull {
        mempool_capacity: 10_000,
    };
    let permanent = LtsTransactionSubmitErrorDetails::Rejected(SubmitRejectedErrorDetails {
        error_message: String::from("Epoch expired"),
        is_fresh: false,
        is_payload_rejection_permanent: true,
        is_intent_rejection_permanent: true,
        retry_from_timestamp: None,
        retry_from_epoch: None,
        invalid_from_epoch: Some(40),
    });

    // WHEN / THEN: Mempool full is retryable, permanent rejection is not
    assert!(mempool_full.is_retryable());
    assert!(!permanent.is_retryable());
}
