use crate::crypto::PublicKey;
use crate::ledger::LedgerStateSelector;
use crate::transaction::{ParseMode, PreviewFlags, TransactionPreviewResponseOptions};
use crate::{
    CoreApiModel, ModelError, StreamTransactionsRequestBuilder, TransactionParseRequestBuilder,
    TransactionPreviewRequestBuilder,
};

fn validation_message(result: Result<impl std::fmt::Debug, ModelError>) -> String {
    match result {
        Err(ModelError::Validation { message, .. }) => message,
        other => panic!("expected validation error, got {other:?}"),
    }
}

/// **VALUE**: Verifies a preview request cannot be built without a manifest.
///
/// **WHY THIS MATTERS**: The node rejects manifest-less previews with a generic 400; failing
/// locally gives the caller a precise message.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - Required field validation is removed from the builder
#[test]
fn given_missing_manifest_when_building_preview_then_returns_validation_error() {
    // GIVEN: Builder without a manifest
    let builder = TransactionPreviewRequestBuilder::default()
        .with_network("stokenet")
        .with_nonce(42);

    // WHEN: Building
    let result = builder.build();

    // THEN: Should name the missing field
    assert_eq!(validation_message(result), "Manifest is required");
}

/// **VALUE**: Verifies empty strings are rejected for required fields.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - `Some("")` is treated as a present value
#[test]
fn given_empty_network_when_building_preview_then_returns_validation_error() {
    // GIVEN: Builder with an empty network
    let builder = TransactionPreviewRequestBuilder::default()
        .with_network("")
        .with_manifest("CALL_METHOD Address(\"x\") \"lock_fee\" Decimal(\"10\");")
        .with_nonce(1);

    // WHEN: Building
    let result = builder.build();

    // THEN: Should reject the empty network
    assert_eq!(validation_message(result), "Network cannot be empty");
}

/// **VALUE**: Verifies inverted epoch windows are rejected.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - Start and end epochs are swapped or the range check is deleted
#[test]
fn given_inverted_epoch_range_when_building_preview_then_returns_validation_error() {
    // GIVEN: Builder with start epoch after end epoch
    let builder = TransactionPreviewRequestBuilder::default()
        .with_network("stokenet")
        .with_manifest("DROP_ALL_PROOFS;")
        .with_nonce(1)
        .with_epoch_range(20, 10);

    // WHEN: Building
    let result = builder.build();

    // THEN: Should describe the empty range
    assert_eq!(validation_message(result), "Empty epoch range: [20, 10)");
}

/// **VALUE**: Verifies a complete preview request carries every configured field.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - Builder drops signers, flags or blobs on the way to the request
#[test]
fn given_complete_builder_when_building_preview_then_request_has_all_fields() {
    // GIVEN: Fully configured builder
    let signer = PublicKey::EddsaEd25519 {
        key_hex: String::from("ab".repeat(32)),
    };
    let flags = PreviewFlags {
        use_free_credit: true,
        assume_all_signature_proofs: true,
        skip_epoch_check: false,
        disable_auth_checks: false,
    };
    let builder = TransactionPreviewRequestBuilder::default()
        .with_network("stokenet")
        .with_manifest("DROP_ALL_PROOFS;")
        .with_nonce(7)
        .with_tip_percentage(5)
        .with_signer(signer.clone())
        .with_blob_hex("00ff")
        .with_flags(flags);

    // WHEN: Building
    let request = builder.build().expect("valid preview request");

    // THEN: All fields are carried through
    assert_eq!(request.nonce, 7);
    assert_eq!(request.tip_percentage, 5);
    assert_eq!(request.signer_public_keys, vec![signer]);
    assert_eq!(request.blobs_hex, Some(vec![String::from("00ff")]));
    assert_eq!(request.flags, flags);
    assert!(request.start_epoch_inclusive.is_none());
}

/// **VALUE**: Verifies historical-state previews and response options reach the wire.
///
/// **WHY THIS MATTERS**: Previewing against an older state version is how callers
/// reproduce a past execution; losing the selector silently previews against the tip.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - The builder setters are not copied into the request
/// - The selector serializes without its `type` tag
#[test]
fn given_ledger_state_and_options_when_building_preview_then_request_json_carries_both() {
    // GIVEN: Builder pinned to state version 1200 with toolkit receipts requested
    let builder = TransactionPreviewRequestBuilder::default()
        .with_network("stokenet")
        .with_manifest("DROP_ALL_PROOFS;")
        .with_nonce(3)
        .with_at_ledger_state(LedgerStateSelector::ByStateVersion {
            state_version: 1200,
        })
        .with_options(TransactionPreviewResponseOptions {
            radix_engine_toolkit_receipt: Some(true),
        });

    // WHEN: Building and serializing
    let request = builder.build().expect("valid preview request");
    let json: serde_json::Value =
        serde_json::from_str(&request.to_json_compact().expect("serializes")).expect("valid json");

    // THEN: Both the selector and the options are present
    assert_eq!(
        json["at_ledger_state"],
        serde_json::json!({"type": "ByStateVersion", "state_version": 1200})
    );
    assert_eq!(json["options"]["radix_engine_toolkit_receipt"], true);
}

/// **VALUE**: Verifies previews without a selector or options omit both keys.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - Unset optional fields serialize as `null`
#[test]
fn given_default_builder_when_building_preview_then_omits_ledger_state_and_options() {
    // GIVEN: Builder with only the required fields
    let request = TransactionPreviewRequestBuilder::default()
        .with_network("stokenet")
        .with_manifest("DROP_ALL_PROOFS;")
        .with_nonce(3)
        .build()
        .expect("valid preview request");

    // WHEN: Serializing
    let json: serde_json::Value =
        serde_json::from_str(&request.to_json_compact().expect("serializes")).expect("valid json");

    // THEN: Neither optional key appears
    assert!(json.get("at_ledger_state").is_none());
    assert!(json.get("options").is_none());
}

/// **VALUE**: Verifies a non-positive state version is caught before sending.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - State version zero is forwarded and the node answers with an opaque 400
#[test]
fn given_zero_state_version_when_building_preview_then_returns_validation_error() {
    // GIVEN: Builder pinned to state version 0
    let builder = TransactionPreviewRequestBuilder::default()
        .with_network("stokenet")
        .with_manifest("DROP_ALL_PROOFS;")
        .with_nonce(3)
        .with_at_ledger_state(LedgerStateSelector::ByStateVersion { state_version: 0 });

    // WHEN: Building
    let result = builder.build();

    // THEN: Should reject the selector
    assert_eq!(
        validation_message(result),
        "State version must be at least 1: 0"
    );
}

/// **VALUE**: Verifies parse requests reject malformed hex payloads.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - Odd-length or non-hex payloads are sent to the node
#[test]
fn given_non_hex_payload_when_building_parse_request_then_returns_validation_error() {
    // GIVEN: Builder with a non-hex payload
    let builder = TransactionParseRequestBuilder::default()
        .with_network("mainnet")
        .with_payload_hex("4d2g");

    // WHEN: Building
    let result = builder.build();

    // THEN: Should reject the payload
    assert_eq!(
        validation_message(result),
        "Payload hex must be an even-length hex string"
    );
}

/// **VALUE**: Verifies optional parse modes are omitted from JSON unless set.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - `None` options serialize as `null`, which the node rejects
#[test]
fn given_parse_request_with_mode_when_serializing_then_omits_unset_options() {
    // GIVEN: A parse request with only the parse mode set
    let request = TransactionParseRequestBuilder::default()
        .with_network("mainnet")
        .with_payload_hex("4d22")
        .with_parse_mode(ParseMode::Notarized)
        .build()
        .expect("valid parse request");

    // WHEN: Serializing
    let value = serde_json::to_value(&request).expect("serializable");

    // THEN: Only set fields appear
    assert_eq!(value["parse_mode"], "Notarized");
    assert!(value.get("validation_mode").is_none());
    assert!(value.get("response_mode").is_none());
}

/// **VALUE**: Verifies stream requests enforce the node's page size limit.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - Limits above 10000 or below 1 are accepted
/// - State version 0 is accepted
#[test]
fn given_out_of_range_values_when_building_stream_request_then_returns_validation_error() {
    // GIVEN: Builders with bad limit and bad state version
    let too_large = StreamTransactionsRequestBuilder::default()
        .with_network("mainnet")
        .with_from_state_version(1)
        .with_limit(10_001);
    let genesis_zero = StreamTransactionsRequestBuilder::default()
        .with_network("mainnet")
        .with_from_state_version(0)
        .with_limit(100);

    // WHEN / THEN: Both fail with specific messages
    assert_eq!(
        validation_message(too_large.build()),
        "Limit must be between 1 and 10000, got 10001"
    );
    assert_eq!(
        validation_message(genesis_zero.build()),
        "From state version must be at least 1, got 0"
    );
}
