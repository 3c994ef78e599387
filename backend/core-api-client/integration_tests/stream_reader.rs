use crate::helpers::{
    NETWORK, client_for, out_of_bounds_error, round_update_transaction, state_identifier,
    stream_response,
};

use core_api_client::config::StreamConfig;
use core_api_client::error::stream::StreamError;
use core_api_client::stream::TransactionStreamReader;
use models::CommittedStateIdentifier;

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const STREAM_PATH: &str = "/core/stream/transactions";

fn reader_for(server: &MockServer, max_batch_size: u32) -> TransactionStreamReader {
    TransactionStreamReader::new(
        client_for(server),
        NETWORK,
        &StreamConfig { max_batch_size },
    )
}

/// **VALUE**: Verifies a request beyond the ledger tip yields an empty batch.
///
/// **WHY THIS MATTERS**: Pollers ask for the next state version long before it exists;
/// that is the steady state of a caught-up indexer, not a failure.
///
/// **BUG THIS CATCHES**: Would catch the out-of-bounds error response propagating as an
/// error, which would make a caught-up reader crash-loop.
#[tokio::test]
async fn given_version_beyond_tip_when_fetching_then_returns_empty_batch() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(STREAM_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(out_of_bounds_error(50)))
        .expect(1)
        .mount(&server)
        .await;
    let mut reader = reader_for(&server, 100).starting_at(51);

    // WHEN
    let batch = reader.next_batch().await.unwrap();

    // THEN
    assert!(batch.is_empty());
    assert_eq!(batch.max_ledger_state_version, 50);
    assert_eq!(reader.next_state_version(), 51, "cursor must not move");
}

/// **VALUE**: Verifies consecutive batches advance the cursor and chain correctly.
///
/// **WHY THIS MATTERS**: This is the happy path of every ledger follower.
///
/// **BUG THIS CATCHES**: Would catch the cursor not advancing (re-reading the same
/// batch forever), advancing by the wrong amount, or the continuity check rejecting
/// a correct chain.
#[tokio::test]
async fn given_contiguous_ledger_when_reading_twice_then_cursor_follows_last_transaction() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(STREAM_PATH))
        .and(body_partial_json(json!({ "from_state_version": 1, "limit": 2 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(stream_response(
            1,
            None,
            vec![round_update_transaction(1, "a"), round_update_transaction(2, "b")],
            4,
        )))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(STREAM_PATH))
        .and(body_partial_json(json!({ "from_state_version": 3 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(stream_response(
            3,
            Some(state_identifier(2, "b")),
            vec![round_update_transaction(3, "c"), round_update_transaction(4, "d")],
            4,
        )))
        .expect(1)
        .mount(&server)
        .await;
    let mut reader = reader_for(&server, 2);

    // WHEN
    let first = reader.next_batch().await.unwrap();
    let second = reader.next_batch().await.unwrap();

    // THEN
    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 2);
    assert_eq!(second.transactions[0].state_version(), 3);
    assert_eq!(reader.next_state_version(), 5);
    assert_eq!(
        reader.last_state_identifiers().map(|i| i.transaction_tree_hash.as_str()),
        Some("txn-d")
    );
}

/// **VALUE**: Verifies a fork or node swap is detected on resume.
///
/// **WHY THIS MATTERS**: Continuing across a ledger mismatch would silently corrupt
/// anything built from the stream.
///
/// **BUG THIS CATCHES**: Would catch the check being skipped on the first batch after
/// `resume_after`.
#[tokio::test]
async fn given_mismatched_previous_state_when_resuming_then_inconsistent_ledger_error() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(STREAM_PATH))
        .and(body_partial_json(json!({ "from_state_version": 11 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(stream_response(
            11,
            Some(state_identifier(10, "other-fork")),
            vec![round_update_transaction(11, "k")],
            11,
        )))
        .mount(&server)
        .await;
    let seen: CommittedStateIdentifier =
        serde_json::from_value(state_identifier(10, "ours")).unwrap();
    let mut reader = reader_for(&server, 100).resume_after(seen);

    // WHEN
    let result = reader.next_batch().await;

    // THEN
    assert!(
        matches!(result, Err(StreamError::InconsistentLedger { state_version: 10, .. })),
        "{result:?}"
    );
    assert_eq!(reader.next_state_version(), 11, "cursor must not move");
}

/// **VALUE**: Verifies requested counts are capped at the configured batch size.
///
/// **BUG THIS CATCHES**: Would catch `fetch_batch` forwarding huge counts the node
/// would reject with a 400.
#[tokio::test]
async fn given_count_above_max_batch_when_fetching_then_limit_is_capped() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(STREAM_PATH))
        .and(body_partial_json(json!({ "network": NETWORK, "limit": 5 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(stream_response(
            1,
            None,
            vec![round_update_transaction(1, "a")],
            1,
        )))
        .expect(1)
        .mount(&server)
        .await;
    let reader = reader_for(&server, 5);

    // WHEN
    let batch = reader.fetch_batch(1, 5_000).await.unwrap();

    // THEN
    assert_eq!(batch.len(), 1);
}

/// **VALUE**: Verifies other API errors are not mistaken for "nothing new".
///
/// **BUG THIS CATCHES**: Would catch every 4xx being swallowed as an empty batch.
#[tokio::test]
async fn given_other_api_error_when_fetching_then_client_error_propagates() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(STREAM_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error_type": "Basic",
            "code": 400,
            "message": "Network mismatch"
        })))
        .mount(&server)
        .await;
    let reader = reader_for(&server, 10);

    // WHEN
    let result = reader.fetch_batch(1, 10).await;

    // THEN
    assert!(matches!(result, Err(StreamError::Client { .. })), "{result:?}");
}

/// **VALUE**: Verifies invalid start versions fail before any request is made.
///
/// **BUG THIS CATCHES**: Would catch state version 0 being sent to the node.
#[tokio::test]
async fn given_state_version_zero_when_fetching_then_invalid_request() {
    // GIVEN
    let server = MockServer::start().await;
    let reader = reader_for(&server, 10);

    // WHEN
    let result = reader.fetch_batch(0, 10).await;

    // THEN
    assert!(matches!(result, Err(StreamError::InvalidRequest { .. })));
    assert!(server.received_requests().await.unwrap().is_empty());
}
