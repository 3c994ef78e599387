use crate::helpers::{NETWORK, client_for, core_url, fast_retry, network_status};

use common::{HttpStatusCode, RedactedSecret};
use core_api_client::CoreApiClient;
use core_api_client::error::core_api_client::CoreApiClientError;
use models::lts::LtsTransactionConstructionRequest;
use models::mempool::MempoolListRequest;
use models::transaction::{TransactionIntentStatus, TransactionStatusRequest};
use models::{ErrorResponseType, NetworkStatusRequest};

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Request shape
// ============================================================================

/// **VALUE**: Verifies requests are POSTed under the `/core` base path with the
/// request model as the JSON body.
///
/// **WHY THIS MATTERS**: Every endpoint goes through the same join-and-post path;
/// if the base path is dropped or the verb is wrong, nothing works against a real node.
///
/// **BUG THIS CATCHES**: Would catch a base URL without trailing slash swallowing
/// the `core` segment, or GET being used instead of POST.
#[tokio::test]
async fn given_mock_node_when_network_status_called_then_posts_to_core_path() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/core/status/network-status"))
        .and(body_json(json!({ "network": NETWORK })))
        .respond_with(ResponseTemplate::new(200).set_body_json(network_status(42)))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN
    let response = client_for(&server)
        .network_status(&NetworkStatusRequest::new(NETWORK))
        .await
        .unwrap();

    // THEN
    assert_eq!(response.current_state_version(), 42);
}

/// **VALUE**: Verifies network-configuration sends an empty JSON object.
///
/// **BUG THIS CATCHES**: Would catch an empty body (no content type) that the node
/// rejects with 415.
#[tokio::test]
async fn given_mock_node_when_network_configuration_called_then_posts_empty_object() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/core/status/network-configuration"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "version": { "core_version": "v1.2.3", "api_version": "v1.2.3" },
            "network": NETWORK,
            "network_id": 240,
            "network_hrp_suffix": "loc",
            "usd_price_in_xrd": "16.666666666666666666",
            "address_types": [{
                "subtype": "GlobalAccount",
                "hrp_prefix": "account_",
                "entity_type": "GlobalAccount",
                "address_byte_prefix": 193,
                "address_byte_length": 30
            }],
            "well_known_addresses": {
                "xrd": "resource_loc1xrd",
                "faucet": "component_loc1faucet",
                "consensus_manager": "consensusmanager_loc1cm",
                "secp256k1_signature_resource": "resource_loc1secp"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN
    let response = client_for(&server).network_configuration().await.unwrap();

    // THEN
    assert_eq!(response.network_id, 240);
    assert_eq!(response.well_known_addresses.xrd, "resource_loc1xrd");
    assert_eq!(
        response
            .well_known_addresses
            .get("secp256k1_signature_resource"),
        Some("resource_loc1secp")
    );
}

/// **VALUE**: Verifies endpoints from other groups hit their own paths.
///
/// **BUG THIS CATCHES**: Would catch copy-paste errors in endpoint constants
/// (e.g. mempool list pointing at `mempool/transaction`).
#[tokio::test]
async fn given_mock_node_when_group_endpoints_called_then_each_hits_its_path() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/core/mempool/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "contents": [] })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/core/lts/transaction/construction"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "current_epoch": 7,
            "ledger_clock": { "unix_timestamp_ms": 1, "date_time": "1970-01-01T00:00:00.001Z" }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/core/transaction/status"))
        .and(body_partial_json(json!({ "intent_hash": "txid_loc1abc" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "intent_status": "InMempool",
            "status_description": "Pending",
            "known_payloads": []
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    // WHEN
    let mempool = client
        .mempool_list(&MempoolListRequest::new(NETWORK))
        .await
        .unwrap();
    let construction = client
        .lts_transaction_construction(&LtsTransactionConstructionRequest {
            network: NETWORK.to_string(),
        })
        .await
        .unwrap();
    let status = client
        .transaction_status(&TransactionStatusRequest::new(NETWORK, "txid_loc1abc"))
        .await
        .unwrap();

    // THEN
    assert!(mempool.contents.is_empty());
    assert_eq!(construction.current_epoch, 7);
    assert_eq!(status.intent_status, TransactionIntentStatus::InMempool);
}

/// **VALUE**: Verifies the bearer token is attached when configured.
///
/// **BUG THIS CATCHES**: Would catch `prepare_request` not being applied on the POST path.
#[tokio::test]
async fn given_auth_token_when_request_sent_then_bearer_header_present() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/core/status/network-status"))
        .and(header("authorization", "Bearer s3cret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(network_status(1)))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server).with_auth_token(RedactedSecret::new("s3cret".to_string()));

    // WHEN
    let result = client
        .network_status(&NetworkStatusRequest::new(NETWORK))
        .await;

    // THEN
    assert!(result.is_ok(), "{result:?}");
}

// ============================================================================
// Error mapping
// ============================================================================

/// **VALUE**: Verifies structured 4xx bodies surface as `Api` errors without retrying.
///
/// **WHY THIS MATTERS**: Client errors are deterministic; retrying them only adds latency
/// and load on the node.
///
/// **BUG THIS CATCHES**: Would catch 400 being treated as retryable, or the parsed
/// `ErrorResponse` being thrown away.
#[tokio::test]
async fn given_bad_request_with_error_body_when_called_then_api_error_without_retry() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/core/status/network-status"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error_type": "Basic",
            "code": 400,
            "message": "Network mismatch"
        })))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN
    let error = client_for(&server)
        .network_status(&NetworkStatusRequest::new("wrongnet"))
        .await
        .unwrap_err();

    // THEN
    assert_eq!(error.status(), Some(HttpStatusCode(400)));
    let response = error.error_response().expect("parsed error body");
    assert_eq!(response.error_type(), ErrorResponseType::Basic);
    assert_eq!(response.message(), "Network mismatch");
}

/// **VALUE**: Verifies transient 503s are retried until the node recovers.
///
/// **WHY THIS MATTERS**: Nodes briefly return 503 while syncing or restarting; callers
/// should not see these blips.
///
/// **BUG THIS CATCHES**: Would catch the retry loop returning on the first failure, or
/// not sleeping/advancing the backoff.
#[tokio::test]
async fn given_two_unavailable_responses_when_called_then_retries_and_succeeds() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/core/status/network-status"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .up_to_n_times(2)
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/core/status/network-status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(network_status(9)))
        .mount(&server)
        .await;

    // WHEN
    let response = client_for(&server)
        .network_status(&NetworkStatusRequest::new(NETWORK))
        .await
        .unwrap();

    // THEN
    assert_eq!(response.current_state_version(), 9);
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

/// **VALUE**: Verifies retries stop at `max_retries` and return the last error.
///
/// **BUG THIS CATCHES**: Would catch an unbounded retry loop hanging the caller, or an
/// off-by-one sending `max_retries` total attempts instead of `max_retries + 1`.
#[tokio::test]
async fn given_persistent_gateway_errors_when_called_then_gives_up_after_max_retries() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/core/status/network-status"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .expect(3)
        .mount(&server)
        .await;
    let client = CoreApiClient::new(&core_url(&server))
        .unwrap()
        .with_retry_policy(fast_retry(2));

    // WHEN
    let error = client
        .network_status(&NetworkStatusRequest::new(NETWORK))
        .await
        .unwrap_err();

    // THEN
    match error {
        CoreApiClientError::Server {
            status, message, ..
        } => {
            assert_eq!(status, HttpStatusCode(502));
            assert_eq!(message, "Bad Gateway");
        }
        other => panic!("expected Server error, got {other:?}"),
    }
}

/// **VALUE**: Verifies 401 maps to `Auth` and is not retried.
///
/// **BUG THIS CATCHES**: Would catch auth failures being retried (wasting time) or
/// reported as generic server errors.
#[tokio::test]
async fn given_unauthorized_when_called_then_auth_error() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN
    let error = client_for(&server)
        .network_status(&NetworkStatusRequest::new(NETWORK))
        .await
        .unwrap_err();

    // THEN
    assert!(matches!(error, CoreApiClientError::Auth { .. }), "{error:?}");
}

/// **VALUE**: Verifies malformed success bodies are JSON errors.
///
/// **BUG THIS CATCHES**: Would catch a panic on an unexpected response shape.
#[tokio::test]
async fn given_unexpected_success_body_when_called_then_json_error() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "unexpected": true })))
        .mount(&server)
        .await;

    // WHEN
    let error = client_for(&server)
        .network_status(&NetworkStatusRequest::new(NETWORK))
        .await
        .unwrap_err();

    // THEN
    assert!(matches!(error, CoreApiClientError::Json { .. }), "{error:?}");
}

/// **VALUE**: Verifies connection failures are retried and then reported as `Http` errors.
///
/// **BUG THIS CATCHES**: Would catch connect errors escaping as panics.
#[tokio::test]
async fn given_unreachable_node_when_called_then_http_error() {
    // GIVEN: port 1 is reserved and nothing listens there
    let client = CoreApiClient::new("http://127.0.0.1:1/core")
        .unwrap()
        .with_retry_policy(fast_retry(1));

    // WHEN
    let error = client
        .network_status(&NetworkStatusRequest::new(NETWORK))
        .await
        .unwrap_err();

    // THEN
    assert!(matches!(error, CoreApiClientError::Http { .. }), "{error:?}");
}

/// Serves one connection that announces a longer error body than it sends, then hangs up.
fn spawn_truncated_error_server(status_line: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buffer = [0_u8; 1024];
        // Drain headers and body so closing the socket does not reset the connection.
        loop {
            let read = stream.read(&mut buffer).unwrap();
            if read == 0 {
                break;
            }
            request.extend_from_slice(&buffer[..read]);
            let text = String::from_utf8_lossy(&request).to_lowercase();
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|value| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if request.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }
        let response = format!(
            "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: 512\r\n\r\n{{\"error_type\":\"Basic\""
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
    });
    format!("http://{address}/core")
}

/// **VALUE**: Verifies a failure while reading an error body surfaces as an `Http` error.
///
/// **WHY THIS MATTERS**: A connection dropped mid-body says nothing about the request
/// itself; reporting it as a server error with an empty message hides the real cause.
///
/// **BUG THIS CATCHES**: Would catch body-read failures being swallowed into an empty
/// body and classified from the status code alone.
#[tokio::test]
async fn given_error_body_cut_off_when_called_then_http_error() {
    // GIVEN: a node that answers 400 and drops the connection part way through the body
    let base_url = spawn_truncated_error_server("400 Bad Request");
    let client = CoreApiClient::new(&base_url)
        .unwrap()
        .with_retry_policy(fast_retry(0));

    // WHEN
    let error = client
        .network_status(&NetworkStatusRequest::new(NETWORK))
        .await
        .unwrap_err();

    // THEN
    assert!(matches!(error, CoreApiClientError::Http { .. }), "{error:?}");
    assert!(error.status().is_none());
}
