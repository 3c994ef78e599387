use core_api_cli::commands::{NodeRole, execute, load_config, select_node, validate_hex};
use core_api_cli::{CliError, Command};
use core_api_client::config::{CoreApiConfig, CoreApiNodeConfig, RequestConfig};

use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn state_identifier(state_version: i64) -> Value {
    json!({
        "state_version": state_version,
        "state_tree_hash": "aa",
        "transaction_tree_hash": "bb",
        "receipt_tree_hash": "cc"
    })
}

fn config_for(server: &MockServer) -> CoreApiConfig {
    CoreApiConfig {
        network: "localnet".to_string(),
        request: RequestConfig {
            max_retries: 0,
            ..RequestConfig::default()
        },
        nodes: vec![CoreApiNodeConfig::new(
            "mock",
            format!("{}/core", server.uri()),
        )],
        ..CoreApiConfig::default()
    }
}

// ----------------------------------------------------------------------------
// execute()
// ----------------------------------------------------------------------------

/// **VALUE**: Verifies `network-status` sends the configured network and returns the
/// node's response as JSON.
///
/// **WHY THIS MATTERS**: This is what the binary prints; the JSON must be the response
/// itself, not a debug rendering.
///
/// **BUG THIS CATCHES**: Would catch the network name not being taken from config.
#[tokio::test]
async fn given_mock_node_when_network_status_executed_then_returns_response_json() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/core/status/network-status"))
        .and(body_partial_json(json!({ "network": "localnet" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pre_genesis_state_identifier": state_identifier(0),
            "current_state_identifier": state_identifier(77),
            "current_protocol_version": "babylon-genesis"
        })))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN
    let output = execute(&Command::NetworkStatus, &config_for(&server), None)
        .await
        .unwrap();

    // THEN
    assert_eq!(output["current_state_identifier"]["state_version"], 77);
}

/// **VALUE**: Verifies `stream` past the ledger tip prints an empty batch instead of failing.
///
/// **BUG THIS CATCHES**: Would catch the CLI bypassing the stream reader and surfacing
/// the out-of-bounds error to the user.
#[tokio::test]
async fn given_from_beyond_tip_when_stream_executed_then_returns_empty_batch() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/core/stream/transactions"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error_type": "StreamTransactions",
            "code": 400,
            "message": "out of bounds",
            "details": { "type": "RequestedStateVersionOutOfBounds", "max_ledger_state_version": 5 }
        })))
        .mount(&server)
        .await;

    // WHEN
    let output = execute(
        &Command::Stream { from: 6, limit: 10 },
        &config_for(&server),
        None,
    )
    .await
    .unwrap();

    // THEN
    assert_eq!(output["count"], 0);
    assert_eq!(output["max_ledger_state_version"], 5);
    assert_eq!(output["transactions"], json!([]));
}

/// **VALUE**: Verifies `stream` without `--node` reads from an indexing node only.
///
/// **BUG THIS CATCHES**: Would catch the stream command using the general weighted pick,
/// which would favour the heavily weighted archive node here.
#[tokio::test]
async fn given_archive_and_indexer_when_stream_executed_then_indexer_is_read() {
    // GIVEN
    let archive_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&archive_server)
        .await;
    let indexer_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/core/stream/transactions"))
        .and(body_partial_json(json!({ "from_state_version": 1, "limit": 5 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "from_state_version": 1,
            "count": 0,
            "max_ledger_state_version": 0,
            "transactions": []
        })))
        .expect(1)
        .mount(&indexer_server)
        .await;

    let mut archive = CoreApiNodeConfig::new("archive", format!("{}/core", archive_server.uri()));
    archive.disabled_for_transaction_indexing = true;
    archive.request_weighting = 1_000.0;
    let mut config = config_for(&indexer_server);
    config.nodes[0].name = "indexer".to_string();
    config.nodes.insert(0, archive);

    // WHEN
    let output = execute(&Command::Stream { from: 1, limit: 5 }, &config, None)
        .await
        .unwrap();

    // THEN
    assert_eq!(output["count"], 0);
    assert_eq!(output["max_ledger_state_version"], 0);
}

/// **VALUE**: Verifies `submit` rejects malformed hex without contacting the node.
///
/// **BUG THIS CATCHES**: Would catch garbage payloads being sent and burning a round trip.
#[tokio::test]
async fn given_odd_length_hex_when_submit_executed_then_cli_error_and_no_request() {
    // GIVEN
    let server = MockServer::start().await;

    // WHEN
    let result = execute(
        &Command::Submit {
            hex: "abc".to_string(),
        },
        &config_for(&server),
        None,
    )
    .await;

    // THEN
    assert!(matches!(result, Err(CliError::Cli { .. })));
    assert!(server.received_requests().await.unwrap().is_empty());
}

/// **VALUE**: Verifies `submit` posts the payload and returns the duplicate flag.
///
/// **BUG THIS CATCHES**: Would catch the hex being placed under the wrong field name.
#[tokio::test]
async fn given_valid_hex_when_submit_executed_then_payload_posted() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/core/transaction/submit"))
        .and(body_partial_json(json!({ "notarized_transaction_hex": "0a0b0c" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "duplicate": false })))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN
    let output = execute(
        &Command::Submit {
            hex: "0a0b0c".to_string(),
        },
        &config_for(&server),
        None,
    )
    .await
    .unwrap();

    // THEN
    assert_eq!(output, json!({ "duplicate": false }));
}

/// **VALUE**: Verifies node API errors reach the user as `CliError::Core`.
///
/// **BUG THIS CATCHES**: Would catch errors being swallowed into an empty JSON output.
#[tokio::test]
async fn given_node_error_when_transaction_status_executed_then_core_error() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error_type": "Basic",
            "code": 404,
            "message": "Not found"
        })))
        .mount(&server)
        .await;

    // WHEN
    let result = execute(
        &Command::TransactionStatus {
            intent_hash: "txid_1".to_string(),
        },
        &config_for(&server),
        None,
    )
    .await;

    // THEN
    match result {
        Err(CliError::Core { message, .. }) => assert!(message.contains("Not found")),
        other => panic!("expected Core error, got {other:?}"),
    }
}

// ----------------------------------------------------------------------------
// Config and node selection
// ----------------------------------------------------------------------------

/// **VALUE**: Verifies `--node` selects by name and unknown names fail clearly.
///
/// **BUG THIS CATCHES**: Would catch silently falling back to another node when the
/// requested one is missing.
#[test]
fn given_node_names_when_selected_then_match_or_fail() {
    // GIVEN
    let mut disabled = CoreApiNodeConfig::new("first", "http://127.0.0.1:1/core");
    disabled.enabled = false;
    let config = CoreApiConfig {
        nodes: vec![
            disabled,
            CoreApiNodeConfig::new("second", "http://127.0.0.1:2/core"),
        ],
        ..CoreApiConfig::default()
    };

    // WHEN / THEN
    assert_eq!(
        select_node(&config, None, NodeRole::Requests, 0.0).unwrap().name,
        "second"
    );
    assert_eq!(
        select_node(&config, Some("first"), NodeRole::Requests, 0.0).unwrap().name,
        "first"
    );
    assert!(matches!(
        select_node(&config, Some("missing"), NodeRole::Requests, 0.0),
        Err(CliError::Cli { .. })
    ));
}

/// **VALUE**: Verifies requests without `--node` are spread by `request_weighting`.
///
/// **BUG THIS CATCHES**: Would catch every request going to the first enabled node
/// regardless of the configured weights.
#[test]
fn given_weighted_nodes_when_selected_without_name_then_roll_decides() {
    // GIVEN: light weighted 1, heavy weighted 4
    let mut light = CoreApiNodeConfig::new("light", "http://127.0.0.1:1/core");
    light.request_weighting = 1.0;
    let mut heavy = CoreApiNodeConfig::new("heavy", "http://127.0.0.1:2/core");
    heavy.request_weighting = 4.0;
    let config = CoreApiConfig {
        nodes: vec![light, heavy],
        ..CoreApiConfig::default()
    };
    let pick = |roll: f64| select_node(&config, None, NodeRole::Requests, roll).unwrap().name.as_str();

    // WHEN / THEN: the first fifth goes to light, the rest to heavy
    assert_eq!(pick(0.1), "light");
    assert_eq!(pick(0.2), "heavy");
    assert_eq!(pick(0.9), "heavy");
}

/// **VALUE**: Verifies stream reads only use nodes that allow transaction indexing.
///
/// **BUG THIS CATCHES**: Would catch `stream` picking an archive node flagged
/// `disabled_for_transaction_indexing`, by weight or by `--node`.
#[test]
fn given_indexing_excluded_node_when_selected_for_indexing_then_skipped_or_rejected() {
    // GIVEN
    let mut archive = CoreApiNodeConfig::new("archive", "http://127.0.0.1:1/core");
    archive.disabled_for_transaction_indexing = true;
    archive.request_weighting = 100.0;
    let config = CoreApiConfig {
        nodes: vec![
            archive,
            CoreApiNodeConfig::new("indexer", "http://127.0.0.1:2/core"),
        ],
        ..CoreApiConfig::default()
    };

    // WHEN / THEN
    assert_eq!(
        select_node(&config, None, NodeRole::Indexing, 0.0).unwrap().name,
        "indexer"
    );
    assert_eq!(
        select_node(&config, None, NodeRole::Requests, 0.0).unwrap().name,
        "archive"
    );
    match select_node(&config, Some("archive"), NodeRole::Indexing, 0.0) {
        Err(CliError::Cli { message, .. }) => {
            assert!(message.contains("disabled for transaction indexing"))
        }
        other => panic!("expected Cli error, got {other:?}"),
    }
}

/// **VALUE**: Verifies an explicit `--config` path must exist.
///
/// **BUG THIS CATCHES**: Would catch a typo in `--config` silently running on defaults.
#[test]
fn given_missing_explicit_config_when_loaded_then_core_error() {
    // GIVEN
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");

    // WHEN
    let result = load_config(Some(&missing));

    // THEN
    assert!(matches!(result, Err(CliError::Core { .. })));
}

#[test]
fn given_hex_strings_when_validated_then_only_even_hex_accepted() {
    assert!(validate_hex("00ff").is_ok());
    assert!(validate_hex("").is_err());
    assert!(validate_hex("0").is_err());
    assert!(validate_hex("zz").is_err());
}
