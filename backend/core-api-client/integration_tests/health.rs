use crate::helpers::{core_url, network_status};

use core_api_client::config::{CoreApiConfig, CoreApiNodeConfig, RequestConfig};
use core_api_client::health::{NodeHealth, check_nodes_health};

use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn node_at(state_version: i64) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/core/status/network-status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(network_status(state_version)))
        .mount(&server)
        .await;
    server
}

/// **VALUE**: Verifies enabled nodes are probed and classified against the highest tip.
///
/// **WHY THIS MATTERS**: Health decides which nodes get traffic; a wrong classification
/// routes reads to stale nodes.
///
/// **BUG THIS CATCHES**: Would catch disabled nodes being probed, unreachable nodes
/// counting as healthy, or lag being measured against the wrong reference.
#[tokio::test]
async fn given_three_nodes_when_health_checked_then_each_classified() {
    // GIVEN
    let synced = node_at(1_000).await;
    let lagging = node_at(700).await;
    let mut disabled = CoreApiNodeConfig::new("disabled", "http://127.0.0.1:1/core");
    disabled.enabled = false;

    let config = CoreApiConfig {
        network: "localnet".to_string(),
        request: RequestConfig {
            timeout: Duration::from_secs(2),
            max_retries: 0,
            ..RequestConfig::default()
        },
        nodes: vec![
            CoreApiNodeConfig::new("synced", core_url(&synced)),
            CoreApiNodeConfig::new("lagging", core_url(&lagging)),
            CoreApiNodeConfig::new("down", "http://127.0.0.1:1/core"),
            disabled,
        ],
        ..CoreApiConfig::default()
    };

    // WHEN
    let summary = check_nodes_health(&config).await;

    // THEN
    assert_eq!(summary.top_of_ledger_state_version, Some(1_000));
    assert_eq!(summary.nodes.len(), 3, "disabled node must be skipped");
    let health_of = |name: &str| {
        summary
            .nodes
            .iter()
            .find(|n| n.node_name == name)
            .map(|n| n.health)
    };
    assert_eq!(health_of("synced"), Some(NodeHealth::HealthyAndSynced));
    assert_eq!(health_of("lagging"), Some(NodeHealth::HealthyButLagging));
    assert_eq!(health_of("down"), Some(NodeHealth::Unhealthy));
    assert!(!summary.has_synced_majority());
}

/// **VALUE**: Verifies a node whose auth token variable is unset is reported unhealthy
/// instead of failing the whole check.
///
/// **BUG THIS CATCHES**: Would catch one misconfigured node aborting health for all.
#[tokio::test]
async fn given_node_with_missing_token_env_when_health_checked_then_only_that_node_unhealthy() {
    // GIVEN
    let healthy = node_at(10).await;
    let mut protected = CoreApiNodeConfig::new("protected", core_url(&healthy));
    protected.auth_token_env = Some("CORE_API_TEST_TOKEN_THAT_IS_NEVER_SET".to_string());

    let config = CoreApiConfig {
        nodes: vec![CoreApiNodeConfig::new("open", core_url(&healthy)), protected],
        ..CoreApiConfig::default()
    };

    // WHEN
    let summary = check_nodes_health(&config).await;

    // THEN
    assert_eq!(summary.synced_count(), 1);
    assert_eq!(summary.unhealthy_count(), 1);
    assert!(summary.nodes[1].error.is_some());
}
