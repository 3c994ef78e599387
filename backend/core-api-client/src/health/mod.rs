//! Node health classification against the highest observed ledger state.

use crate::config::{CoreApiConfig, CoreApiNodeConfig, RequestConfig};
use crate::core_api_client::CoreApiClient;

use models::NetworkStatusRequest;

use futures_util::future::join_all;
use log::{debug, error, info, warn};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeHealth {
    HealthyAndSynced,
    HealthyButLagging,
    Unhealthy,
}

impl NodeHealth {
    pub fn is_healthy(&self) -> bool {
        !matches!(self, NodeHealth::Unhealthy)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeHealthReport {
    pub node_name: String,
    pub health: NodeHealth,
    /// State version reported by the node; `None` when it could not be reached.
    pub state_version: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthSummary {
    pub top_of_ledger_state_version: Option<i64>,
    pub nodes: Vec<NodeHealthReport>,
}

impl HealthSummary {
    fn count(&self, health: NodeHealth) -> usize {
        self.nodes.iter().filter(|node| node.health == health).count()
    }

    pub fn synced_count(&self) -> usize {
        self.count(NodeHealth::HealthyAndSynced)
    }

    pub fn lagging_count(&self) -> usize {
        self.count(NodeHealth::HealthyButLagging)
    }

    pub fn unhealthy_count(&self) -> usize {
        self.count(NodeHealth::Unhealthy)
    }

    /// Synced nodes only.
    pub fn synced_nodes(&self) -> impl Iterator<Item = &NodeHealthReport> {
        self.nodes
            .iter()
            .filter(|node| node.health == NodeHealth::HealthyAndSynced)
    }

    /// True when more than half of the checked nodes are synced.
    pub fn has_synced_majority(&self) -> bool {
        self.synced_count() * 2 > self.nodes.len()
    }
}

/// Classify a node from its state version relative to the ledger tip.
pub fn classify(state_version: Option<i64>, top_of_ledger: i64, max_lag: i64) -> NodeHealth {
    match state_version {
        None => NodeHealth::Unhealthy,
        Some(version) if top_of_ledger - version > max_lag => NodeHealth::HealthyButLagging,
        Some(_) => NodeHealth::HealthyAndSynced,
    }
}

/// Build a summary from per-node probe results.
pub fn summarize(probes: Vec<(String, Result<i64, String>)>, max_lag: i64) -> HealthSummary {
    let top_of_ledger_state_version = probes
        .iter()
        .filter_map(|(_, result)| result.as_ref().ok().copied())
        .max();
    let top = top_of_ledger_state_version.unwrap_or_default();

    let nodes = probes
        .into_iter()
        .map(|(node_name, result)| {
            let (state_version, error) = match result {
                Ok(version) => (Some(version), None),
                Err(message) => (None, Some(message)),
            };
            NodeHealthReport {
                node_name,
                health: classify(state_version, top, max_lag),
                state_version,
                error,
            }
        })
        .collect();

    HealthSummary {
        top_of_ledger_state_version,
        nodes,
    }
}

/// Query every enabled node concurrently and classify it.
pub async fn check_nodes_health(config: &CoreApiConfig) -> HealthSummary {
    let probes = join_all(
        config
            .enabled_nodes()
            .map(|node| probe(node, &config.request, &config.network)),
    )
    .await;

    let summary = summarize(probes, config.health.max_allowed_state_version_lag);

    let message = format!(
        "Node health: {} synced, {} lagging, {} unhealthy (top of ledger {:?})",
        summary.synced_count(),
        summary.lagging_count(),
        summary.unhealthy_count(),
        summary.top_of_ledger_state_version
    );
    if summary.has_synced_majority() {
        info!("{message}");
    } else {
        error!("{message}");
    }

    summary
}

async fn probe(
    node: &CoreApiNodeConfig,
    request: &RequestConfig,
    network: &str,
) -> (String, Result<i64, String>) {
    let client = match CoreApiClient::from_node(node, request) {
        Ok(client) => client,
        Err(e) => {
            warn!("Cannot create client for node '{}': {}", node.name, e);
            return (node.name.clone(), Err(e.to_string()));
        }
    };

    let result = client
        .network_status(&NetworkStatusRequest::new(network))
        .await
        .map(|status| status.current_state_version())
        .map_err(|e| {
            warn!("Node '{}' failed health check: {}", node.name, e);
            e.to_string()
        });

    if let Ok(version) = &result {
        debug!("Node '{}' is at state version {}", node.name, version);
    }

    (node.name.clone(), result)
}
