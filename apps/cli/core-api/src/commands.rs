use crate::args::{Cli, Command};
use crate::error::CliError;

use common::ErrorLocation;
use core_api_client::CoreApiClient;
use core_api_client::config::{CoreApiConfig, CoreApiNodeConfig};
use core_api_client::health::check_nodes_health;
use core_api_client::stream::TransactionStreamReader;
use models::stream::CommittedTransaction;
use models::transaction::{TransactionStatusRequest, TransactionSubmitRequest};
use models::{CommittedStateIdentifier, NetworkStatusRequest};

use std::panic::Location;
use std::path::Path;

use log::{debug, info};
use rand::Rng;
use serde::Serialize;
use serde_json::Value;

/// Load config from `--config` (must exist) or the default directory, then apply env overrides.
pub fn load_config(config_path: Option<&Path>) -> Result<CoreApiConfig, CliError> {
    let mut config = match config_path {
        Some(path) => CoreApiConfig::load_from_path(path)?,
        None => CoreApiConfig::load(&CoreApiConfig::default_dir()?)?,
    };
    config.apply_process_env()?;
    Ok(config)
}

/// What a selected node will be used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    Requests,
    /// Reading the committed transaction stream.
    Indexing,
}

/// The node named by `--node`, otherwise a weighted pick among the nodes eligible for `role`.
///
/// `roll` is a uniform sample from `[0, 1)`.
pub fn select_node<'a>(
    config: &'a CoreApiConfig,
    name: Option<&str>,
    role: NodeRole,
    roll: f64,
) -> Result<&'a CoreApiNodeConfig, CliError> {
    let node = match name {
        Some(name) => {
            let node = config.node(name).ok_or_else(|| CliError::Cli {
                message: format!("Node '{name}' is not configured"),
                location: ErrorLocation::from(Location::caller()),
            })?;
            if role == NodeRole::Indexing && node.disabled_for_transaction_indexing {
                return Err(CliError::Cli {
                    message: format!("Node '{name}' is disabled for transaction indexing"),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            node
        }
        None => match role {
            NodeRole::Requests => config.weighted_node(roll).ok_or_else(|| CliError::Cli {
                message: "No enabled nodes configured".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?,
            NodeRole::Indexing => {
                config
                    .weighted_indexing_node(roll)
                    .ok_or_else(|| CliError::Cli {
                        message: "No enabled nodes available for transaction indexing"
                            .to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    })?
            }
        },
    };
    debug!("Using node '{}' at {} for {role:?}", node.name, node.core_api_address);
    Ok(node)
}

/// Stream command output: the batch plus where it sits in the ledger.
#[derive(Debug, Serialize)]
struct StreamOutput<'a> {
    from_state_version: i64,
    max_ledger_state_version: i64,
    count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    previous_state_identifiers: Option<&'a CommittedStateIdentifier>,
    transactions: &'a [CommittedTransaction],
}

/// Run one subcommand and return its output as JSON.
pub async fn execute(
    command: &Command,
    config: &CoreApiConfig,
    node_name: Option<&str>,
) -> Result<Value, CliError> {
    let roll = rand::thread_rng().gen_range(0.0..1.0);
    let client = |role: NodeRole| -> Result<CoreApiClient, CliError> {
        let node = select_node(config, node_name, role, roll)?;
        Ok(CoreApiClient::from_node(node, &config.request)?)
    };

    let output = match command {
        Command::Health => serde_json::to_value(check_nodes_health(config).await)?,
        Command::NetworkConfiguration => {
            serde_json::to_value(client(NodeRole::Requests)?.network_configuration().await?)?
        }
        Command::NetworkStatus => serde_json::to_value(
            client(NodeRole::Requests)?
                .network_status(&NetworkStatusRequest::new(&config.network))
                .await?,
        )?,
        Command::Stream { from, limit } => {
            let reader = TransactionStreamReader::new(
                client(NodeRole::Indexing)?,
                &config.network,
                &config.stream,
            );
            let batch = reader.fetch_batch(*from, *limit).await?;
            info!(
                "Read {} transactions from state version {} (ledger tip {})",
                batch.len(),
                batch.from_state_version,
                batch.max_ledger_state_version
            );
            serde_json::to_value(StreamOutput {
                from_state_version: batch.from_state_version,
                max_ledger_state_version: batch.max_ledger_state_version,
                count: batch.len(),
                previous_state_identifiers: batch.previous_state_identifiers.as_ref(),
                transactions: &batch.transactions,
            })?
        }
        Command::TransactionStatus { intent_hash } => serde_json::to_value(
            client(NodeRole::Requests)?
                .transaction_status(&TransactionStatusRequest::new(
                    &config.network,
                    intent_hash.as_str(),
                ))
                .await?,
        )?,
        Command::Submit { hex } => {
            validate_hex(hex)?;
            let response = client(NodeRole::Requests)?
                .transaction_submit(&TransactionSubmitRequest::new(&config.network, hex.as_str()))
                .await?;
            info!("Transaction submitted (duplicate: {})", response.duplicate);
            serde_json::to_value(response)?
        }
    };

    Ok(output)
}

#[track_caller]
pub fn validate_hex(hex: &str) -> Result<(), CliError> {
    if hex.is_empty() || hex.len() % 2 != 0 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CliError::Cli {
            message: "Payload must be a non-empty, even-length hex string".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}

/// Set up logging, load config, run the subcommand and print its JSON to stdout.
pub async fn run(cli: Cli) -> Result<(), CliError> {
    crate::logger::initialize(cli.log_dir.as_deref(), cli.log_level())?;

    let config = load_config(cli.config.as_deref())?;
    let output = execute(&cli.command, &config, cli.node.as_deref()).await?;

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
