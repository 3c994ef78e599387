//! Node status: network configuration, ledger position, executed genesis scenarios.

use crate::entity::EntityType;
use crate::ledger::{CommittedStateIdentifier, EpochRound};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NetworkConfigurationVersion {
    pub core_version: String,
    pub api_version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddressType {
    pub subtype: String,
    pub hrp_prefix: String,
    pub entity_type: EntityType,
    pub address_byte_prefix: i32,
    pub address_byte_length: i32,
}

/// Addresses of native entities fixed at genesis.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WellKnownAddresses {
    pub xrd: String,
    pub faucet: String,
    pub consensus_manager: String,
    #[serde(flatten)]
    pub others: BTreeMap<String, String>,
}

impl WellKnownAddresses {
    pub fn get(&self, name: &str) -> Option<&str> {
        match name {
            "xrd" => Some(&self.xrd),
            "faucet" => Some(&self.faucet),
            "consensus_manager" => Some(&self.consensus_manager),
            other => self.others.get(other).map(String::as_str),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NetworkConfigurationResponse {
    pub version: NetworkConfigurationVersion,
    /// Logical network name, e.g. `mainnet` or `stokenet`.
    pub network: String,
    pub network_id: i32,
    /// Suffix appended to every bech32m HRP, e.g. `rdx`.
    pub network_hrp_suffix: String,
    /// Decimal string.
    pub usd_price_in_xrd: String,
    pub address_types: Vec<AddressType>,
    pub well_known_addresses: WellKnownAddresses,
}

impl NetworkConfigurationResponse {
    pub fn address_type(&self, entity_type: EntityType) -> Option<&AddressType> {
        self.address_types
            .iter()
            .find(|address_type| address_type.entity_type == entity_type)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NetworkStatusRequest {
    pub network: String,
}

impl NetworkStatusRequest {
    pub fn new(network: impl Into<String>) -> Self {
        Self {
            network: network.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NetworkStatusResponse {
    pub pre_genesis_state_identifier: CommittedStateIdentifier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genesis_epoch_round: Option<EpochRound>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_genesis_state_identifier: Option<CommittedStateIdentifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_genesis_epoch_round: Option<EpochRound>,
    pub current_state_identifier: CommittedStateIdentifier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_epoch_round: Option<EpochRound>,
    pub current_protocol_version: String,
}

impl NetworkStatusResponse {
    pub fn current_state_version(&self) -> i64 {
        self.current_state_identifier.state_version
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScenariosRequest {
    pub network: String,
}

impl ScenariosRequest {
    pub fn new(network: impl Into<String>) -> Self {
        Self {
            network: network.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScenariosResponse {
    pub executed_scenarios: Vec<ExecutedScenario>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExecutedScenario {
    pub logical_name: String,
    pub committed_transactions: Vec<ExecutedScenarioTransaction>,
    /// Addresses the scenario created, keyed by descriptive name.
    pub addresses: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExecutedScenarioTransaction {
    pub logical_name: String,
    pub state_version: i64,
    pub intent_hash: String,
    pub intent_hash_bech32m: String,
}
