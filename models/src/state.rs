//! Current-state reads of individual entities.
//!
//! Every response is pinned to the ledger state it was read at via `at_ledger_state`.

use crate::entity::EntityReference;
use crate::ledger::LedgerStateSummary;
use crate::non_fungible::ResourceAmount;
use crate::substate::Substate;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VaultBalance {
    pub vault_entity: EntityReference,
    pub resource_amount: ResourceAmount,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateComponentDescendentNode {
    pub parent_entity: EntityReference,
    pub parent_partition_number: i32,
    pub parent_substate_db_sort_key_hex: String,
    pub entity: EntityReference,
    pub depth: i32,
}

// ===== ACCOUNT =====

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateAccountRequest {
    pub network: String,
    pub account_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateAccountResponse {
    pub at_ledger_state: LedgerStateSummary,
    pub info: Substate,
    pub owner_role: Substate,
    pub state: Substate,
    pub vaults: Vec<VaultBalance>,
}

impl StateAccountResponse {
    pub fn balance_of(&self, resource_address: &str) -> Option<&str> {
        self.vaults
            .iter()
            .map(|vault| &vault.resource_amount)
            .find(|amount| amount.resource_address() == resource_address)
            .map(ResourceAmount::amount)
    }
}

// ===== COMPONENT =====

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateComponentRequest {
    pub network: String,
    pub component_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateComponentResponse {
    pub at_ledger_state: LedgerStateSummary,
    pub info: Substate,
    pub state: Substate,
    pub owner_role: Substate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub royalty_accumulator: Option<Substate>,
    pub vaults: Vec<VaultBalance>,
    pub descendent_nodes: Vec<StateComponentDescendentNode>,
}

// ===== RESOURCE =====

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateResourceRequest {
    pub network: String,
    pub resource_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "resource_type")]
pub enum StateResourceManager {
    #[serde(alias = "StateFungibleResourceManager")]
    Fungible {
        divisibility: Substate,
        #[serde(skip_serializing_if = "Option::is_none")]
        total_supply: Option<Substate>,
    },
    #[serde(alias = "StateNonFungibleResourceManager")]
    NonFungible {
        id_type: Substate,
        #[serde(skip_serializing_if = "Option::is_none")]
        total_supply: Option<Substate>,
        mutable_fields: Substate,
    },
}

impl StateResourceManager {
    pub fn total_supply(&self) -> Option<&Substate> {
        match self {
            StateResourceManager::Fungible { total_supply, .. }
            | StateResourceManager::NonFungible { total_supply, .. } => total_supply.as_ref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateResourceResponse {
    pub at_ledger_state: LedgerStateSummary,
    pub manager: StateResourceManager,
    pub owner_role: Substate,
}

// ===== VALIDATOR =====

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateValidatorRequest {
    pub network: String,
    pub validator_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateValidatorResponse {
    pub at_ledger_state: LedgerStateSummary,
    pub address: String,
    pub state: Substate,
    pub owner_role: Substate,
    pub vaults: Vec<VaultBalance>,
    pub descendent_nodes: Vec<StateComponentDescendentNode>,
}

// ===== ACCESS CONTROLLER =====

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateAccessControllerRequest {
    pub network: String,
    pub controller_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateAccessControllerResponse {
    pub at_ledger_state: LedgerStateSummary,
    pub state: Substate,
    pub owner_role: Substate,
    pub vaults: Vec<VaultBalance>,
    pub descendent_nodes: Vec<StateComponentDescendentNode>,
}

// ===== CONSENSUS MANAGER =====

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateConsensusManagerRequest {
    pub network: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_readiness_signals: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProtocolVersionReadiness {
    pub signalled_protocol_version: String,
    /// Decimal string in `[0, 1]`.
    pub total_active_stake_proportion: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateConsensusManagerResponse {
    pub at_ledger_state: LedgerStateSummary,
    pub config: Substate,
    pub state: Substate,
    pub current_proposal_statistic: Substate,
    pub current_validator_set: Substate,
    pub current_time: Substate,
    pub current_time_rounded_to_minutes: Substate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_validator_readiness_signals: Option<Vec<ProtocolVersionReadiness>>,
}

// ===== PACKAGE =====

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatePackageRequest {
    pub network: String,
    pub package_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatePackageResponse {
    pub at_ledger_state: LedgerStateSummary,
    pub owner_role: Substate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub royalty_accumulator: Option<Substate>,
    pub blueprint_definitions: Vec<Substate>,
}

// ===== NON-FUNGIBLE =====

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateNonFungibleRequest {
    pub network: String,
    pub resource_address: String,
    /// Simple representation of the local id, e.g. `#1#`.
    pub non_fungible_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateNonFungibleResponse {
    pub at_ledger_state: LedgerStateSummary,
    pub non_fungible: Substate,
}
