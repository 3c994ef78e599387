//! Typed keys and values of the substates clients most often read.

use crate::access_rule::OwnerRole;
use crate::blueprint::{BlueprintDefinition, BlueprintDependencies, BlueprintRoyaltyConfig};
use crate::crypto::PublicKey;
use crate::entity::EntityReference;
use crate::ledger::InstantMs;
use crate::non_fungible::{NonFungibleIdType, NonFungibleLocalId};
use crate::sbor::{DataStruct, SborData};
use crate::type_info::TypeInfoDetails;

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ===== MODULES =====

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeInfoValue {
    pub details: TypeInfoDetails,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerRoleValue {
    pub owner_role: OwnerRole,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MetadataEntryKey {
    pub string: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataEntryValue {
    pub data: DataStruct,
}

// ===== RESOURCES =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DivisibilityValue {
    pub divisibility: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TotalSupplyValue {
    /// Decimal string.
    pub total_supply: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NonFungibleIdTypeValue {
    pub non_fungible_id_type: NonFungibleIdType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutableFieldsValue {
    pub mutable_fields: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NonFungibleDataKey {
    pub non_fungible_local_id: NonFungibleLocalId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonFungibleDataValue {
    pub data_struct: DataStruct,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VaultBalanceValue {
    /// Decimal string; the number of ids for non-fungible vaults.
    pub amount: String,
}

// ===== CONSENSUS =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EpochChangeCondition {
    pub min_round_count: i64,
    pub max_round_count: i64,
    pub target_duration_millis: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConsensusManagerConfigValue {
    pub max_validators: i64,
    pub epoch_change_condition: EpochChangeCondition,
    pub num_unstake_epochs: i64,
    pub total_emission_xrd_per_epoch: String,
    pub min_validator_reliability: String,
    pub num_owner_stake_units_unlock_epochs: i64,
    pub num_fee_increase_delay_epochs: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validator_creation_usd_equivalent_cost: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConsensusManagerStateValue {
    pub epoch: i64,
    pub round: i64,
    pub is_started: bool,
    pub effective_epoch_start: InstantMs,
    pub actual_epoch_start: InstantMs,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_leader: Option<ActiveValidatorIndex>,
}

/// Position of a validator within the current active set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActiveValidatorIndex {
    pub index: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrentTimeValue {
    pub proposer_timestamp: InstantMs,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrentTimeRoundedToMinutesValue {
    pub proposer_timestamp_rounded_down_to_minute: InstantMs,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActiveValidator {
    pub address: String,
    pub key: PublicKey,
    /// Decimal string.
    pub stake: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrentValidatorSetValue {
    pub validator_set: Vec<ActiveValidator>,
}

/// Per-validator proposal counts for the current epoch, indexed like the validator set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrentProposalStatisticValue {
    pub completed: Vec<i64>,
    pub missed: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorStateValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorted_key: Option<Value>,
    pub public_key: PublicKey,
    pub is_registered: bool,
    pub accepts_delegated_stake: bool,
    pub validator_fee_factor: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validator_fee_change_request: Option<Value>,
    pub stake_unit_resource_address: String,
    pub stake_xrd_vault: EntityReference,
    pub claim_token_resource_address: String,
    pub pending_xrd_withdraw_vault: EntityReference,
    pub locked_owner_stake_unit_vault: EntityReference,
    pub pending_owner_stake_unit_unlock_vault: EntityReference,
    pub pending_owner_stake_unit_withdrawals: Vec<Value>,
    pub already_unlocked_owner_stake_unit_amount: String,
}

// ===== ACCOUNTS =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DefaultDepositRule {
    Accept,
    Reject,
    AllowExisting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountStateValue {
    pub default_deposit_rule: DefaultDepositRule,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessControllerStateValue {
    pub controlled_vault: EntityReference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timed_recovery_delay_minutes: Option<i64>,
    pub recovery_badge_resource_address: String,
    pub is_primary_role_locked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_role_recovery_attempt: Option<Value>,
    pub has_primary_role_badge_withdraw_attempt: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery_role_recovery_attempt: Option<Value>,
    pub has_recovery_role_badge_withdraw_attempt: bool,
}

// ===== GENERIC COMPONENTS =====

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentStateValue {
    pub data: DataStruct,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValueStoreEntryKey {
    pub key_data: SborData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValueStoreEntryValue {
    pub data: DataStruct,
}

// ===== PACKAGES =====

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlueprintVersionKey {
    pub blueprint_name: String,
    pub blueprint_version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlueprintDefinitionValue {
    pub definition: BlueprintDefinition,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlueprintDependenciesValue {
    pub dependencies: BlueprintDependencies,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlueprintRoyaltyValue {
    pub royalty_config: BlueprintRoyaltyConfig,
}

// ===== TRANSACTION TRACKER =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionTrackerStateValue {
    pub start_epoch: i64,
    pub start_partition: i64,
    pub partition_range_start_inclusive: i64,
    pub partition_range_end_inclusive: i64,
    pub epochs_per_partition: i64,
}
