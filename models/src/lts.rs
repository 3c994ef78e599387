//! Long-term support endpoints: a small, stable surface for wallets and exchanges.

use crate::ledger::{InstantMs, LedgerHeaderSummary};
use crate::transaction::{TransactionIntentStatus, TransactionPayloadStatus};

pub use crate::substate::values::DefaultDepositRule;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type LtsTransactionIntentStatus = TransactionIntentStatus;
pub type LtsTransactionPayloadStatus = TransactionPayloadStatus;

// ===== TRANSACTIONS =====

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LtsTransactionConstructionRequest {
    pub network: String,
}

/// What a client needs to build a valid transaction header.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LtsTransactionConstructionResponse {
    pub current_epoch: i64,
    pub ledger_clock: InstantMs,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LtsTransactionSubmitRequest {
    pub network: String,
    pub notarized_transaction_hex: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LtsTransactionSubmitResponse {
    pub duplicate: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LtsTransactionStatusRequest {
    pub network: String,
    pub intent_hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LtsTransactionPayloadDetails {
    pub payload_hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload_hash_bech32m: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_version: Option<i64>,
    pub status: LtsTransactionPayloadStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LtsTransactionStatusResponse {
    pub intent_status: LtsTransactionIntentStatus,
    pub status_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub committed_state_version: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid_from_epoch: Option<i64>,
    pub known_payloads: Vec<LtsTransactionPayloadDetails>,
}

// ===== ACCOUNT STATE =====

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LtsFungibleResourceBalance {
    pub fungible_resource_address: String,
    /// Decimal string.
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LtsStateAccountFungibleResourceBalanceRequest {
    pub network: String,
    pub account_address: String,
    pub resource_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LtsStateAccountFungibleResourceBalanceResponse {
    pub state_version: i64,
    pub ledger_header_summary: LedgerHeaderSummary,
    pub account_address: String,
    pub fungible_resource_balance: LtsFungibleResourceBalance,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LtsStateAccountAllFungibleResourceBalancesRequest {
    pub network: String,
    pub account_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LtsStateAccountAllFungibleResourceBalancesResponse {
    pub state_version: i64,
    pub ledger_header_summary: LedgerHeaderSummary,
    pub account_address: String,
    pub fungible_resource_balances: Vec<LtsFungibleResourceBalance>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourcePreference {
    Allowed,
    Disallowed,
}

/// Badge a depositor would present, discriminated by `badge_type`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "badge_type")]
pub enum PresentedBadge {
    #[serde(alias = "ResourcePresentedBadge")]
    Resource { resource_address: String },
    #[serde(alias = "NonFungiblePresentedBadge")]
    NonFungible {
        resource_address: String,
        local_id_hex: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LtsStateAccountDepositBehaviourRequest {
    pub network: String,
    pub account_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_addresses: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<PresentedBadge>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceSpecificDepositBehaviour {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_preference: Option<ResourcePreference>,
    pub vault_exists: bool,
    pub is_xrd: bool,
    /// Whether a `try_deposit` of this resource would currently succeed.
    pub allows_try_deposit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LtsStateAccountDepositBehaviourResponse {
    pub state_version: i64,
    pub ledger_header_summary: LedgerHeaderSummary,
    pub default_deposit_rule: DefaultDepositRule,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_badge_authorized_depositor: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_specific_behaviours: Option<BTreeMap<String, ResourceSpecificDepositBehaviour>>,
}

impl LtsStateAccountDepositBehaviourResponse {
    pub fn allows_try_deposit(&self, resource_address: &str) -> Option<bool> {
        self.resource_specific_behaviours
            .as_ref()?
            .get(resource_address)
            .map(|behaviour| behaviour.allows_try_deposit)
    }
}

// ===== OUTCOME STREAMS =====

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LtsStreamTransactionOutcomesRequest {
    pub network: String,
    pub from_state_version: i64,
    pub limit: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LtsStreamTransactionOutcomesResponse {
    pub from_state_version: i64,
    pub count: i32,
    pub max_ledger_state_version: i64,
    pub committed_transaction_outcomes: Vec<LtsCommittedTransactionOutcome>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LtsStreamAccountTransactionOutcomesRequest {
    pub network: String,
    pub account_address: String,
    pub from_state_version: i64,
    pub limit: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LtsStreamAccountTransactionOutcomesResponse {
    pub from_state_version: i64,
    pub count: i32,
    pub max_ledger_state_version: i64,
    pub committed_transaction_outcomes: Vec<LtsCommittedTransactionOutcome>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LtsCommittedTransactionStatus {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LtsUserTransactionIdentifiers {
    pub intent_hash: String,
    pub intent_hash_bech32m: String,
    pub signed_intent_hash: String,
    pub signed_intent_hash_bech32m: String,
    pub payload_hash: String,
    pub payload_hash_bech32m: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LtsFungibleResourceBalanceChange {
    pub resource_address: String,
    /// Signed decimal string.
    pub balance_change: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LtsFeeFungibleResourceBalanceChangeType {
    FeePayment,
    FeeDistributed,
    TipDistributed,
    RoyaltyDistributed,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LtsFeeFungibleResourceBalanceChange {
    #[serde(rename = "type")]
    pub change_type: LtsFeeFungibleResourceBalanceChangeType,
    pub resource_address: String,
    pub balance_change: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LtsEntityFungibleBalanceChanges {
    pub entity_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_balance_change: Option<LtsFungibleResourceBalanceChange>,
    pub fee_balance_changes: Vec<LtsFeeFungibleResourceBalanceChange>,
    pub non_fee_balance_changes: Vec<LtsFungibleResourceBalanceChange>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LtsResultantFungibleBalance {
    pub resource_address: String,
    pub resultant_balance: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LtsResultantAccountFungibleBalances {
    pub account_address: String,
    pub resultant_balances: Vec<LtsResultantFungibleBalance>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LtsCommittedTransactionOutcome {
    pub state_version: i64,
    pub proposer_timestamp_ms: i64,
    pub accumulator_hash: String,
    /// Present for user transactions only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_transaction_identifiers: Option<LtsUserTransactionIdentifiers>,
    pub status: LtsCommittedTransactionStatus,
    pub fungible_entity_balance_changes: Vec<LtsEntityFungibleBalanceChanges>,
    #[serde(default)]
    pub resultant_account_fungible_balances: Vec<LtsResultantAccountFungibleBalances>,
    /// Decimal string, XRD.
    pub total_fee: String,
}

impl LtsCommittedTransactionOutcome {
    /// Net non-fee change to `entity_address`'s balance of `resource_address`, if any.
    pub fn non_fee_change(&self, entity_address: &str, resource_address: &str) -> Option<&str> {
        self.fungible_entity_balance_changes
            .iter()
            .find(|changes| changes.entity_address == entity_address)?
            .non_fee_balance_changes
            .iter()
            .find(|change| change.resource_address == resource_address)
            .map(|change| change.balance_change.as_str())
    }
}
