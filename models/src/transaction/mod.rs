//! Transaction submission, status, preview and parsing.

pub mod parse_builder;
pub mod preview_builder;

use crate::crypto::{PublicKey, Signature, SignatureWithPublicKey};
use crate::entity::EntityReference;
use crate::ledger::{InstantMs, LedgerStateSelector, LedgerStateSummary};
use crate::sbor::SborData;
use crate::stream::{CommittedTransaction, LedgerTransaction, TransactionFormatOptions};
use crate::substate::Substate;
use crate::substate_key::{PartitionId, SubstateId};
use crate::structure::SubstateSystemStructure;
use crate::type_info::ObjectModuleId;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

// ===== SUBMIT & STATUS =====

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionSubmitRequest {
    pub network: String,
    pub notarized_transaction_hex: String,
    /// Re-run static validation even if the payload was already seen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_recalculate: Option<bool>,
}

impl TransactionSubmitRequest {
    pub fn new(network: impl Into<String>, notarized_transaction_hex: impl Into<String>) -> Self {
        Self {
            network: network.into(),
            notarized_transaction_hex: notarized_transaction_hex.into(),
            force_recalculate: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionSubmitResponse {
    /// The payload was already in the mempool.
    pub duplicate: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionStatusRequest {
    pub network: String,
    /// Bech32m or hex intent hash.
    pub intent_hash: String,
}

impl TransactionStatusRequest {
    pub fn new(network: impl Into<String>, intent_hash: impl Into<String>) -> Self {
        Self {
            network: network.into(),
            intent_hash: intent_hash.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionIntentStatus {
    CommittedSuccess,
    CommittedFailure,
    NotSeen,
    InMempool,
    PermanentlyRejected,
    LikelyButNotCertainRejection,
}

impl TransactionIntentStatus {
    pub fn is_committed(&self) -> bool {
        matches!(
            self,
            TransactionIntentStatus::CommittedSuccess | TransactionIntentStatus::CommittedFailure
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionPayloadStatus {
    CommittedSuccess,
    CommittedFailure,
    CommittedIntentAlreadyCommitted,
    InMempool,
    PermanentlyRejected,
    TransientlyAccepted,
    TransientlyRejected,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionPayloadDetails {
    pub payload_hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload_hash_bech32m: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_version: Option<i64>,
    pub status: TransactionPayloadStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_from_epoch: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_from_timestamp: Option<InstantMs>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionStatusResponse {
    pub intent_status: TransactionIntentStatus,
    pub status_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid_from_epoch: Option<i64>,
    pub known_payloads: Vec<TransactionPayloadDetails>,
}

// ===== RECEIPTS =====

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionReceiptRequest {
    pub network: String,
    pub intent_hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_format_options: Option<TransactionFormatOptions>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionReceiptResponse {
    pub committed: CommittedTransaction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionStatus {
    Succeeded,
    Failed,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CostingParameters {
    pub execution_cost_unit_price: String,
    pub execution_cost_unit_limit: i64,
    pub execution_cost_unit_loan: i64,
    pub finalization_cost_unit_price: String,
    pub finalization_cost_unit_limit: i64,
    pub xrd_usd_price: String,
    pub xrd_storage_price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xrd_archive_storage_price: Option<String>,
    pub tip_percentage: i32,
}

/// Fees charged, as XRD decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeeSummary {
    pub execution_cost_units_consumed: i64,
    pub finalization_cost_units_consumed: i64,
    pub xrd_total_execution_cost: String,
    pub xrd_total_finalization_cost: String,
    pub xrd_total_royalty_cost: String,
    pub xrd_total_storage_cost: String,
    pub xrd_total_tipping_cost: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstateValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub substate_data: Option<Substate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub substate_hex: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedSubstate {
    pub substate_id: SubstateId,
    pub value: SubstateValue,
    pub system_structure: SubstateSystemStructure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatedSubstate {
    pub substate_id: SubstateId,
    pub new_value: SubstateValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_value: Option<SubstateValue>,
    pub system_structure: SubstateSystemStructure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedSubstate {
    pub substate_id: SubstateId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_value: Option<SubstateValue>,
    pub system_structure: SubstateSystemStructure,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StateUpdates {
    pub deleted_partitions: Vec<PartitionId>,
    pub created_substates: Vec<CreatedSubstate>,
    pub updated_substates: Vec<UpdatedSubstate>,
    pub deleted_substates: Vec<DeletedSubstate>,
    pub new_global_entities: Vec<EntityReference>,
}

impl StateUpdates {
    pub fn is_empty(&self) -> bool {
        self.deleted_partitions.is_empty()
            && self.created_substates.is_empty()
            && self.updated_substates.is_empty()
            && self.deleted_substates.is_empty()
            && self.new_global_entities.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EventEmitterIdentifier {
    #[serde(alias = "MethodEventEmitterIdentifier")]
    Method {
        entity: EntityReference,
        object_module_id: ObjectModuleId,
    },
    #[serde(alias = "FunctionEventEmitterIdentifier")]
    Function {
        package_address: String,
        blueprint_name: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventTypeIdentifier {
    pub emitter: EventEmitterIdentifier,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub event_type: EventTypeIdentifier,
    pub data: SborData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionReceipt {
    pub status: TransactionStatus,
    pub costing_parameters: CostingParameters,
    pub fee_summary: FeeSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_source: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_destination: Option<Value>,
    pub state_updates: StateUpdates,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<Event>>,
    /// One entry per manifest instruction; only present on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Vec<SborData>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_epoch: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl TransactionReceipt {
    pub fn is_success(&self) -> bool {
        self.status == TransactionStatus::Succeeded
    }
}

// ===== TRANSACTION PAYLOADS =====

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionHeader {
    pub network_id: i32,
    pub start_epoch_inclusive: i64,
    pub end_epoch_exclusive: i64,
    pub nonce: i64,
    pub notary_public_key: PublicKey,
    pub notary_is_signatory: bool,
    pub tip_percentage: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlaintextMessageContent {
    #[serde(alias = "StringPlaintextMessageContent")]
    String { value: String },
    #[serde(alias = "BinaryPlaintextMessageContent")]
    Binary { value_hex: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TransactionMessage {
    #[serde(alias = "PlaintextTransactionMessage")]
    Plaintext {
        mime_type: String,
        content: PlaintextMessageContent,
    },
    #[serde(alias = "EncryptedTransactionMessage")]
    Encrypted {
        encrypted_hex: String,
        curve_decryptor_sets: Vec<Value>,
    },
}

impl TransactionMessage {
    pub fn plain_text(text: impl Into<String>) -> Self {
        TransactionMessage::Plaintext {
            mime_type: String::from("text/plain"),
            content: PlaintextMessageContent::String { value: text.into() },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionIntent {
    pub hash: String,
    pub hash_bech32m: String,
    pub header: TransactionHeader,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blobs_hex: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<TransactionMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedTransactionIntent {
    pub hash: String,
    pub hash_bech32m: String,
    pub intent: TransactionIntent,
    pub intent_signatures: Vec<SignatureWithPublicKey>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotarizedTransaction {
    pub hash: String,
    pub hash_bech32m: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload_hex: Option<String>,
    pub signed_intent: SignedTransactionIntent,
    pub notary_signature: Signature,
}

// ===== PREVIEW =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PreviewFlags {
    pub use_free_credit: bool,
    pub assume_all_signature_proofs: bool,
    pub skip_epoch_check: bool,
    #[serde(default)]
    pub disable_auth_checks: bool,
}

/// Extra sections the node should attach to a preview response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TransactionPreviewResponseOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radix_engine_toolkit_receipt: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionPreviewRequest {
    pub network: String,
    /// Preview against historical state instead of the current tip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub at_ledger_state: Option<LedgerStateSelector>,
    /// Text representation of the manifest.
    pub manifest: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blobs_hex: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_epoch_inclusive: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_epoch_exclusive: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notary_public_key: Option<PublicKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notary_is_signatory: Option<bool>,
    pub tip_percentage: i32,
    pub nonce: i64,
    pub signer_public_keys: Vec<PublicKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<TransactionMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<TransactionPreviewResponseOptions>,
    pub flags: PreviewFlags,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceChange {
    pub resource_address: String,
    pub component_entity: EntityReference,
    pub vault_entity: EntityReference,
    /// Signed decimal string; negative for withdrawals.
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstructionResourceChanges {
    pub index: i32,
    pub resource_changes: Vec<ResourceChange>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PreviewLog {
    pub level: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionPreviewResponse {
    pub at_ledger_state: LedgerStateSummary,
    pub encoded_receipt: String,
    pub receipt: TransactionReceipt,
    pub instruction_resource_changes: Vec<InstructionResourceChanges>,
    pub logs: Vec<PreviewLog>,
}

// ===== PARSE =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ParseMode {
    #[default]
    Any,
    Notarized,
    Signed,
    Unsigned,
    Ledger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ValidationMode {
    None,
    #[default]
    Static,
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ResponseMode {
    Basic,
    #[default]
    Full,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionParseRequest {
    pub network: String,
    pub payload_hex: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_mode: Option<ValidationMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mode: Option<ResponseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_format_options: Option<TransactionFormatOptions>,
}

/// Hashes identifying a parsed payload; which are present depends on the payload kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ParsedTransactionIdentifiers {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent_hash_bech32m: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signed_intent_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signed_intent_hash_bech32m: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload_hash_bech32m: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ledger_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ledger_hash_bech32m: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedValidationError {
    pub reason: String,
    pub is_permanent: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ParsedTransaction {
    #[serde(alias = "ParsedNotarizedTransaction")]
    NotarizedTransaction {
        #[serde(skip_serializing_if = "Option::is_none")]
        notarized_transaction: Option<NotarizedTransaction>,
        identifiers: ParsedTransactionIdentifiers,
        #[serde(skip_serializing_if = "Option::is_none")]
        validation_error: Option<ParsedValidationError>,
    },
    #[serde(alias = "ParsedSignedTransactionIntent")]
    SignedTransactionIntent {
        #[serde(skip_serializing_if = "Option::is_none")]
        signed_intent: Option<SignedTransactionIntent>,
        identifiers: ParsedTransactionIdentifiers,
    },
    #[serde(alias = "ParsedTransactionIntent")]
    TransactionIntent {
        #[serde(skip_serializing_if = "Option::is_none")]
        intent: Option<TransactionIntent>,
        identifiers: ParsedTransactionIdentifiers,
    },
    #[serde(alias = "ParsedLedgerTransaction")]
    LedgerTransaction {
        #[serde(skip_serializing_if = "Option::is_none")]
        ledger_transaction: Option<LedgerTransaction>,
        identifiers: ParsedTransactionIdentifiers,
    },
}

impl ParsedTransaction {
    pub fn identifiers(&self) -> &ParsedTransactionIdentifiers {
        match self {
            ParsedTransaction::NotarizedTransaction { identifiers, .. }
            | ParsedTransaction::SignedTransactionIntent { identifiers, .. }
            | ParsedTransaction::TransactionIntent { identifiers, .. }
            | ParsedTransaction::LedgerTransaction { identifiers, .. } => identifiers,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionParseResponse {
    pub parsed: ParsedTransaction,
}

// ===== CALL PREVIEW =====

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TargetIdentifier {
    #[serde(alias = "ComponentMethodTargetIdentifier")]
    Method {
        component_address: String,
        method_name: String,
    },
    #[serde(alias = "BlueprintFunctionTargetIdentifier")]
    Function {
        package_address: String,
        blueprint_name: String,
        function_name: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionCallPreviewRequest {
    pub network: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub at_ledger_state: Option<LedgerStateSelector>,
    pub target: TargetIdentifier,
    /// SBOR-encoded arguments, hex.
    pub arguments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionCallPreviewResponse {
    pub at_ledger_state: LedgerStateSummary,
    pub status: TransactionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<SborData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}
