//! Ledger streaming: committed transactions and ledger proofs.

pub mod builder;

use crate::crypto::{EcdsaSecp256k1Signature, PublicKey};
use crate::ledger::{CommittedStateIdentifier, InstantMs, LedgerHashes};
use crate::transaction::{NotarizedTransaction, TransactionReceipt};

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ===== FORMAT OPTIONS =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SborFormatOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub programmatic_json: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TransactionFormatOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blobs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_system_transaction: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_notarized_transaction: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_ledger_transaction: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SubstateFormatOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<bool>,
}

// ===== TRANSACTIONS =====

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StreamTransactionsRequest {
    pub network: String,
    /// First state version to return; the ledger starts at 1.
    pub from_state_version: i64,
    pub limit: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sbor_format_options: Option<SborFormatOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_format_options: Option<TransactionFormatOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub substate_format_options: Option<SubstateFormatOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_proofs: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamTransactionsResponse {
    /// Ledger state just before `from_state_version`; absent when streaming from genesis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_state_identifiers: Option<CommittedStateIdentifier>,
    pub from_state_version: i64,
    pub count: i32,
    pub max_ledger_state_version: i64,
    pub transactions: Vec<CommittedTransaction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proofs: Option<Vec<LedgerProof>>,
}

impl StreamTransactionsResponse {
    /// Ledger state after the last transaction in this batch.
    pub fn last_state_identifiers(&self) -> Option<&CommittedStateIdentifier> {
        self.transactions
            .last()
            .map(|transaction| &transaction.resultant_state_identifiers)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommittedTransaction {
    pub resultant_state_identifiers: CommittedStateIdentifier,
    pub ledger_transaction: LedgerTransaction,
    pub receipt: TransactionReceipt,
    pub proposer_timestamp_ms: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance_changes: Option<Value>,
}

impl CommittedTransaction {
    pub fn state_version(&self) -> i64 {
        self.resultant_state_identifiers.state_version
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundUpdateTransaction {
    pub proposer_timestamp: InstantMs,
    pub epoch: i64,
    pub round_in_epoch: i64,
    pub leader_proposal_history: Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LedgerTransaction {
    #[serde(alias = "GenesisLedgerTransaction")]
    Genesis {
        #[serde(skip_serializing_if = "Option::is_none")]
        payload_hex: Option<String>,
        genesis_transaction: Value,
    },
    #[serde(alias = "UserLedgerTransaction")]
    User {
        #[serde(skip_serializing_if = "Option::is_none")]
        payload_hex: Option<String>,
        notarized_transaction: NotarizedTransaction,
    },
    #[serde(alias = "RoundUpdateLedgerTransaction")]
    RoundUpdate {
        #[serde(skip_serializing_if = "Option::is_none")]
        payload_hex: Option<String>,
        round_update_transaction: RoundUpdateTransaction,
    },
    #[serde(alias = "FlashLedgerTransaction")]
    Flash {
        #[serde(skip_serializing_if = "Option::is_none")]
        payload_hex: Option<String>,
        flash_transaction: Value,
    },
}

impl LedgerTransaction {
    pub fn payload_hex(&self) -> Option<&str> {
        match self {
            LedgerTransaction::Genesis { payload_hex, .. }
            | LedgerTransaction::User { payload_hex, .. }
            | LedgerTransaction::RoundUpdate { payload_hex, .. }
            | LedgerTransaction::Flash { payload_hex, .. } => payload_hex.as_deref(),
        }
    }

    /// Intent hash of a user transaction.
    pub fn intent_hash(&self) -> Option<&str> {
        match self {
            LedgerTransaction::User {
                notarized_transaction,
                ..
            } => Some(&notarized_transaction.signed_intent.intent.hash),
            _ => None,
        }
    }
}

// ===== PROOFS =====

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StreamProofsFilter {
    #[serde(alias = "StreamProofsFilterAny")]
    Any {
        #[serde(skip_serializing_if = "Option::is_none")]
        from_state_version: Option<i64>,
    },
    #[serde(alias = "StreamProofsFilterNewEpochs")]
    NewEpochs {
        #[serde(skip_serializing_if = "Option::is_none")]
        from_epoch: Option<i64>,
    },
    #[serde(alias = "StreamProofsFilterProtocolUpdateInitializations")]
    ProtocolUpdateInitializations {
        #[serde(skip_serializing_if = "Option::is_none")]
        from_state_version: Option<i64>,
    },
    #[serde(alias = "StreamProofsFilterProtocolUpdateExecution")]
    ProtocolUpdateExecution {
        #[serde(skip_serializing_if = "Option::is_none")]
        protocol_version: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        from_state_version: Option<i64>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StreamProofsRequest {
    pub network: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<StreamProofsFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_page_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continuation_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamProofsResponse {
    pub page: Vec<LedgerProof>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continuation_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerHeader {
    pub epoch: i64,
    pub round: i64,
    pub state_version: i64,
    pub hashes: LedgerHashes,
    pub consensus_parent_round_timestamp_ms: i64,
    pub proposer_timestamp_ms: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_epoch: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_protocol_version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimestampedValidatorSignature {
    pub validator_key: PublicKey,
    pub validator_address: String,
    pub timestamp_ms: i64,
    pub signature: EcdsaSecp256k1Signature,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LedgerProofOrigin {
    #[serde(alias = "GenesisLedgerProofOrigin")]
    Genesis { genesis_opaque_hash: String },
    #[serde(alias = "ConsensusLedgerProofOrigin")]
    Consensus {
        opaque_hash: String,
        timestamped_signatures: Vec<TimestampedValidatorSignature>,
    },
    #[serde(alias = "ProtocolUpdateLedgerProofOrigin")]
    ProtocolUpdate {
        protocol_version_name: String,
        batch_idx: i64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerProof {
    pub ledger_header: LedgerHeader,
    pub origin: LedgerProofOrigin,
}
