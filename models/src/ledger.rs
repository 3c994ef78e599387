//! Ledger position and time types shared by most responses.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EpochRound {
    pub epoch: i64,
    pub round: i64,
}

/// Millisecond-precision instant as reported by consensus.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstantMs {
    pub unix_timestamp_ms: i64,
    /// RFC 3339 rendering of the same instant.
    pub date_time: String,
}

/// Second-precision instant as stored by the engine (`ScryptoInstant`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Instant {
    /// Decimal string; the engine stores an i64 which may exceed JSON's safe range.
    pub unix_timestamp_seconds: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LedgerHashes {
    pub state_tree_hash: String,
    pub transaction_tree_hash: String,
    pub receipt_tree_hash: String,
}

/// Identifies the ledger after a given state version was committed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommittedStateIdentifier {
    pub state_version: i64,
    pub state_tree_hash: String,
    pub transaction_tree_hash: String,
    pub receipt_tree_hash: String,
}

impl CommittedStateIdentifier {
    pub fn hashes(&self) -> LedgerHashes {
        LedgerHashes {
            state_tree_hash: self.state_tree_hash.clone(),
            transaction_tree_hash: self.transaction_tree_hash.clone(),
            receipt_tree_hash: self.receipt_tree_hash.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LedgerHeaderSummary {
    pub epoch_round: EpochRound,
    pub ledger_hashes: LedgerHashes,
    pub proposer_timestamp: InstantMs,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LedgerStateSummary {
    pub state_version: i64,
    pub header_summary: LedgerHeaderSummary,
}

/// Requests state as it was at a historical ledger position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LedgerStateSelector {
    #[serde(alias = "VersionLedgerStateSelector")]
    ByStateVersion { state_version: i64 },
}
