use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MempoolListRequest {
    pub network: String,
}

impl MempoolListRequest {
    pub fn new(network: impl Into<String>) -> Self {
        Self {
            network: network.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MempoolTransactionHashes {
    pub intent_hash: String,
    pub intent_hash_bech32m: String,
    pub payload_hash: String,
    pub payload_hash_bech32m: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MempoolListResponse {
    pub contents: Vec<MempoolTransactionHashes>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MempoolTransactionRequest {
    pub network: String,
    pub payload_hashes: Vec<String>,
}

/// A payload looked up in the mempool. Exactly one of `hex` or `error` is set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MempoolTransactionPayload {
    pub hash: String,
    pub hash_bech32m: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MempoolTransactionResponse {
    pub count: i32,
    pub payloads: Vec<MempoolTransactionPayload>,
}

impl MempoolTransactionResponse {
    pub fn found(&self) -> impl Iterator<Item = &MempoolTransactionPayload> {
        self.payloads.iter().filter(|payload| payload.hex.is_some())
    }
}
