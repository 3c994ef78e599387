//! Error bodies returned by the Core API alongside non-2xx statuses.

use crate::ledger::InstantMs;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorResponseType {
    Basic,
    TransactionSubmit,
    LtsTransactionSubmit,
    StreamTransactions,
    StreamProofs,
}

/// Error body, discriminated by `error_type`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "error_type")]
pub enum ErrorResponse {
    #[serde(alias = "BasicErrorResponse")]
    Basic(BasicErrorResponse),
    #[serde(alias = "TransactionSubmitErrorResponse")]
    TransactionSubmit(DetailedErrorResponse<TransactionSubmitErrorDetails>),
    #[serde(alias = "LtsTransactionSubmitErrorResponse")]
    LtsTransactionSubmit(DetailedErrorResponse<LtsTransactionSubmitErrorDetails>),
    #[serde(alias = "StreamTransactionsErrorResponse")]
    StreamTransactions(DetailedErrorResponse<StreamTransactionsErrorDetails>),
    #[serde(alias = "StreamProofsErrorResponse")]
    StreamProofs(DetailedErrorResponse<StreamProofsErrorDetails>),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BasicErrorResponse {
    /// Mirrors the HTTP status code.
    pub code: i32,
    pub message: String,
    /// Correlates with the node's logs when error details are hidden.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DetailedErrorResponse<D> {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<D>,
}

impl ErrorResponse {
    pub fn basic(code: i32, message: impl Into<String>) -> Self {
        ErrorResponse::Basic(BasicErrorResponse {
            code,
            message: message.into(),
            trace_id: None,
        })
    }

    pub fn error_type(&self) -> ErrorResponseType {
        match self {
            ErrorResponse::Basic(_) => ErrorResponseType::Basic,
            ErrorResponse::TransactionSubmit(_) => ErrorResponseType::TransactionSubmit,
            ErrorResponse::LtsTransactionSubmit(_) => ErrorResponseType::LtsTransactionSubmit,
            ErrorResponse::StreamTransactions(_) => ErrorResponseType::StreamTransactions,
            ErrorResponse::StreamProofs(_) => ErrorResponseType::StreamProofs,
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            ErrorResponse::Basic(e) => e.code,
            ErrorResponse::TransactionSubmit(e) => e.code,
            ErrorResponse::LtsTransactionSubmit(e) => e.code,
            ErrorResponse::StreamTransactions(e) => e.code,
            ErrorResponse::StreamProofs(e) => e.code,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ErrorResponse::Basic(e) => &e.message,
            ErrorResponse::TransactionSubmit(e) => &e.message,
            ErrorResponse::LtsTransactionSubmit(e) => &e.message,
            ErrorResponse::StreamTransactions(e) => &e.message,
            ErrorResponse::StreamProofs(e) => &e.message,
        }
    }

    pub fn trace_id(&self) -> Option<&str> {
        match self {
            ErrorResponse::Basic(e) => e.trace_id.as_deref(),
            ErrorResponse::TransactionSubmit(e) => e.trace_id.as_deref(),
            ErrorResponse::LtsTransactionSubmit(e) => e.trace_id.as_deref(),
            ErrorResponse::StreamTransactions(e) => e.trace_id.as_deref(),
            ErrorResponse::StreamProofs(e) => e.trace_id.as_deref(),
        }
    }
}

/// Summary of an earlier commit of the same intent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommittedIntentMetadata {
    pub state_version: i64,
    pub payload_hash: String,
    pub payload_hash_bech32m: String,
    /// False when the intent was committed through a different notarized payload.
    pub is_same_transaction: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmitRejectedErrorDetails {
    pub error_message: String,
    /// Whether the rejection was determined by this request rather than cached.
    pub is_fresh: bool,
    pub is_payload_rejection_permanent: bool,
    pub is_intent_rejection_permanent: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_from_timestamp: Option<InstantMs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_from_epoch: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid_from_epoch: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TransactionSubmitErrorDetails {
    #[serde(alias = "TransactionSubmitMempoolFullErrorDetails")]
    MempoolFull { mempool_capacity: i32 },
    #[serde(alias = "TransactionSubmitRejectedErrorDetails")]
    Rejected(SubmitRejectedErrorDetails),
    #[serde(alias = "TransactionSubmitIntentAlreadyCommitted")]
    IntentAlreadyCommitted {
        committed_as: CommittedIntentMetadata,
    },
    #[serde(alias = "TransactionSubmitPriorityThresholdNotMetErrorDetails")]
    PriorityThresholdNotMet {
        #[serde(skip_serializing_if = "Option::is_none")]
        tip_percentage: Option<i32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        min_tip_percentage_required: Option<i32>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LtsTransactionSubmitErrorDetails {
    #[serde(alias = "LtsTransactionSubmitMempoolFullErrorDetails")]
    MempoolFull { mempool_capacity: i32 },
    #[serde(alias = "LtsTransactionSubmitRejectedErrorDetails")]
    Rejected(SubmitRejectedErrorDetails),
    #[serde(alias = "LtsTransactionSubmitIntentAlreadyCommitted")]
    IntentAlreadyCommitted {
        committed_as: CommittedIntentMetadata,
    },
    #[serde(alias = "LtsTransactionSubmitPriorityThresholdNotMetErrorDetails")]
    PriorityThresholdNotMet {
        tip_percentage: i32,
        #[serde(skip_serializing_if = "Option::is_none")]
        min_tip_percentage_required: Option<i32>,
    },
}

impl LtsTransactionSubmitErrorDetails {
    /// Whether resubmitting the same payload later could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            LtsTransactionSubmitErrorDetails::MempoolFull { .. }
            | LtsTransactionSubmitErrorDetails::PriorityThresholdNotMet { .. } => true,
            LtsTransactionSubmitErrorDetails::Rejected(details) => {
                !details.is_payload_rejection_permanent
            }
            LtsTransactionSubmitErrorDetails::IntentAlreadyCommitted { .. } => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StreamTransactionsErrorDetails {
    #[serde(alias = "RequestedStateVersionOutOfBoundsErrorDetails")]
    RequestedStateVersionOutOfBounds { max_ledger_state_version: i64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StreamProofsErrorDetails {
    #[serde(alias = "StreamProofsErrorDetailsRequestedStateVersionOutOfBounds")]
    RequestedStateVersionOutOfBounds { max_ledger_state_version: i64 },
    #[serde(alias = "StreamProofsErrorDetailsRequestedEpochOutOfBounds")]
    RequestedEpochOutOfBounds { max_ledger_epoch: i64 },
}
