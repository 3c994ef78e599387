//! Sequential reader over `stream/transactions`.
//!
//! The reader keeps a cursor (the next state version plus the identifiers of
//! the last committed transaction it handed out) and checks that each new
//! batch continues the ledger it has already seen.

use crate::config::StreamConfig;
use crate::core_api_client::CoreApiClient;
use crate::error::core_api_client::CoreApiClientError;
use crate::error::stream::StreamError;

use common::ErrorLocation;
use models::error_response::{DetailedErrorResponse, StreamTransactionsErrorDetails};
use models::stream::{
    CommittedTransaction, StreamTransactionsResponse, TransactionFormatOptions,
};
use models::{CommittedStateIdentifier, ErrorResponse, StreamTransactionsRequestBuilder};

use std::panic::Location;

use log::{debug, trace};

const GENESIS_STATE_VERSION: i64 = 1;

/// One page of committed transactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionBatch {
    pub from_state_version: i64,
    pub max_ledger_state_version: i64,
    pub previous_state_identifiers: Option<CommittedStateIdentifier>,
    pub transactions: Vec<CommittedTransaction>,
}

impl TransactionBatch {
    /// Batch returned when the node has nothing at or beyond `from_state_version` yet.
    pub fn empty(from_state_version: i64, max_ledger_state_version: i64) -> Self {
        Self {
            from_state_version,
            max_ledger_state_version,
            previous_state_identifiers: None,
            transactions: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn last_state_identifiers(&self) -> Option<&CommittedStateIdentifier> {
        self.transactions
            .last()
            .map(|transaction| &transaction.resultant_state_identifiers)
    }
}

impl From<StreamTransactionsResponse> for TransactionBatch {
    fn from(response: StreamTransactionsResponse) -> Self {
        Self {
            from_state_version: response.from_state_version,
            max_ledger_state_version: response.max_ledger_state_version,
            previous_state_identifiers: response.previous_state_identifiers,
            transactions: response.transactions,
        }
    }
}

pub struct TransactionStreamReader {
    client: CoreApiClient,
    network: String,
    max_batch_size: u32,
    transaction_format_options: Option<TransactionFormatOptions>,
    next_state_version: i64,
    last_state_identifiers: Option<CommittedStateIdentifier>,
}

impl TransactionStreamReader {
    /// Reader positioned at genesis.
    pub fn new(client: CoreApiClient, network: impl Into<String>, config: &StreamConfig) -> Self {
        Self {
            client,
            network: network.into(),
            max_batch_size: config.max_batch_size,
            transaction_format_options: None,
            next_state_version: GENESIS_STATE_VERSION,
            last_state_identifiers: None,
        }
    }

    /// Resume after a transaction already processed; the next batch must continue from it.
    pub fn resume_after(mut self, identifiers: CommittedStateIdentifier) -> Self {
        self.next_state_version = identifiers.state_version + 1;
        self.last_state_identifiers = Some(identifiers);
        self
    }

    /// Start at an arbitrary state version without a continuity check on the first batch.
    pub fn starting_at(mut self, from_state_version: i64) -> Self {
        self.next_state_version = from_state_version;
        self.last_state_identifiers = None;
        self
    }

    pub fn with_transaction_format_options(mut self, options: TransactionFormatOptions) -> Self {
        self.transaction_format_options = Some(options);
        self
    }

    pub fn next_state_version(&self) -> i64 {
        self.next_state_version
    }

    pub fn last_state_identifiers(&self) -> Option<&CommittedStateIdentifier> {
        self.last_state_identifiers.as_ref()
    }

    /// Fetch up to `count` transactions starting at `from_state_version`.
    ///
    /// `count` is capped at the configured `max_batch_size`. Asking beyond the
    /// ledger tip yields an empty batch.
    pub async fn fetch_batch(
        &self,
        from_state_version: i64,
        count: u32,
    ) -> Result<TransactionBatch, StreamError> {
        let limit = count.min(self.max_batch_size);
        let mut builder = StreamTransactionsRequestBuilder::default()
            .with_network(self.network.clone())
            .with_from_state_version(from_state_version)
            .with_limit(i32::try_from(limit).unwrap_or(i32::MAX));
        if let Some(options) = self.transaction_format_options {
            builder = builder.with_transaction_format_options(options);
        }
        let request = builder.build()?;

        trace!("Fetching up to {limit} transactions from state version {from_state_version}");
        match self.client.stream_transactions(&request).await {
            Ok(response) => Ok(TransactionBatch::from(response)),
            Err(error) => match requested_version_out_of_bounds(&error) {
                Some(max_ledger_state_version) => {
                    debug!(
                        "State version {from_state_version} is beyond the ledger tip {max_ledger_state_version}"
                    );
                    Ok(TransactionBatch::empty(
                        from_state_version,
                        max_ledger_state_version,
                    ))
                }
                None => Err(error.into()),
            },
        }
    }

    /// Fetch the next batch and advance the cursor past it.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::InconsistentLedger`] if the node's ledger does not
    /// continue from the last transaction this reader returned.
    pub async fn next_batch(&mut self) -> Result<TransactionBatch, StreamError> {
        let batch = self
            .fetch_batch(self.next_state_version, self.max_batch_size)
            .await?;

        if batch.is_empty() {
            return Ok(batch);
        }

        if let Some(expected) = &self.last_state_identifiers {
            check_continuity(expected, batch.previous_state_identifiers.as_ref())?;
        }

        if let Some(last) = batch.last_state_identifiers() {
            debug!(
                "Read {} transactions, ledger now at state version {} (tip {})",
                batch.len(),
                last.state_version,
                batch.max_ledger_state_version
            );
            self.next_state_version = last.state_version + 1;
            self.last_state_identifiers = Some(last.clone());
        }

        Ok(batch)
    }
}

/// Verify the node reports the same ledger state the reader last observed.
#[track_caller]
pub fn check_continuity(
    expected: &CommittedStateIdentifier,
    actual: Option<&CommittedStateIdentifier>,
) -> Result<(), StreamError> {
    if actual == Some(expected) {
        return Ok(());
    }

    Err(StreamError::InconsistentLedger {
        state_version: expected.state_version,
        expected: describe(expected),
        actual: actual.map(describe).unwrap_or_else(|| "none".to_string()),
        location: ErrorLocation::from(Location::caller()),
    })
}

fn describe(identifiers: &CommittedStateIdentifier) -> String {
    format!(
        "v{} (transaction tree {})",
        identifiers.state_version, identifiers.transaction_tree_hash
    )
}

fn requested_version_out_of_bounds(error: &CoreApiClientError) -> Option<i64> {
    match error.error_response() {
        Some(ErrorResponse::StreamTransactions(DetailedErrorResponse {
            details:
                Some(StreamTransactionsErrorDetails::RequestedStateVersionOutOfBounds {
                    max_ledger_state_version,
                }),
            ..
        })) => Some(*max_ledger_state_version),
        _ => None,
    }
}
