use crate::core_api_client::CoreApiClient;
use crate::error::core_api_client::CoreApiClientError;

use models::stream::{
    StreamProofsRequest, StreamProofsResponse, StreamTransactionsRequest,
    StreamTransactionsResponse,
};

const TRANSACTIONS_ENDPOINT: &str = "stream/transactions";
const PROOFS_ENDPOINT: &str = "stream/proofs";

impl CoreApiClient {
    /// Committed transactions starting at `from_state_version`.
    ///
    /// Asking beyond the ledger tip fails with a `StreamTransactions` error response;
    /// [`crate::stream::TransactionStreamReader`] treats that as an empty batch.
    pub async fn stream_transactions(
        &self,
        request: &StreamTransactionsRequest,
    ) -> Result<StreamTransactionsResponse, CoreApiClientError> {
        self.post(TRANSACTIONS_ENDPOINT, request).await
    }

    pub async fn stream_proofs(
        &self,
        request: &StreamProofsRequest,
    ) -> Result<StreamProofsResponse, CoreApiClientError> {
        self.post(PROOFS_ENDPOINT, request).await
    }
}
