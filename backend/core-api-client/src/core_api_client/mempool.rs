use crate::core_api_client::CoreApiClient;
use crate::error::core_api_client::CoreApiClientError;

use models::mempool::{
    MempoolListRequest, MempoolListResponse, MempoolTransactionRequest, MempoolTransactionResponse,
};

const LIST_ENDPOINT: &str = "mempool/list";
const TRANSACTION_ENDPOINT: &str = "mempool/transaction";

impl CoreApiClient {
    pub async fn mempool_list(
        &self,
        request: &MempoolListRequest,
    ) -> Result<MempoolListResponse, CoreApiClientError> {
        self.post(LIST_ENDPOINT, request).await
    }

    pub async fn mempool_transaction(
        &self,
        request: &MempoolTransactionRequest,
    ) -> Result<MempoolTransactionResponse, CoreApiClientError> {
        self.post(TRANSACTION_ENDPOINT, request).await
    }
}
