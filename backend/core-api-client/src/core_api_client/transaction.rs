use crate::core_api_client::CoreApiClient;
use crate::error::core_api_client::CoreApiClientError;

use models::transaction::{
    TransactionCallPreviewRequest, TransactionCallPreviewResponse, TransactionParseRequest,
    TransactionParseResponse, TransactionPreviewRequest, TransactionPreviewResponse,
    TransactionReceiptRequest, TransactionReceiptResponse, TransactionStatusRequest,
    TransactionStatusResponse, TransactionSubmitRequest, TransactionSubmitResponse,
};

const SUBMIT_ENDPOINT: &str = "transaction/submit";
const STATUS_ENDPOINT: &str = "transaction/status";
const RECEIPT_ENDPOINT: &str = "transaction/receipt";
const PREVIEW_ENDPOINT: &str = "transaction/preview";
const PARSE_ENDPOINT: &str = "transaction/parse";
const CALL_PREVIEW_ENDPOINT: &str = "transaction/call-preview";

impl CoreApiClient {
    /// Submit a notarized transaction to the node's mempool.
    ///
    /// Rejections come back as [`CoreApiClientError::Api`] carrying
    /// `TransactionSubmitErrorDetails`.
    pub async fn transaction_submit(
        &self,
        request: &TransactionSubmitRequest,
    ) -> Result<TransactionSubmitResponse, CoreApiClientError> {
        self.post(SUBMIT_ENDPOINT, request).await
    }

    pub async fn transaction_status(
        &self,
        request: &TransactionStatusRequest,
    ) -> Result<TransactionStatusResponse, CoreApiClientError> {
        self.post(STATUS_ENDPOINT, request).await
    }

    pub async fn transaction_receipt(
        &self,
        request: &TransactionReceiptRequest,
    ) -> Result<TransactionReceiptResponse, CoreApiClientError> {
        self.post(RECEIPT_ENDPOINT, request).await
    }

    pub async fn transaction_preview(
        &self,
        request: &TransactionPreviewRequest,
    ) -> Result<TransactionPreviewResponse, CoreApiClientError> {
        self.post(PREVIEW_ENDPOINT, request).await
    }

    pub async fn transaction_parse(
        &self,
        request: &TransactionParseRequest,
    ) -> Result<TransactionParseResponse, CoreApiClientError> {
        self.post(PARSE_ENDPOINT, request).await
    }

    /// Run a read-only method or function call against current state.
    pub async fn transaction_call_preview(
        &self,
        request: &TransactionCallPreviewRequest,
    ) -> Result<TransactionCallPreviewResponse, CoreApiClientError> {
        self.post(CALL_PREVIEW_ENDPOINT, request).await
    }
}
