use crate::core_api_client::CoreApiClient;
use crate::error::core_api_client::CoreApiClientError;

use models::lts::{
    LtsStateAccountAllFungibleResourceBalancesRequest,
    LtsStateAccountAllFungibleResourceBalancesResponse, LtsStateAccountDepositBehaviourRequest,
    LtsStateAccountDepositBehaviourResponse, LtsStateAccountFungibleResourceBalanceRequest,
    LtsStateAccountFungibleResourceBalanceResponse, LtsStreamAccountTransactionOutcomesRequest,
    LtsStreamAccountTransactionOutcomesResponse, LtsStreamTransactionOutcomesRequest,
    LtsStreamTransactionOutcomesResponse, LtsTransactionConstructionRequest,
    LtsTransactionConstructionResponse, LtsTransactionStatusRequest,
    LtsTransactionStatusResponse, LtsTransactionSubmitRequest, LtsTransactionSubmitResponse,
};

const TRANSACTION_CONSTRUCTION_ENDPOINT: &str = "lts/transaction/construction";
const TRANSACTION_SUBMIT_ENDPOINT: &str = "lts/transaction/submit";
const TRANSACTION_STATUS_ENDPOINT: &str = "lts/transaction/status";
const ACCOUNT_FUNGIBLE_BALANCE_ENDPOINT: &str = "lts/state/account-fungible-resource-balance";
const ACCOUNT_ALL_FUNGIBLE_BALANCES_ENDPOINT: &str =
    "lts/state/account-all-fungible-resource-balances";
const ACCOUNT_DEPOSIT_BEHAVIOUR_ENDPOINT: &str = "lts/state/account-deposit-behaviour";
const TRANSACTION_OUTCOMES_ENDPOINT: &str = "lts/stream/transaction-outcomes";
const ACCOUNT_TRANSACTION_OUTCOMES_ENDPOINT: &str = "lts/stream/account-transaction-outcomes";

impl CoreApiClient {
    /// Current epoch and ledger clock, for building a transaction header.
    pub async fn lts_transaction_construction(
        &self,
        request: &LtsTransactionConstructionRequest,
    ) -> Result<LtsTransactionConstructionResponse, CoreApiClientError> {
        self.post(TRANSACTION_CONSTRUCTION_ENDPOINT, request).await
    }

    pub async fn lts_transaction_submit(
        &self,
        request: &LtsTransactionSubmitRequest,
    ) -> Result<LtsTransactionSubmitResponse, CoreApiClientError> {
        self.post(TRANSACTION_SUBMIT_ENDPOINT, request).await
    }

    pub async fn lts_transaction_status(
        &self,
        request: &LtsTransactionStatusRequest,
    ) -> Result<LtsTransactionStatusResponse, CoreApiClientError> {
        self.post(TRANSACTION_STATUS_ENDPOINT, request).await
    }

    pub async fn lts_state_account_fungible_resource_balance(
        &self,
        request: &LtsStateAccountFungibleResourceBalanceRequest,
    ) -> Result<LtsStateAccountFungibleResourceBalanceResponse, CoreApiClientError> {
        self.post(ACCOUNT_FUNGIBLE_BALANCE_ENDPOINT, request).await
    }

    pub async fn lts_state_account_all_fungible_resource_balances(
        &self,
        request: &LtsStateAccountAllFungibleResourceBalancesRequest,
    ) -> Result<LtsStateAccountAllFungibleResourceBalancesResponse, CoreApiClientError> {
        self.post(ACCOUNT_ALL_FUNGIBLE_BALANCES_ENDPOINT, request)
            .await
    }

    pub async fn lts_state_account_deposit_behaviour(
        &self,
        request: &LtsStateAccountDepositBehaviourRequest,
    ) -> Result<LtsStateAccountDepositBehaviourResponse, CoreApiClientError> {
        self.post(ACCOUNT_DEPOSIT_BEHAVIOUR_ENDPOINT, request).await
    }

    pub async fn lts_stream_transaction_outcomes(
        &self,
        request: &LtsStreamTransactionOutcomesRequest,
    ) -> Result<LtsStreamTransactionOutcomesResponse, CoreApiClientError> {
        self.post(TRANSACTION_OUTCOMES_ENDPOINT, request).await
    }

    pub async fn lts_stream_account_transaction_outcomes(
        &self,
        request: &LtsStreamAccountTransactionOutcomesRequest,
    ) -> Result<LtsStreamAccountTransactionOutcomesResponse, CoreApiClientError> {
        self.post(ACCOUNT_TRANSACTION_OUTCOMES_ENDPOINT, request)
            .await
    }
}
