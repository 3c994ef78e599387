use crate::core_api_client::CoreApiClient;
use crate::error::core_api_client::CoreApiClientError;

use models::state::{
    StateAccessControllerRequest, StateAccessControllerResponse, StateAccountRequest,
    StateAccountResponse, StateComponentRequest, StateComponentResponse,
    StateConsensusManagerRequest, StateConsensusManagerResponse, StateNonFungibleRequest,
    StateNonFungibleResponse, StatePackageRequest, StatePackageResponse, StateResourceRequest,
    StateResourceResponse, StateValidatorRequest, StateValidatorResponse,
};

const ACCOUNT_ENDPOINT: &str = "state/account";
const COMPONENT_ENDPOINT: &str = "state/component";
const RESOURCE_ENDPOINT: &str = "state/resource";
const VALIDATOR_ENDPOINT: &str = "state/validator";
const ACCESS_CONTROLLER_ENDPOINT: &str = "state/access-controller";
const CONSENSUS_MANAGER_ENDPOINT: &str = "state/consensus-manager";
const PACKAGE_ENDPOINT: &str = "state/package";
const NON_FUNGIBLE_ENDPOINT: &str = "state/non-fungible";

impl CoreApiClient {
    pub async fn state_account(
        &self,
        request: &StateAccountRequest,
    ) -> Result<StateAccountResponse, CoreApiClientError> {
        self.post(ACCOUNT_ENDPOINT, request).await
    }

    pub async fn state_component(
        &self,
        request: &StateComponentRequest,
    ) -> Result<StateComponentResponse, CoreApiClientError> {
        self.post(COMPONENT_ENDPOINT, request).await
    }

    pub async fn state_resource(
        &self,
        request: &StateResourceRequest,
    ) -> Result<StateResourceResponse, CoreApiClientError> {
        self.post(RESOURCE_ENDPOINT, request).await
    }

    pub async fn state_validator(
        &self,
        request: &StateValidatorRequest,
    ) -> Result<StateValidatorResponse, CoreApiClientError> {
        self.post(VALIDATOR_ENDPOINT, request).await
    }

    pub async fn state_access_controller(
        &self,
        request: &StateAccessControllerRequest,
    ) -> Result<StateAccessControllerResponse, CoreApiClientError> {
        self.post(ACCESS_CONTROLLER_ENDPOINT, request).await
    }

    pub async fn state_consensus_manager(
        &self,
        request: &StateConsensusManagerRequest,
    ) -> Result<StateConsensusManagerResponse, CoreApiClientError> {
        self.post(CONSENSUS_MANAGER_ENDPOINT, request).await
    }

    pub async fn state_package(
        &self,
        request: &StatePackageRequest,
    ) -> Result<StatePackageResponse, CoreApiClientError> {
        self.post(PACKAGE_ENDPOINT, request).await
    }

    pub async fn state_non_fungible(
        &self,
        request: &StateNonFungibleRequest,
    ) -> Result<StateNonFungibleResponse, CoreApiClientError> {
        self.post(NON_FUNGIBLE_ENDPOINT, request).await
    }
}
