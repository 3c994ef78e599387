use crate::core_api_client::CoreApiClient;
use crate::error::core_api_client::CoreApiClientError;

use models::{
    NetworkConfigurationResponse, NetworkStatusRequest, NetworkStatusResponse, ScenariosRequest,
    ScenariosResponse,
};

use serde_json::json;

const NETWORK_CONFIGURATION_ENDPOINT: &str = "status/network-configuration";
const NETWORK_STATUS_ENDPOINT: &str = "status/network-status";
const SCENARIOS_ENDPOINT: &str = "status/scenarios";

impl CoreApiClient {
    /// Network identity and well-known addresses. Takes no parameters.
    pub async fn network_configuration(
        &self,
    ) -> Result<NetworkConfigurationResponse, CoreApiClientError> {
        self.post(NETWORK_CONFIGURATION_ENDPOINT, &json!({})).await
    }

    pub async fn network_status(
        &self,
        request: &NetworkStatusRequest,
    ) -> Result<NetworkStatusResponse, CoreApiClientError> {
        self.post(NETWORK_STATUS_ENDPOINT, request).await
    }

    pub async fn scenarios(
        &self,
        request: &ScenariosRequest,
    ) -> Result<ScenariosResponse, CoreApiClientError> {
        self.post(SCENARIOS_ENDPOINT, request).await
    }
}
