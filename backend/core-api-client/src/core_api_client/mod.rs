pub mod lts;
pub mod mempool;
pub mod state;
pub mod status;
pub mod stream;
pub mod transaction;

use crate::config::{CoreApiNodeConfig, RequestConfig};
use crate::error::CoreError;
use crate::error::core_api_client::CoreApiClientError;

use common::{ErrorLocation, HttpStatusCode, RedactedSecret};
use models::ErrorResponse;

use std::panic::Location;
use std::time::Duration;

use backoff::{ExponentialBackoff, backoff::Backoff};
use log::{debug, trace, warn};
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::time::sleep as TokioSleep;
use url::Url;

const HTTP_UNAUTHORIZED: u16 = 401;
const HTTP_FORBIDDEN: u16 = 403;

/// How failed calls are retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
}

impl RetryPolicy {
    /// Policy that fails on the first error.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::from(&RequestConfig::default())
        }
    }

    fn backoff(&self) -> ExponentialBackoff {
        ExponentialBackoff {
            current_interval: self.initial_delay,
            initial_interval: self.initial_delay,
            max_interval: self.max_delay,
            max_elapsed_time: None,
            ..Default::default()
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&RequestConfig::default())
    }
}

impl From<&RequestConfig> for RetryPolicy {
    fn from(config: &RequestConfig) -> Self {
        Self {
            max_retries: config.max_retries,
            initial_delay: config.initial_retry_delay,
            max_delay: config.max_retry_delay,
        }
    }
}

/// Outcome of a single HTTP exchange that did not produce a response body.
enum Attempt {
    Retryable(CoreApiClientError),
    Fatal(CoreApiClientError),
}

/// Typed client for one node's Core API.
#[derive(Clone)]
pub struct CoreApiClient {
    base_url: Url,
    client: Client,
    auth_token: Option<RedactedSecret>,
    retry: RetryPolicy,
}

impl CoreApiClient {
    /// Client with default timeout and retry policy.
    pub fn new(base_url_str: &str) -> Result<Self, CoreApiClientError> {
        Self::with_request_config(base_url_str, &RequestConfig::default())
    }

    pub fn with_request_config(
        base_url_str: &str,
        request: &RequestConfig,
    ) -> Result<Self, CoreApiClientError> {
        let base_url = normalize_base_url(base_url_str)?;
        let client = Client::builder().timeout(request.timeout).build()?;

        Ok(Self {
            base_url,
            client,
            auth_token: None,
            retry: RetryPolicy::from(request),
        })
    }

    /// Client for a configured node, resolving its auth token from the environment.
    pub fn from_node(
        node: &CoreApiNodeConfig,
        request: &RequestConfig,
    ) -> Result<Self, CoreError> {
        let mut client = Self::with_request_config(&node.core_api_address, request)?;
        if let Some(token) = node.auth_token()? {
            client = client.with_auth_token(token);
        }
        debug!("Created Core API client for node '{}' at {}", node.name, client.base_url);
        Ok(client)
    }

    pub fn with_auth_token(mut self, token: RedactedSecret) -> Self {
        self.auth_token = Some(token);
        self
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    fn prepare_request(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let mut request = request;
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token.expose());
        }
        request
    }

    /// POST `body` to `endpoint`, retrying transient failures.
    async fn post<Req, Resp>(&self, endpoint: &str, body: &Req) -> Result<Resp, CoreApiClientError>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let url = self.base_url.join(endpoint)?;
        let mut backoff = self.retry.backoff();
        let mut retries = 0;

        loop {
            trace!("POST {url}");
            let error = match self.send_once(&url, body).await {
                Ok(response) => return Ok(response),
                Err(Attempt::Fatal(error)) => return Err(error),
                Err(Attempt::Retryable(error)) => error,
            };

            if retries >= self.retry.max_retries {
                return Err(error);
            }
            let Some(delay) = backoff.next_backoff() else {
                return Err(error);
            };
            let delay = delay.min(self.retry.max_delay);
            retries += 1;

            warn!(
                "POST {endpoint} failed, retry {retries}/{} in {delay:?}: {error}",
                self.retry.max_retries
            );
            TokioSleep(delay).await;
        }
    }

    async fn send_once<Req, Resp>(&self, url: &Url, body: &Req) -> Result<Resp, Attempt>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let response = match self
            .prepare_request(self.client.post(url.clone()))
            .json(body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(error) => {
                let retryable = error.is_connect() || error.is_timeout();
                let error = CoreApiClientError::from(error);
                return Err(if retryable {
                    Attempt::Retryable(error)
                } else {
                    Attempt::Fatal(error)
                });
            }
        };

        let status = HttpStatusCode::from(response.status().as_u16());
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| Attempt::Fatal(CoreApiClientError::from(e)))?;
            let error = error_from_body(status, &body);
            return Err(if status.is_retryable() {
                Attempt::Retryable(error)
            } else {
                Attempt::Fatal(error)
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Attempt::Fatal(CoreApiClientError::from(e)))?;
        serde_json::from_slice(&bytes).map_err(|e| Attempt::Fatal(CoreApiClientError::from(e)))
    }
}

/// Ensure the base path ends with `/` so endpoint paths join beneath it.
pub fn normalize_base_url(base_url_str: &str) -> Result<Url, CoreApiClientError> {
    let mut base_url = Url::parse(base_url_str.trim())?;
    if !base_url.path().ends_with('/') {
        let path = format!("{}/", base_url.path());
        base_url.set_path(&path);
    }
    Ok(base_url)
}

/// Map a non-2xx body to the matching error variant.
#[track_caller]
pub(crate) fn error_from_body(status: HttpStatusCode, body: &str) -> CoreApiClientError {
    let location = ErrorLocation::from(Location::caller());

    if status.0 == HTTP_UNAUTHORIZED || status.0 == HTTP_FORBIDDEN {
        return CoreApiClientError::Auth {
            message: format!("HTTP {status} - {body}"),
            location,
        };
    }

    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(response) => CoreApiClientError::Api {
            status,
            response: Box::new(response),
            location,
        },
        Err(_) => CoreApiClientError::Server {
            status,
            message: body.to_string(),
            location,
        },
    }
}
