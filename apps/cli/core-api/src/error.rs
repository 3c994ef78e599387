use common::ErrorLocation;
use core_api_client::CoreError;
use core_api_client::error::{ConfigError, CoreApiClientError, StreamError};

use std::panic::Location;

use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the `core-api` binary.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum CliError {
    /// Bad arguments or a node that is not configured
    #[error("CLI Error: {message} {location}")]
    Cli {
        message: String,
        location: ErrorLocation,
    },

    /// Error from core-api-client (config, HTTP, stream)
    #[error("Core Error: {message} {location}")]
    Core {
        message: String,
        location: ErrorLocation,
    },

    #[error("Logger Error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Output Error: {message} {location}")]
    Output {
        message: String,
        location: ErrorLocation,
    },
}

impl From<CoreError> for CliError {
    #[track_caller]
    fn from(error: CoreError) -> Self {
        CliError::Core {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreApiClientError> for CliError {
    #[track_caller]
    fn from(error: CoreApiClientError) -> Self {
        CliError::from(CoreError::from(error))
    }
}

impl From<ConfigError> for CliError {
    #[track_caller]
    fn from(error: ConfigError) -> Self {
        CliError::from(CoreError::from(error))
    }
}

impl From<StreamError> for CliError {
    #[track_caller]
    fn from(error: StreamError) -> Self {
        CliError::from(CoreError::from(error))
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        CliError::Output {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
