use crate::error::core_api_client::CoreApiClientError;

use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum StreamError {
    #[error("Stream Client Error: {source} {location}")]
    Client {
        #[source]
        source: CoreApiClientError,
        location: ErrorLocation,
    },

    /// The node's ledger does not continue from the state the reader last saw.
    #[error(
        "Inconsistent Ledger Error: at state version {state_version} expected {expected}, node reported {actual} {location}"
    )]
    InconsistentLedger {
        state_version: i64,
        expected: String,
        actual: String,
        location: ErrorLocation,
    },

    #[error("Stream Request Error: {message} {location}")]
    InvalidRequest {
        message: String,
        location: ErrorLocation,
    },
}

impl From<CoreApiClientError> for StreamError {
    #[track_caller]
    fn from(source: CoreApiClientError) -> Self {
        StreamError::Client {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<models::ModelError> for StreamError {
    #[track_caller]
    fn from(error: models::ModelError) -> Self {
        StreamError::InvalidRequest {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
