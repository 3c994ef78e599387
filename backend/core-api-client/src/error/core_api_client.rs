use common::{ErrorLocation, HttpStatusCode};
use models::ErrorResponse;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum CoreApiClientError {
    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    /// The node answered with a structured `ErrorResponse`.
    #[error("API Error: HTTP {status} - {} {location}", response.message())]
    Api {
        status: HttpStatusCode,
        response: Box<ErrorResponse>,
        location: ErrorLocation,
    },

    #[error("Server Error: HTTP {status} - {message} {location}")]
    Server {
        status: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },

    #[error("Auth Error: {message} {location}")]
    Auth {
        message: String,
        location: ErrorLocation,
    },
}

impl CoreApiClientError {
    /// HTTP status of the failed call, if the node answered at all.
    pub fn status(&self) -> Option<HttpStatusCode> {
        match self {
            CoreApiClientError::Api { status, .. } | CoreApiClientError::Server { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    pub fn error_response(&self) -> Option<&ErrorResponse> {
        match self {
            CoreApiClientError::Api { response, .. } => Some(response),
            _ => None,
        }
    }
}

impl From<url::ParseError> for CoreApiClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        CoreApiClientError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for CoreApiClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        CoreApiClientError::Http {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for CoreApiClientError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        CoreApiClientError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
