use common::ErrorLocation;

use std::panic::Location;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ModelError {
    #[error("Validation Error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Json Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },
}

impl From<serde_json::Error> for ModelError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        ModelError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl ModelError {
    #[track_caller]
    pub(crate) fn required(field: &str) -> Self {
        ModelError::Validation {
            message: format!("{field} is required"),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn empty(field: &str) -> Self {
        ModelError::Validation {
            message: format!("{field} cannot be empty"),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
