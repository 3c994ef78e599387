use crate::ErrorLocation;

use thiserror::Error as ThisError;

/// Raised when code tries to move a secret somewhere it could leak.
#[derive(Debug, ThisError)]
pub enum SecretError {
    #[error("Secret Serialization Refused: {message} {location}")]
    SerializationRefused {
        message: String,
        location: ErrorLocation,
    },
}
