//! JSON rendering shared by every model.

use crate::error::model_error::ModelError;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Blanket JSON helpers for Core API models.
///
/// Implemented for anything that is both `Serialize` and `DeserializeOwned`,
/// so every request, response and nested type gets the same behaviour.
pub trait CoreApiModel: Serialize + DeserializeOwned {
    /// Pretty-printed JSON, the form used for display and logging.
    #[track_caller]
    fn to_json(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[track_caller]
    fn to_json_compact(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string(self)?)
    }

    #[track_caller]
    fn from_json(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<T> CoreApiModel for T where T: Serialize + DeserializeOwned {}
