use crate::entity::EntityReference;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An SBOR payload, returned as raw hex and/or programmatic JSON depending on
/// the request's `SborFormatOptions`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SborData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub programmatic_json: Option<Value>,
}

impl SborData {
    pub fn from_hex(hex: impl Into<String>) -> Self {
        Self {
            hex: Some(hex.into()),
            programmatic_json: None,
        }
    }
}

/// An SBOR struct along with the entities it owns and references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataStruct {
    pub struct_data: SborData,
    pub owned_entities: Vec<EntityReference>,
    pub referenced_entities: Vec<EntityReference>,
}
