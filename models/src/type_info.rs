//! Type information attached to every node: which blueprint an object was
//! instantiated from, or the key/value types of a key-value store.

use crate::sbor::SborData;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalTypeId {
    /// `WellKnown` or `SchemaLocal`.
    pub kind: String,
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_sbor: Option<SborData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopedTypeId {
    pub schema_hash: String,
    pub local_type_id: LocalTypeId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullyScopedTypeId {
    pub entity_address: String,
    pub schema_hash: String,
    pub local_type_id: LocalTypeId,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlueprintTypeIdentifier {
    pub package_address: String,
    pub blueprint_name: String,
    pub type_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GenericSubstitution {
    #[serde(alias = "LocalGenericSubstitution")]
    Local { scoped_type_id: ScopedTypeId },
    #[serde(alias = "RemoteGenericSubstitution")]
    Remote {
        blueprint_type_identifier: BlueprintTypeIdentifier,
        #[serde(skip_serializing_if = "Option::is_none")]
        resolved_full_type_id: Option<FullyScopedTypeId>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlueprintInfo {
    pub package_address: String,
    pub blueprint_name: String,
    pub blueprint_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outer_object: Option<String>,
    pub features: Vec<String>,
    pub generic_substitutions: Vec<GenericSubstitution>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttachedModuleId {
    Metadata,
    Royalty,
    RoleAssignment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectModuleId {
    Main,
    Metadata,
    Royalty,
    RoleAssignment,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleVersion {
    pub module: AttachedModuleId,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectTypeInfoDetails {
    pub module_versions: Vec<ModuleVersion>,
    pub blueprint_info: BlueprintInfo,
    pub global: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValueStoreInfo {
    pub key_generic_substitution: GenericSubstitution,
    pub value_generic_substitution: GenericSubstitution,
    pub allow_ownership: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValueStoreTypeInfoDetails {
    pub key_value_store_info: KeyValueStoreInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TypeInfoDetails {
    #[serde(alias = "ObjectTypeInfoDetails")]
    Object(ObjectTypeInfoDetails),
    #[serde(alias = "KeyValueStoreTypeInfoDetails")]
    KeyValueStore(KeyValueStoreTypeInfoDetails),
}

impl TypeInfoDetails {
    pub fn blueprint_info(&self) -> Option<&BlueprintInfo> {
        match self {
            TypeInfoDetails::Object(details) => Some(&details.blueprint_info),
            TypeInfoDetails::KeyValueStore(_) => None,
        }
    }
}
