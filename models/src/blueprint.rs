//! Package blueprint definitions and royalty configuration.
//!
//! Schema-heavy parts of the interface (state layout, function signatures,
//! event and type tables) are kept as raw JSON; they are only ever forwarded
//! to schema tooling rather than inspected by clients.

use crate::type_info::ObjectModuleId;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlueprintDefinition {
    pub interface: BlueprintInterface,
    pub function_exports: BTreeMap<String, PackageExport>,
    pub hook_exports: Vec<HookExport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlueprintInterface {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outer_blueprint: Option<String>,
    pub generic_type_parameters: Vec<Value>,
    pub is_transient: bool,
    pub features: Vec<String>,
    pub state: Value,
    pub functions: BTreeMap<String, Value>,
    pub events: BTreeMap<String, Value>,
    pub types: BTreeMap<String, Value>,
}

impl BlueprintInterface {
    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackageExport {
    pub code_hash: String,
    pub export_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectHook {
    OnVirtualize,
    OnMove,
    OnDrop,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HookExport {
    pub object_module_id: ObjectModuleId,
    pub hook: ObjectHook,
    pub export: PackageExport,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlueprintDependencies {
    pub dependencies: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoyaltyAmountUnit {
    #[serde(rename = "XRD")]
    Xrd,
    #[serde(rename = "USD")]
    Usd,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoyaltyAmount {
    /// Decimal string.
    pub amount: String,
    pub unit: RoyaltyAmountUnit,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlueprintMethodRoyalty {
    pub method_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub royalty_amount: Option<RoyaltyAmount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlueprintRoyaltyConfig {
    pub is_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method_rules: Option<Vec<BlueprintMethodRoyalty>>,
}
