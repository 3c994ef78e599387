//! Where a substate's schema lives, so its payload can be decoded.

use crate::type_info::FullyScopedTypeId;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SystemFieldKind {
    TypeInfo,
    VmBoot,
    SystemBoot,
    KernelBoot,
    TransactionValidationConfiguration,
    ProtocolUpdateStatusSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ObjectSubstateTypeReference {
    #[serde(alias = "PackageObjectSubstateTypeReference")]
    Package { full_type_id: FullyScopedTypeId },
    #[serde(alias = "ObjectInstanceTypeReference")]
    ObjectInstance {
        generic_index: i32,
        #[serde(skip_serializing_if = "Option::is_none")]
        resolved_full_type_id: Option<FullyScopedTypeId>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValueSchemaPair {
    pub key_schema: ObjectSubstateTypeReference,
    pub value_schema: ObjectSubstateTypeReference,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SubstateSystemStructure {
    #[serde(alias = "SystemFieldStructure")]
    SystemField { field_kind: SystemFieldKind },
    #[serde(alias = "SystemSchemaStructure")]
    SystemSchema {},
    #[serde(alias = "KeyValueStoreEntryStructure")]
    KeyValueStoreEntry {
        key_full_type_id: FullyScopedTypeId,
        value_full_type_id: FullyScopedTypeId,
    },
    #[serde(alias = "ObjectFieldStructure")]
    ObjectField {
        value_schema: ObjectSubstateTypeReference,
    },
    #[serde(alias = "ObjectKeyValuePartitionEntryStructure")]
    ObjectKeyValuePartitionEntry(KeyValueSchemaPair),
    #[serde(alias = "ObjectIndexPartitionEntryStructure")]
    ObjectIndexPartitionEntry(KeyValueSchemaPair),
    #[serde(alias = "ObjectSortedIndexPartitionEntryStructure")]
    ObjectSortedIndexPartitionEntry(KeyValueSchemaPair),
}

impl SubstateSystemStructure {
    /// Whether the substate belongs to the system layer rather than a blueprint.
    pub fn is_system(&self) -> bool {
        matches!(
            self,
            SubstateSystemStructure::SystemField { .. } | SubstateSystemStructure::SystemSchema {}
        )
    }
}
