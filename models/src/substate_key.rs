//! Addressing of substates within an entity's partitions.

use crate::entity::EntityType;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubstateKeyType {
    Field,
    Map,
    Sorted,
}

/// Key of a substate within a partition, discriminated by `key_type`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "key_type")]
pub enum SubstateKey {
    #[serde(alias = "FieldSubstateKey")]
    Field {
        /// Hex-encoded key bytes as sorted in the node's database.
        db_sort_key_hex: String,
        id: i32,
    },
    #[serde(alias = "MapSubstateKey")]
    Map {
        db_sort_key_hex: String,
        key_hex: String,
    },
    #[serde(alias = "SortedSubstateKey")]
    Sorted {
        db_sort_key_hex: String,
        sort_prefix_hex: String,
        key_hex: String,
    },
}

impl SubstateKey {
    pub fn key_type(&self) -> SubstateKeyType {
        match self {
            SubstateKey::Field { .. } => SubstateKeyType::Field,
            SubstateKey::Map { .. } => SubstateKeyType::Map,
            SubstateKey::Sorted { .. } => SubstateKeyType::Sorted,
        }
    }

    pub fn db_sort_key_hex(&self) -> &str {
        match self {
            SubstateKey::Field {
                db_sort_key_hex, ..
            }
            | SubstateKey::Map {
                db_sort_key_hex, ..
            }
            | SubstateKey::Sorted {
                db_sort_key_hex, ..
            } => db_sort_key_hex,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartitionKind {
    Field,
    KeyValue,
    Index,
    SortedIndex,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartitionId {
    pub entity_type: EntityType,
    pub entity_address: String,
    pub partition_kind: PartitionKind,
    pub partition_number: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubstateId {
    pub entity_type: EntityType,
    pub entity_address: String,
    pub partition_kind: PartitionKind,
    pub partition_number: i32,
    pub substate_type: crate::substate::SubstateType,
    pub substate_key: SubstateKey,
}

impl SubstateId {
    pub fn partition(&self) -> PartitionId {
        PartitionId {
            entity_type: self.entity_type,
            entity_address: self.entity_address.clone(),
            partition_kind: self.partition_kind,
            partition_number: self.partition_number,
        }
    }
}
