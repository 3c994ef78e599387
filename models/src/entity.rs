use serde::{Deserialize, Serialize};

/// Kind of node in the engine's entity tree, as encoded in the address prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityType {
    GlobalPackage,
    GlobalConsensusManager,
    GlobalValidator,
    GlobalGenericComponent,
    GlobalAccount,
    GlobalIdentity,
    GlobalAccessController,
    GlobalVirtualSecp256k1Account,
    GlobalVirtualSecp256k1Identity,
    GlobalVirtualEd25519Account,
    GlobalVirtualEd25519Identity,
    GlobalFungibleResource,
    InternalFungibleVault,
    GlobalNonFungibleResource,
    InternalNonFungibleVault,
    InternalGenericComponent,
    InternalKeyValueStore,
    GlobalOneResourcePool,
    GlobalTwoResourcePool,
    GlobalMultiResourcePool,
    GlobalTransactionTracker,
    GlobalAccountLocker,
}

impl EntityType {
    pub const ALL: [EntityType; 22] = [
        EntityType::GlobalPackage,
        EntityType::GlobalConsensusManager,
        EntityType::GlobalValidator,
        EntityType::GlobalGenericComponent,
        EntityType::GlobalAccount,
        EntityType::GlobalIdentity,
        EntityType::GlobalAccessController,
        EntityType::GlobalVirtualSecp256k1Account,
        EntityType::GlobalVirtualSecp256k1Identity,
        EntityType::GlobalVirtualEd25519Account,
        EntityType::GlobalVirtualEd25519Identity,
        EntityType::GlobalFungibleResource,
        EntityType::InternalFungibleVault,
        EntityType::GlobalNonFungibleResource,
        EntityType::InternalNonFungibleVault,
        EntityType::InternalGenericComponent,
        EntityType::InternalKeyValueStore,
        EntityType::GlobalOneResourcePool,
        EntityType::GlobalTwoResourcePool,
        EntityType::GlobalMultiResourcePool,
        EntityType::GlobalTransactionTracker,
        EntityType::GlobalAccountLocker,
    ];

    /// Global entities are addressable from outside the engine; internal
    /// ones only exist as children of a global entity.
    pub fn is_global(&self) -> bool {
        !matches!(
            self,
            EntityType::InternalFungibleVault
                | EntityType::InternalNonFungibleVault
                | EntityType::InternalGenericComponent
                | EntityType::InternalKeyValueStore
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityReference {
    pub entity_type: EntityType,
    pub is_global: bool,
    /// Bech32m-encoded address of the entity.
    pub entity_address: String,
}

impl EntityReference {
    pub fn new(entity_type: EntityType, entity_address: impl Into<String>) -> Self {
        Self {
            entity_type,
            is_global: entity_type.is_global(),
            entity_address: entity_address.into(),
        }
    }
}
