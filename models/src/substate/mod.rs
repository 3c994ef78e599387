//! Substates: the unit of state stored under an entity's partitions.
//!
//! Every substate JSON object carries `substate_type` and `is_locked`. Field
//! substates add a `value`, collection entries add a `key` and an optional
//! `value` (absent once the entry has been deleted).

pub mod values;

use values::*;

use crate::non_fungible::NonFungibleLocalId;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstateBody<V> {
    pub is_locked: bool,
    pub value: V,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyedSubstateBody<K, V> {
    pub is_locked: bool,
    pub key: K,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<V>,
}

/// A substate whose payload is carried as raw JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpaqueSubstate {
    pub is_locked: bool,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl OpaqueSubstate {
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

macro_rules! substates {
    (
        field { $( $field:ident($field_value:ty) = $field_alias:literal, )* }
        keyed { $( $keyed:ident($keyed_key:ty, $keyed_value:ty) = $keyed_alias:literal, )* }
        opaque { $( $opaque:ident = $opaque_alias:literal, )* }
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum SubstateType {
            $( $field, )*
            $( $keyed, )*
            $( $opaque, )*
        }

        impl SubstateType {
            pub const ALL: &'static [SubstateType] = &[
                $( SubstateType::$field, )*
                $( SubstateType::$keyed, )*
                $( SubstateType::$opaque, )*
            ];
        }

        /// A substate, discriminated by `substate_type`.
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(tag = "substate_type")]
        pub enum Substate {
            $(
                #[serde(alias = $field_alias)]
                $field(SubstateBody<$field_value>),
            )*
            $(
                #[serde(alias = $keyed_alias)]
                $keyed(KeyedSubstateBody<$keyed_key, $keyed_value>),
            )*
            $(
                #[serde(alias = $opaque_alias)]
                $opaque(OpaqueSubstate),
            )*
        }

        impl Substate {
            pub fn substate_type(&self) -> SubstateType {
                match self {
                    $( Substate::$field(_) => SubstateType::$field, )*
                    $( Substate::$keyed(_) => SubstateType::$keyed, )*
                    $( Substate::$opaque(_) => SubstateType::$opaque, )*
                }
            }

            pub fn is_locked(&self) -> bool {
                match self {
                    $( Substate::$field(body) => body.is_locked, )*
                    $( Substate::$keyed(body) => body.is_locked, )*
                    $( Substate::$opaque(body) => body.is_locked, )*
                }
            }
        }
    };
}

substates! {
    field {
        TypeInfoModuleFieldTypeInfo(TypeInfoValue) = "TypeInfoModuleFieldTypeInfoSubstate",
        RoleAssignmentModuleFieldOwnerRole(OwnerRoleValue) = "RoleAssignmentModuleFieldOwnerRoleSubstate",
        FungibleResourceManagerFieldDivisibility(DivisibilityValue) = "FungibleResourceManagerFieldDivisibilitySubstate",
        FungibleResourceManagerFieldTotalSupply(TotalSupplyValue) = "FungibleResourceManagerFieldTotalSupplySubstate",
        NonFungibleResourceManagerFieldIdType(NonFungibleIdTypeValue) = "NonFungibleResourceManagerFieldIdTypeSubstate",
        NonFungibleResourceManagerFieldTotalSupply(TotalSupplyValue) = "NonFungibleResourceManagerFieldTotalSupplySubstate",
        NonFungibleResourceManagerFieldMutableFields(MutableFieldsValue) = "NonFungibleResourceManagerFieldMutableFieldsSubstate",
        FungibleVaultFieldBalance(VaultBalanceValue) = "FungibleVaultFieldBalanceSubstate",
        NonFungibleVaultFieldBalance(VaultBalanceValue) = "NonFungibleVaultFieldBalanceSubstate",
        ConsensusManagerFieldConfig(ConsensusManagerConfigValue) = "ConsensusManagerFieldConfigSubstate",
        ConsensusManagerFieldState(ConsensusManagerStateValue) = "ConsensusManagerFieldStateSubstate",
        ConsensusManagerFieldCurrentValidatorSet(CurrentValidatorSetValue) = "ConsensusManagerFieldCurrentValidatorSetSubstate",
        ConsensusManagerFieldCurrentProposalStatistic(CurrentProposalStatisticValue) = "ConsensusManagerFieldCurrentProposalStatisticSubstate",
        ConsensusManagerFieldCurrentTimeRoundedToMinutes(CurrentTimeRoundedToMinutesValue) = "ConsensusManagerFieldCurrentTimeRoundedToMinutesSubstate",
        ConsensusManagerFieldCurrentTime(CurrentTimeValue) = "ConsensusManagerFieldCurrentTimeSubstate",
        ValidatorFieldState(ValidatorStateValue) = "ValidatorFieldStateSubstate",
        AccountFieldState(AccountStateValue) = "AccountFieldStateSubstate",
        AccessControllerFieldState(AccessControllerStateValue) = "AccessControllerFieldStateSubstate",
        GenericScryptoComponentFieldState(ComponentStateValue) = "GenericScryptoComponentFieldStateSubstate",
        TransactionTrackerFieldState(TransactionTrackerStateValue) = "TransactionTrackerFieldStateSubstate",
    }
    keyed {
        MetadataModuleEntry(MetadataEntryKey, MetadataEntryValue) = "MetadataModuleEntrySubstate",
        NonFungibleResourceManagerDataEntry(NonFungibleDataKey, NonFungibleDataValue) = "NonFungibleResourceManagerDataEntrySubstate",
        GenericKeyValueStoreEntry(KeyValueStoreEntryKey, KeyValueStoreEntryValue) = "GenericKeyValueStoreEntrySubstate",
        PackageBlueprintDefinitionEntry(BlueprintVersionKey, BlueprintDefinitionValue) = "PackageBlueprintDefinitionEntrySubstate",
        PackageBlueprintDependenciesEntry(BlueprintVersionKey, BlueprintDependenciesValue) = "PackageBlueprintDependenciesEntrySubstate",
        PackageBlueprintRoyaltyEntry(BlueprintVersionKey, BlueprintRoyaltyValue) = "PackageBlueprintRoyaltyEntrySubstate",
    }
    opaque {
        RoleAssignmentModuleRuleEntry = "RoleAssignmentModuleRuleEntrySubstate",
        RoleAssignmentModuleMutabilityEntry = "RoleAssignmentModuleMutabilityEntrySubstate",
        RoyaltyModuleFieldState = "RoyaltyModuleFieldStateSubstate",
        RoyaltyModuleMethodRoyaltyEntry = "RoyaltyModuleMethodRoyaltyEntrySubstate",
        PackageFieldRoyaltyAccumulator = "PackageFieldRoyaltyAccumulatorSubstate",
        PackageCodeVmTypeEntry = "PackageCodeVmTypeEntrySubstate",
        PackageCodeOriginalCodeEntry = "PackageCodeOriginalCodeEntrySubstate",
        PackageCodeInstrumentedCodeEntry = "PackageCodeInstrumentedCodeEntrySubstate",
        SchemaEntry = "SchemaEntrySubstate",
        PackageBlueprintAuthTemplateEntry = "PackageBlueprintAuthTemplateEntrySubstate",
        PackageFieldFunctionAccessRules = "PackageFieldFunctionAccessRulesSubstate",
        FungibleVaultFieldFrozenStatus = "FungibleVaultFieldFrozenStatusSubstate",
        NonFungibleVaultFieldFrozenStatus = "NonFungibleVaultFieldFrozenStatusSubstate",
        NonFungibleVaultContentsIndexEntry = "NonFungibleVaultContentsIndexEntrySubstate",
        ConsensusManagerFieldValidatorRewards = "ConsensusManagerFieldValidatorRewardsSubstate",
        ConsensusManagerRegisteredValidatorsByStakeIndexEntry = "ConsensusManagerRegisteredValidatorsByStakeIndexEntrySubstate",
        ValidatorFieldProtocolUpdateReadinessSignal = "ValidatorFieldProtocolUpdateReadinessSignalSubstate",
        AccountVaultEntry = "AccountVaultEntrySubstate",
        AccountResourcePreferenceEntry = "AccountResourcePreferenceEntrySubstate",
        AccountAuthorizedDepositorEntry = "AccountAuthorizedDepositorEntrySubstate",
        OneResourcePoolFieldState = "OneResourcePoolFieldStateSubstate",
        TwoResourcePoolFieldState = "TwoResourcePoolFieldStateSubstate",
        MultiResourcePoolFieldState = "MultiResourcePoolFieldStateSubstate",
        TransactionTrackerCollectionEntry = "TransactionTrackerCollectionEntrySubstate",
    }
}

impl Substate {
    /// Vault balance, for fungible and non-fungible vault balance substates.
    pub fn vault_balance(&self) -> Option<&str> {
        match self {
            Substate::FungibleVaultFieldBalance(body)
            | Substate::NonFungibleVaultFieldBalance(body) => Some(&body.value.amount),
            _ => None,
        }
    }

    /// Local id of a non-fungible data entry.
    pub fn non_fungible_local_id(&self) -> Option<&NonFungibleLocalId> {
        match self {
            Substate::NonFungibleResourceManagerDataEntry(body) => {
                Some(&body.key.non_fungible_local_id)
            }
            _ => None,
        }
    }
}
