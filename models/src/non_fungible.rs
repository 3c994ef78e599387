use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NonFungibleIdType {
    String,
    Integer,
    Bytes,
    #[serde(rename = "RUID")]
    Ruid,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NonFungibleLocalId {
    /// Canonical string form, e.g. `<ticket_1>`, `#42#`, `[deadbeef]`, `{...}`.
    pub simple_rep: String,
    pub id_type: NonFungibleIdType,
    pub sbor_hex: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NonFungibleGlobalId {
    pub resource_address: String,
    pub local_id: NonFungibleLocalId,
}

/// Balance of a single resource held by a vault or account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "resource_type")]
pub enum ResourceAmount {
    #[serde(alias = "FungibleResourceAmount")]
    Fungible {
        resource_address: String,
        amount: String,
    },
    #[serde(alias = "NonFungibleResourceAmount")]
    NonFungible {
        resource_address: String,
        amount: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        non_fungible_ids: Option<Vec<NonFungibleLocalId>>,
    },
}

impl ResourceAmount {
    pub fn resource_address(&self) -> &str {
        match self {
            ResourceAmount::Fungible {
                resource_address, ..
            }
            | ResourceAmount::NonFungible {
                resource_address, ..
            } => resource_address,
        }
    }

    /// Decimal amount as a string, exactly as the node rendered it.
    pub fn amount(&self) -> &str {
        match self {
            ResourceAmount::Fungible { amount, .. } | ResourceAmount::NonFungible { amount, .. } => {
                amount
            }
        }
    }
}
