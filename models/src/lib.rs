//! Data transfer objects for the Radix Core API.
//!
//! Every request and response body the node accepts or returns has a type here.
//! Polymorphic bodies are serde internally-tagged enums keyed by the same
//! discriminator property the API uses (`error_type`, `key_type`,
//! `substate_type`, `type`, ...). Discriminators accept the long schema name
//! (`BasicErrorResponse`) as well as the short value (`Basic`) on input and
//! always emit the short value.
//!
//! Request types that need more than a network name come with a builder that
//! validates required fields, see [`TransactionPreviewRequestBuilder`],
//! [`TransactionParseRequestBuilder`] and [`StreamTransactionsRequestBuilder`].

pub mod access_rule;
pub mod blueprint;
pub mod crypto;
pub mod entity;
pub mod error;
pub mod error_response;
pub mod json;
pub mod ledger;
pub mod lts;
pub mod mempool;
pub mod non_fungible;
pub mod sbor;
pub mod state;
pub mod status;
pub mod stream;
pub mod structure;
pub mod substate;
pub mod substate_key;
pub mod transaction;
pub mod type_info;

#[cfg(test)]
mod tests;

pub use error::model_error::ModelError;
pub use json::CoreApiModel;

pub use access_rule::{AccessRule, AccessRuleNode, OwnerRole, ProofRule, Requirement};
pub use crypto::{PublicKey, Signature, SignatureWithPublicKey};
pub use entity::{EntityReference, EntityType};
pub use error_response::{
    ErrorResponse, ErrorResponseType, LtsTransactionSubmitErrorDetails,
    StreamProofsErrorDetails, StreamTransactionsErrorDetails, TransactionSubmitErrorDetails,
};
pub use ledger::{
    CommittedStateIdentifier, EpochRound, InstantMs, LedgerHashes, LedgerHeaderSummary,
    LedgerStateSelector, LedgerStateSummary,
};
pub use non_fungible::{NonFungibleGlobalId, NonFungibleIdType, NonFungibleLocalId, ResourceAmount};
pub use sbor::{DataStruct, SborData};
pub use status::{
    NetworkConfigurationResponse, NetworkStatusRequest, NetworkStatusResponse, ScenariosRequest,
    ScenariosResponse,
};
pub use stream::builder::StreamTransactionsRequestBuilder;
pub use stream::{
    CommittedTransaction, LedgerTransaction, StreamProofsRequest, StreamProofsResponse,
    StreamTransactionsRequest, StreamTransactionsResponse,
};
pub use structure::SubstateSystemStructure;
pub use substate::{Substate, SubstateType};
pub use substate_key::{PartitionKind, SubstateKey};
pub use transaction::parse_builder::TransactionParseRequestBuilder;
pub use transaction::preview_builder::TransactionPreviewRequestBuilder;
pub use type_info::TypeInfoDetails;
