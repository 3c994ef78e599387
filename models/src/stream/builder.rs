use crate::error::model_error::ModelError;
use crate::stream::{
    SborFormatOptions, StreamTransactionsRequest, SubstateFormatOptions, TransactionFormatOptions,
};

use common::ErrorLocation;

use std::panic::Location;

/// Largest page the node will serve for `stream/transactions`.
pub const MAX_STREAM_LIMIT: i32 = 10_000;

/// Builder for validated `StreamTransactionsRequest`s.
#[derive(Debug, Default)]
pub struct StreamTransactionsRequestBuilder {
    network: Option<String>,
    from_state_version: Option<i64>,
    limit: Option<i32>,
    sbor_format_options: Option<SborFormatOptions>,
    transaction_format_options: Option<TransactionFormatOptions>,
    substate_format_options: Option<SubstateFormatOptions>,
    include_proofs: Option<bool>,
}

impl StreamTransactionsRequestBuilder {
    pub fn with_network(mut self, network: impl Into<String>) -> Self {
        self.network = Some(network.into());
        self
    }

    pub fn with_from_state_version(mut self, from_state_version: i64) -> Self {
        self.from_state_version = Some(from_state_version);
        self
    }

    pub fn with_limit(mut self, limit: i32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_sbor_format_options(mut self, options: SborFormatOptions) -> Self {
        self.sbor_format_options = Some(options);
        self
    }

    pub fn with_transaction_format_options(mut self, options: TransactionFormatOptions) -> Self {
        self.transaction_format_options = Some(options);
        self
    }

    pub fn with_substate_format_options(mut self, options: SubstateFormatOptions) -> Self {
        self.substate_format_options = Some(options);
        self
    }

    pub fn with_include_proofs(mut self, include_proofs: bool) -> Self {
        self.include_proofs = Some(include_proofs);
        self
    }

    #[track_caller]
    pub fn build(self) -> Result<StreamTransactionsRequest, ModelError> {
        let network = self.network.ok_or_else(|| ModelError::required("Network"))?;
        if network.is_empty() {
            return Err(ModelError::empty("Network"));
        }

        let from_state_version = self
            .from_state_version
            .ok_or_else(|| ModelError::required("From state version"))?;
        if from_state_version < 1 {
            return Err(ModelError::Validation {
                message: format!("From state version must be at least 1, got {from_state_version}"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let limit = self.limit.ok_or_else(|| ModelError::required("Limit"))?;
        if !(1..=MAX_STREAM_LIMIT).contains(&limit) {
            return Err(ModelError::Validation {
                message: format!("Limit must be between 1 and {MAX_STREAM_LIMIT}, got {limit}"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(StreamTransactionsRequest {
            network,
            from_state_version,
            limit,
            sbor_format_options: self.sbor_format_options,
            transaction_format_options: self.transaction_format_options,
            substate_format_options: self.substate_format_options,
            include_proofs: self.include_proofs,
        })
    }
}
