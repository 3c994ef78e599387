use crate::crypto::PublicKey;
use crate::error::model_error::ModelError;
use crate::ledger::LedgerStateSelector;
use crate::transaction::{
    PreviewFlags, TransactionMessage, TransactionPreviewRequest, TransactionPreviewResponseOptions,
};

use common::ErrorLocation;

use std::panic::Location;

/// Builder for validated `TransactionPreviewRequest`s.
///
/// Network, manifest and nonce are required. Everything else falls back to the
/// node's defaults: no blobs, current epoch window, zero tip.
#[derive(Debug, Default)]
pub struct TransactionPreviewRequestBuilder {
    network: Option<String>,
    at_ledger_state: Option<LedgerStateSelector>,
    manifest: Option<String>,
    nonce: Option<i64>,
    blobs_hex: Vec<String>,
    start_epoch_inclusive: Option<i64>,
    end_epoch_exclusive: Option<i64>,
    notary_public_key: Option<PublicKey>,
    notary_is_signatory: Option<bool>,
    tip_percentage: i32,
    signer_public_keys: Vec<PublicKey>,
    message: Option<TransactionMessage>,
    options: Option<TransactionPreviewResponseOptions>,
    flags: PreviewFlags,
}

impl TransactionPreviewRequestBuilder {
    pub fn with_network(mut self, network: impl Into<String>) -> Self {
        self.network = Some(network.into());
        self
    }

    pub fn with_at_ledger_state(mut self, selector: LedgerStateSelector) -> Self {
        self.at_ledger_state = Some(selector);
        self
    }

    pub fn with_manifest(mut self, manifest: impl Into<String>) -> Self {
        self.manifest = Some(manifest.into());
        self
    }

    pub fn with_nonce(mut self, nonce: i64) -> Self {
        self.nonce = Some(nonce);
        self
    }

    pub fn with_blob_hex(mut self, blob_hex: impl Into<String>) -> Self {
        self.blobs_hex.push(blob_hex.into());
        self
    }

    pub fn with_epoch_range(mut self, start_inclusive: i64, end_exclusive: i64) -> Self {
        self.start_epoch_inclusive = Some(start_inclusive);
        self.end_epoch_exclusive = Some(end_exclusive);
        self
    }

    pub fn with_notary(mut self, public_key: PublicKey, is_signatory: bool) -> Self {
        self.notary_public_key = Some(public_key);
        self.notary_is_signatory = Some(is_signatory);
        self
    }

    pub fn with_tip_percentage(mut self, tip_percentage: i32) -> Self {
        self.tip_percentage = tip_percentage;
        self
    }

    pub fn with_signer(mut self, public_key: PublicKey) -> Self {
        self.signer_public_keys.push(public_key);
        self
    }

    pub fn with_message(mut self, message: TransactionMessage) -> Self {
        self.message = Some(message);
        self
    }

    pub fn with_options(mut self, options: TransactionPreviewResponseOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn with_flags(mut self, flags: PreviewFlags) -> Self {
        self.flags = flags;
        self
    }

    #[track_caller]
    pub fn build(self) -> Result<TransactionPreviewRequest, ModelError> {
        let network = self.network.ok_or_else(|| ModelError::required("Network"))?;
        if network.is_empty() {
            return Err(ModelError::empty("Network"));
        }

        let manifest = self
            .manifest
            .ok_or_else(|| ModelError::required("Manifest"))?;
        if manifest.trim().is_empty() {
            return Err(ModelError::empty("Manifest"));
        }

        let nonce = self.nonce.ok_or_else(|| ModelError::required("Nonce"))?;

        if !(0..=u16::MAX as i32).contains(&self.tip_percentage) {
            return Err(ModelError::Validation {
                message: format!("Tip percentage out of range: {}", self.tip_percentage),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if let Some(LedgerStateSelector::ByStateVersion { state_version }) = &self.at_ledger_state {
            if *state_version < 1 {
                return Err(ModelError::Validation {
                    message: format!("State version must be at least 1: {state_version}"),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        if let (Some(start), Some(end)) = (self.start_epoch_inclusive, self.end_epoch_exclusive) {
            if start >= end {
                return Err(ModelError::Validation {
                    message: format!("Empty epoch range: [{start}, {end})"),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        Ok(TransactionPreviewRequest {
            network,
            at_ledger_state: self.at_ledger_state,
            manifest,
            blobs_hex: (!self.blobs_hex.is_empty()).then_some(self.blobs_hex),
            start_epoch_inclusive: self.start_epoch_inclusive,
            end_epoch_exclusive: self.end_epoch_exclusive,
            notary_public_key: self.notary_public_key,
            notary_is_signatory: self.notary_is_signatory,
            tip_percentage: self.tip_percentage,
            nonce,
            signer_public_keys: self.signer_public_keys,
            message: self.message,
            options: self.options,
            flags: self.flags,
        })
    }
}
