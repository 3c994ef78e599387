use crate::error::model_error::ModelError;
use crate::stream::TransactionFormatOptions;
use crate::transaction::{ParseMode, ResponseMode, TransactionParseRequest, ValidationMode};

use common::ErrorLocation;

use std::panic::Location;

/// Builder for validated `TransactionParseRequest`s.
#[derive(Debug, Default)]
pub struct TransactionParseRequestBuilder {
    network: Option<String>,
    payload_hex: Option<String>,
    parse_mode: Option<ParseMode>,
    validation_mode: Option<ValidationMode>,
    response_mode: Option<ResponseMode>,
    transaction_format_options: Option<TransactionFormatOptions>,
}

impl TransactionParseRequestBuilder {
    pub fn with_network(mut self, network: impl Into<String>) -> Self {
        self.network = Some(network.into());
        self
    }

    pub fn with_payload_hex(mut self, payload_hex: impl Into<String>) -> Self {
        self.payload_hex = Some(payload_hex.into());
        self
    }

    pub fn with_parse_mode(mut self, parse_mode: ParseMode) -> Self {
        self.parse_mode = Some(parse_mode);
        self
    }

    pub fn with_validation_mode(mut self, validation_mode: ValidationMode) -> Self {
        self.validation_mode = Some(validation_mode);
        self
    }

    pub fn with_response_mode(mut self, response_mode: ResponseMode) -> Self {
        self.response_mode = Some(response_mode);
        self
    }

    pub fn with_transaction_format_options(mut self, options: TransactionFormatOptions) -> Self {
        self.transaction_format_options = Some(options);
        self
    }

    #[track_caller]
    pub fn build(self) -> Result<TransactionParseRequest, ModelError> {
        let network = self.network.ok_or_else(|| ModelError::required("Network"))?;
        if network.is_empty() {
            return Err(ModelError::empty("Network"));
        }

        let payload_hex = self
            .payload_hex
            .ok_or_else(|| ModelError::required("Payload hex"))?;
        if payload_hex.is_empty() {
            return Err(ModelError::empty("Payload hex"));
        }

        if payload_hex.len() % 2 != 0 || !payload_hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ModelError::Validation {
                message: String::from("Payload hex must be an even-length hex string"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(TransactionParseRequest {
            network,
            payload_hex,
            parse_mode: self.parse_mode,
            validation_mode: self.validation_mode,
            response_mode: self.response_mode,
            transaction_format_options: self.transaction_format_options,
        })
    }
}
