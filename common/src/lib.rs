//! Shared building blocks for the Core API workspace.
//!
//! Everything here is small and dependency-light so that every other crate
//! (models, client, cli) can lean on it without pulling in the HTTP stack.
//!
//! ## Architecture
//!
//! - **common** (this crate): error locations, status classification, secrets
//! - **models**: Core API data transfer objects
//! - **core-api-client**: HTTP transport operating on models
//! - **core-api-cli**: command-line wiring

pub mod error;
pub mod http_status;
pub mod redacted_secret;

#[cfg(test)]
mod tests;

pub use error::error_location::ErrorLocation;
pub use error::secret_error::SecretError;
pub use http_status::HttpStatusCode;
pub use redacted_secret::RedactedSecret;
