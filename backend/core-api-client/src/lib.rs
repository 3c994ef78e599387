//! Async client for a Radix node's Core API.
//!
//! - [`CoreApiClient`]: one method per endpoint, retries transient failures
//! - [`config`]: node list, timeouts and retry policy loaded from TOML
//! - [`stream`]: walks committed transactions while checking ledger continuity
//! - [`health`]: classifies configured nodes by how far behind the ledger tip they are

pub mod config;
pub mod core_api_client;
pub mod error;
pub mod health;
pub mod stream;

#[cfg(test)]
mod tests;

pub use core_api_client::CoreApiClient;
pub use error::CoreError;

pub const CORE_API_DEFAULT_HOSTNAME: &str = "127.0.0.1";
pub const CORE_API_DEFAULT_PORT: u16 = 3333;
pub const CORE_API_DEFAULT_URL: &str = const_format::concatcp!(
    "http://",
    CORE_API_DEFAULT_HOSTNAME,
    ":",
    CORE_API_DEFAULT_PORT,
    "/core"
);
