pub mod config;
pub mod core_api_client;
pub mod stream;

pub use config::ConfigError;
pub use core_api_client::CoreApiClientError;
pub use stream::StreamError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Client(#[from] CoreApiClientError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Stream(#[from] StreamError),
}
