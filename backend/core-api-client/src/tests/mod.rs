mod config;
mod core_api_client;
mod health;
mod stream;
