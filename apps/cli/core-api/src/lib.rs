//! `core-api` command-line client.
//!
//! Thin wiring over `core-api-client`: argument parsing, config loading,
//! logging and JSON output.

pub mod args;
pub mod commands;
pub mod error;
pub mod logger;

#[cfg(test)]
mod tests;

pub use args::{Cli, Command};
pub use error::CliError;
