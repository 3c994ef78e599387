use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(
    name = "core-api",
    version,
    about = "Query and submit to a Radix node through its Core API."
)]
pub struct Cli {
    /// Config file [default: `<config dir>/core-api/core-api.toml`]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Name of the configured node to talk to [default: first enabled node]
    #[arg(short, long, global = true)]
    pub node: Option<String>,

    /// Also write logs to `core-api.log` in this directory
    #[arg(long, global = true, env = "CORE_API_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the node's network configuration
    NetworkConfiguration,

    /// Show the node's current ledger position
    NetworkStatus,

    /// Check every enabled node against the ledger tip
    Health,

    /// Read committed transactions
    Stream {
        /// First state version to read
        #[arg(long, default_value_t = 1)]
        from: i64,

        /// Maximum number of transactions
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },

    /// Look up the status of a transaction intent
    TransactionStatus {
        /// Intent hash, hex or bech32m
        #[arg(long)]
        intent_hash: String,
    },

    /// Submit a notarized transaction
    Submit {
        /// Notarized transaction payload as hex
        #[arg(long)]
        hex: String,
    },
}
