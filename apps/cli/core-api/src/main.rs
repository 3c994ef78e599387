use core_api_cli::Cli;
use core_api_cli::commands::run;

use std::process::ExitCode;

use clap::Parser;
use log::{Level, error, log_enabled};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Logger may not be up if its own initialization failed
            if log_enabled!(Level::Error) {
                error!("{e}");
            } else {
                eprintln!("{e}");
            }
            ExitCode::FAILURE
        }
    }
}
