//! nc - NutriChecker identity and push registration tool
//!
//! Drives the client's user-id store and push registration flow from a
//! workstation, for support and endpoint debugging.
//!
//! # Examples
//!
//! ```bash
//! # Print (and create if needed) the user id
//! nc user-id show
//!
//! # Register a token copied from a device
//! nc register --token "ExponentPushToken[xxxx]" --pretty
//!
//! # Re-send the token for the current user id
//! nc resync --token "ExponentPushToken[xxxx]"
//!
//! # Reproduce a data clear, then pair the new user id with the token
//! nc reset && nc resync --token "ExponentPushToken[xxxx]"
//! ```

mod cli;
mod commands;
mod error;
mod logger;


use crate::{cli::Cli, error::Result as CliErrorResult};

use nc_config::Config;
use nc_store::{KeyValueStore, SqliteKeyValueStore};

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::info;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    let pretty = cli.pretty;

    match run(cli).await {
        Ok(value) => {
            let output = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing output: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliErrorResult<Value> {
    let mut config = Config::load()?;
    if let Some(endpoint) = cli.endpoint {
        config.registration.endpoint_url = endpoint;
    }
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    info!("Starting nc v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let store: Arc<dyn KeyValueStore> =
        Arc::new(SqliteKeyValueStore::connect(&config.storage_path()?).await?);

    cli.command.execute(&config, store).await
}
