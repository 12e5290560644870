use crate::error::Result as CliErrorResult;

use nc_config::Config;
use nc_push::{PushService, StaticTokenProvider};
use nc_store::{IdentityRepository, KeyValueStore, RegistrationFlagRepository};

use std::sync::Arc;

use clap::Subcommand;
use serde_json::{Value, json};

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect or change this installation's user id
    UserId {
        #[command(subcommand)]
        action: UserIdCommands,
    },

    /// Acquire the given push token and register it
    Register {
        /// Push token issued to the device
        #[arg(long)]
        token: String,
    },

    /// Register the token, then force a second send of the held token
    Resync {
        /// Push token issued to the device
        #[arg(long)]
        token: String,
    },

    /// Clear all local data (user id and registration flag)
    Reset,

    /// Show user id, registration flag and configuration
    Status,
}

#[derive(Subcommand)]
pub enum UserIdCommands {
    /// Print the user id, generating one if none exists
    Show,
    /// Replace the user id with a new one
    Regenerate,
    /// Remove the user id
    Clear,
}

impl Commands {
    /// Run the command against `store` and describe the outcome as JSON.
    pub async fn execute(
        self,
        config: &Config,
        store: Arc<dyn KeyValueStore>,
    ) -> CliErrorResult<Value> {
        let identity =
            IdentityRepository::new(store.clone(), &config.registration.identifier_domain);
        let flag = RegistrationFlagRepository::new(store.clone());

        let value = match self {
            Commands::UserId { action } => match action {
                UserIdCommands::Show => json!({ "userId": identity.get_user_id().await }),
                UserIdCommands::Regenerate => {
                    json!({ "userId": identity.regenerate_user_id().await })
                }
                UserIdCommands::Clear => json!({ "cleared": identity.clear_user_id().await }),
            },

            Commands::Register { token } => {
                let service = push_service(config, store, token)?;
                let ready = service.initialize().await;

                json!({
                    "ready": ready,
                    "userId": identity.get_user_id().await,
                    "registered": flag.is_registered().await,
                })
            }

            Commands::Resync { token } => {
                let service = push_service(config, store, token)?;
                let ready = service.initialize().await;
                let updated = service.force_update_push_token().await;

                json!({
                    "ready": ready,
                    "userId": identity.get_user_id().await,
                    "updated": updated,
                    "registered": flag.is_registered().await,
                })
            }

            Commands::Reset => {
                store.clear().await?;
                json!({ "cleared": true })
            }

            Commands::Status => json!({
                "userId": identity.get_user_id().await,
                "registered": flag.is_registered().await,
                "endpoint": config.registration.endpoint_url,
                "platform": config.device.platform,
                "storage": config.storage_path()?.display().to_string(),
            }),
        };

        Ok(value)
    }
}

fn push_service(
    config: &Config,
    store: Arc<dyn KeyValueStore>,
    token: String,
) -> CliErrorResult<PushService> {
    let provider = StaticTokenProvider::from_config(&config.device, Some(token))?;
    Ok(PushService::from_config(config, store, Arc::new(provider)))
}
