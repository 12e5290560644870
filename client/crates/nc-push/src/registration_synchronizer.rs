use crate::{PushContext, RegistrationClient};

use nc_core::{PushToken, RegistrationRecord, TimezoneInfo};
use nc_store::{IdentityRepository, RegistrationFlagRepository};

use std::sync::Arc;

use chrono::Utc;
use log::{debug, error, info, warn};

/// Sends the current (user id, push token) pairing to the registration
/// endpoint.
///
/// Every call sends. The registered flag is only recorded, never consulted to
/// skip work: after a data clear the user id changes while the token may not,
/// and the server must learn the new pairing.
pub struct RegistrationSynchronizer {
    identity: IdentityRepository,
    flag: RegistrationFlagRepository,
    client: RegistrationClient,
    context: Arc<PushContext>,
    timezone_override: Option<String>,
}

impl RegistrationSynchronizer {
    pub fn new(
        identity: IdentityRepository,
        flag: RegistrationFlagRepository,
        client: RegistrationClient,
        context: Arc<PushContext>,
    ) -> Self {
        Self {
            identity,
            flag,
            client,
            context,
            timezone_override: None,
        }
    }

    /// Report `timezone` instead of the host zone name.
    pub fn with_timezone(mut self, timezone: Option<String>) -> Self {
        self.timezone_override = timezone;
        self
    }

    pub fn identity(&self) -> &IdentityRepository {
        &self.identity
    }

    pub fn flag(&self) -> &RegistrationFlagRepository {
        &self.flag
    }

    /// Register `token` for the current user id. Returns whether the endpoint
    /// accepted it. Failures are logged and not retried.
    pub async fn register_token_on_server(&self, token: &PushToken) -> bool {
        let user_id = self.identity.get_user_id().await;
        let was_registered = self.flag.is_registered().await;

        let timezone = TimezoneInfo::current(self.timezone_override.as_deref());
        let record = RegistrationRecord::new(&user_id, token, &timezone, Utc::now());

        debug!(
            "Registering push token: user={}, platform={}, timezone={} ({:+}m), previously registered={}",
            record.user_id,
            record.platform,
            record.timezone,
            record.timezone_offset,
            was_registered
        );

        match self.client.register(&record).await {
            Ok(()) => {
                if was_registered {
                    info!("Push token registration refreshed for {user_id}");
                } else {
                    self.flag.mark_registered().await;
                    info!("Push token registered for {user_id}");
                }
                true
            }
            Err(e) => {
                error!("Push token registration failed for {user_id}: {e}");
                false
            }
        }
    }

    /// Re-send the token already held by this process.
    ///
    /// Returns false without touching the network when no token is held.
    pub async fn force_update_push_token(&self) -> bool {
        let Some(token) = self.context.token().await else {
            warn!("Forced push token update requested but no token is held");
            return false;
        };

        info!("Forcing push token update");
        self.register_token_on_server(&token).await
    }
}
