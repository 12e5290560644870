use crate::{
    PushContext, PushError, PushResult, PushTokenProvider, RegistrationClient,
    RegistrationSynchronizer, failure_hint,
};

use nc_config::Config;
use nc_core::{PermissionStatus, PushToken};
use nc_store::{IdentityRepository, KeyValueStore, RegistrationFlagRepository};

use std::sync::Arc;

use log::{debug, error, info, warn};

/// Startup entry point for push notifications.
///
/// `initialize` acquires a token from the device and registers it; the
/// synchronizer can later re-send it with `force_update_push_token`.
pub struct PushService {
    provider: Arc<dyn PushTokenProvider>,
    synchronizer: RegistrationSynchronizer,
    context: Arc<PushContext>,
}

impl PushService {
    pub fn new(
        provider: Arc<dyn PushTokenProvider>,
        synchronizer: RegistrationSynchronizer,
        context: Arc<PushContext>,
    ) -> Self {
        Self {
            provider,
            synchronizer,
            context,
        }
    }

    /// Wire a service with a fresh context from configuration.
    pub fn from_config(
        config: &Config,
        store: Arc<dyn KeyValueStore>,
        provider: Arc<dyn PushTokenProvider>,
    ) -> Self {
        let context = Arc::new(PushContext::new());

        let synchronizer = RegistrationSynchronizer::new(
            IdentityRepository::new(store.clone(), &config.registration.identifier_domain),
            RegistrationFlagRepository::new(store),
            RegistrationClient::new(&config.registration.endpoint_url),
            context.clone(),
        )
        .with_timezone(config.device.timezone.clone());

        Self::new(provider, synchronizer, context)
    }

    /// Acquire a push token and register it.
    ///
    /// Returns whether push is ready (a token is held). A failed registration
    /// does not make push "not ready"; it is retried on the next launch or
    /// forced update.
    pub async fn initialize(&self) -> bool {
        if self.context.is_initialized() {
            debug!("Push notifications already initialized");
            return true;
        }

        match self.acquire_token().await {
            Ok(token) => {
                self.context.set_token(token.clone()).await;
                self.synchronizer.register_token_on_server(&token).await;
                self.context.mark_initialized();
                info!("Push notifications ready ({})", token.platform);
                true
            }
            Err(e) => {
                error!("Push notifications not ready: {e}");
                if let Some(hint) = failure_hint(self.provider.platform(), &e) {
                    warn!("{hint}");
                }
                false
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        self.context.is_initialized()
    }

    pub async fn current_token(&self) -> Option<PushToken> {
        self.context.token().await
    }

    pub async fn force_update_push_token(&self) -> bool {
        self.synchronizer.force_update_push_token().await
    }

    pub fn synchronizer(&self) -> &RegistrationSynchronizer {
        &self.synchronizer
    }

    async fn acquire_token(&self) -> PushResult<PushToken> {
        if !self.provider.is_physical_device() {
            return Err(PushError::not_physical_device());
        }

        let mut status = self.provider.permission_status().await?;

        // Prompt at most once per session. A user who denied and later enabled
        // notifications in settings shows up here as Granted.
        if status == PermissionStatus::Undetermined && !self.context.mark_permission_requested() {
            debug!("Requesting push permission");
            status = self.provider.request_permission().await?;
        }

        if !status.is_granted() {
            return Err(PushError::permission_not_granted(status));
        }

        self.provider.acquire_token().await
    }
}
