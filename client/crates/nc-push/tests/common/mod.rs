#![allow(dead_code)]

pub mod mock_provider;

use nc_config::Config;
use nc_core::{DeviceInfo, Platform, PushToken};
use nc_push::{PushContext, PushService, PushTokenProvider, RegistrationClient, RegistrationSynchronizer};
use nc_store::{IdentityRepository, RegistrationFlagRepository, SqliteKeyValueStore};

use std::sync::Arc;

use wiremock::MockServer;

pub const REGISTER_PATH: &str = "/webhook/register-push-token";
pub const TEST_TIMEZONE: &str = "Europe/Berlin";

pub async fn create_test_store() -> Arc<SqliteKeyValueStore> {
    Arc::new(
        SqliteKeyValueStore::in_memory()
            .await
            .expect("Failed to create test store"),
    )
}

pub fn endpoint(server: &MockServer) -> String {
    format!("{}{}", server.uri(), REGISTER_PATH)
}

pub fn test_token(value: &str) -> PushToken {
    PushToken::new(
        value,
        Platform::Ios,
        DeviceInfo::new(
            Some("Apple".to_string()),
            Some("iPhone 15".to_string()),
            Some("iOS".to_string()),
            Some("18.1".to_string()),
        ),
    )
    .unwrap()
}

pub fn create_synchronizer(
    server: &MockServer,
    store: Arc<SqliteKeyValueStore>,
    context: Arc<PushContext>,
) -> RegistrationSynchronizer {
    RegistrationSynchronizer::new(
        IdentityRepository::new(store.clone(), nc_core::DEFAULT_IDENTIFIER_DOMAIN),
        RegistrationFlagRepository::new(store),
        RegistrationClient::new(&endpoint(server)),
        context,
    )
    .with_timezone(Some(TEST_TIMEZONE.to_string()))
}

pub fn create_service(
    server: &MockServer,
    store: Arc<SqliteKeyValueStore>,
    provider: Arc<dyn PushTokenProvider>,
) -> PushService {
    let mut config = Config::default();
    config.registration.endpoint_url = endpoint(server);
    config.device.timezone = Some(TEST_TIMEZONE.to_string());

    PushService::from_config(&config, store, provider)
}
