use crate::{
    KeyValueStore, LEGACY_USER_ID_KEY, USER_ID_KEY, error::Result as StoreErrorResult,
};

use nc_core::UserId;

use std::sync::Arc;

use log::{info, warn};

/// Owns the installation's user identifier.
///
/// None of the public operations fail: storage errors are logged and the
/// caller gets a usable (possibly unpersisted) identifier.
pub struct IdentityRepository {
    store: Arc<dyn KeyValueStore>,
    domain: String,
}

impl IdentityRepository {
    pub fn new(store: Arc<dyn KeyValueStore>, domain: impl Into<String>) -> Self {
        Self {
            store,
            domain: domain.into(),
        }
    }

    /// Current identifier, created and persisted on first use.
    pub async fn get_user_id(&self) -> UserId {
        match self.read_user_id().await {
            Ok(Some(user_id)) => user_id,
            Ok(None) => self.create_user_id().await,
            Err(e) => {
                warn!("Failed to read user id, using an unpersisted one: {e}");
                UserId::generate(&self.domain)
            }
        }
    }

    /// Replace the identifier with a new one.
    pub async fn regenerate_user_id(&self) -> UserId {
        let user_id = self.create_user_id().await;

        // A leftover legacy value would never be read again
        if let Err(e) = self.store.remove_item(LEGACY_USER_ID_KEY).await {
            warn!("Failed to remove legacy user id key: {e}");
        }

        info!("Regenerated user id: {user_id}");
        user_id
    }

    /// Forget the identifier. Returns false only if the store failed.
    pub async fn clear_user_id(&self) -> bool {
        for key in [USER_ID_KEY, LEGACY_USER_ID_KEY] {
            if let Err(e) = self.store.remove_item(key).await {
                warn!("Failed to clear user id ({key}): {e}");
                return false;
            }
        }

        info!("User id cleared");
        true
    }

    async fn create_user_id(&self) -> UserId {
        let user_id = UserId::generate(&self.domain);

        match self.store.set_item(USER_ID_KEY, user_id.as_str()).await {
            Ok(()) => info!("Generated new user id: {user_id}"),
            Err(e) => warn!("Failed to persist user id {user_id}, continuing unpersisted: {e}"),
        }

        user_id
    }

    async fn read_user_id(&self) -> StoreErrorResult<Option<UserId>> {
        if let Some(value) = non_empty(self.store.get_item(USER_ID_KEY).await?) {
            return Ok(Some(UserId::from_stored(value)));
        }

        let Some(legacy) = non_empty(self.store.get_item(LEGACY_USER_ID_KEY).await?) else {
            return Ok(None);
        };

        // One-time move to the primary key. The legacy value is returned even
        // if the rewrite fails so the installation keeps its identity.
        match self.store.set_item(USER_ID_KEY, &legacy).await {
            Ok(()) => {
                if let Err(e) = self.store.remove_item(LEGACY_USER_ID_KEY).await {
                    warn!("Migrated user id but failed to remove legacy key: {e}");
                }
                info!("Migrated user id from legacy key '{LEGACY_USER_ID_KEY}'");
            }
            Err(e) => warn!("Failed to migrate legacy user id: {e}"),
        }

        Ok(Some(UserId::from_stored(legacy)))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
