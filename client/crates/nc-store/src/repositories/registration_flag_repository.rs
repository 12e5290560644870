use crate::{KeyValueStore, REGISTERED_FLAG_KEY};

use std::sync::Arc;

use log::{debug, warn};

const REGISTERED_VALUE: &str = "true";

/// Records that this installation has been registered remotely at least once.
///
/// Informational only; nothing uses it to skip a registration.
pub struct RegistrationFlagRepository {
    store: Arc<dyn KeyValueStore>,
}

impl RegistrationFlagRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Unreadable storage reads as "not registered".
    pub async fn is_registered(&self) -> bool {
        match self.store.get_item(REGISTERED_FLAG_KEY).await {
            Ok(value) => value.as_deref() == Some(REGISTERED_VALUE),
            Err(e) => {
                warn!("Failed to read registration flag: {e}");
                false
            }
        }
    }

    pub async fn mark_registered(&self) -> bool {
        match self.store.set_item(REGISTERED_FLAG_KEY, REGISTERED_VALUE).await {
            Ok(()) => {
                debug!("Registration flag set");
                true
            }
            Err(e) => {
                warn!("Failed to set registration flag: {e}");
                false
            }
        }
    }
}
