use crate::error::Result as StoreErrorResult;

use async_trait::async_trait;

/// Durable string-to-string storage shared by the whole client.
///
/// Every call is an independent get/set; there is no transactional grouping
/// across keys.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get_item(&self, key: &str) -> StoreErrorResult<Option<String>>;

    async fn set_item(&self, key: &str, value: &str) -> StoreErrorResult<()>;

    /// Removing an absent key is not an error.
    async fn remove_item(&self, key: &str) -> StoreErrorResult<()>;

    /// Wipe every key ("clear app data").
    async fn clear(&self) -> StoreErrorResult<()>;
}
