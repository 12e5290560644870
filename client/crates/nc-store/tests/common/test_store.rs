use nc_store::{KeyValueStore, SqliteKeyValueStore, StoreError};

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

/// Creates an in-memory store with migrations applied
pub async fn create_test_store() -> Arc<SqliteKeyValueStore> {
    Arc::new(
        SqliteKeyValueStore::in_memory()
            .await
            .expect("Failed to create test store"),
    )
}

/// Store whose every operation fails
pub struct FailingStore;

#[async_trait]
impl KeyValueStore for FailingStore {
    async fn get_item(&self, _key: &str) -> nc_store::Result<Option<String>> {
        Err(StoreError::unavailable("read failed"))
    }

    async fn set_item(&self, _key: &str, _value: &str) -> nc_store::Result<()> {
        Err(StoreError::unavailable("write failed"))
    }

    async fn remove_item(&self, _key: &str) -> nc_store::Result<()> {
        Err(StoreError::unavailable("remove failed"))
    }

    async fn clear(&self) -> nc_store::Result<()> {
        Err(StoreError::unavailable("clear failed"))
    }
}

/// Real store that counts writes
pub struct CountingStore {
    inner: SqliteKeyValueStore,
    writes: AtomicUsize,
}

impl CountingStore {
    pub async fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: SqliteKeyValueStore::in_memory()
                .await
                .expect("Failed to create test store"),
            writes: AtomicUsize::new(0),
        })
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl KeyValueStore for CountingStore {
    async fn get_item(&self, key: &str) -> nc_store::Result<Option<String>> {
        self.inner.get_item(key).await
    }

    async fn set_item(&self, key: &str, value: &str) -> nc_store::Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.set_item(key, value).await
    }

    async fn remove_item(&self, key: &str) -> nc_store::Result<()> {
        self.inner.remove_item(key).await
    }

    async fn clear(&self) -> nc_store::Result<()> {
        self.inner.clear().await
    }
}

/// Real store that serves reads but rejects every write
pub struct ReadOnlyStore {
    inner: SqliteKeyValueStore,
}

impl ReadOnlyStore {
    /// Seed `entries` into a fresh store, then lock it against writes
    pub async fn seeded(entries: &[(&str, &str)]) -> Arc<Self> {
        let inner = SqliteKeyValueStore::in_memory()
            .await
            .expect("Failed to create test store");
        for (key, value) in entries {
            inner
                .set_item(key, value)
                .await
                .expect("Failed to seed test store");
        }

        Arc::new(Self { inner })
    }
}

#[async_trait]
impl KeyValueStore for ReadOnlyStore {
    async fn get_item(&self, key: &str) -> nc_store::Result<Option<String>> {
        self.inner.get_item(key).await
    }

    async fn set_item(&self, _key: &str, _value: &str) -> nc_store::Result<()> {
        Err(StoreError::unavailable("write failed"))
    }

    async fn remove_item(&self, _key: &str) -> nc_store::Result<()> {
        Err(StoreError::unavailable("remove failed"))
    }

    async fn clear(&self) -> nc_store::Result<()> {
        Err(StoreError::unavailable("clear failed"))
    }
}
