use crate::{KeyValueStore, StoreError, error::Result as StoreErrorResult};

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

const MAX_CONNECTIONS: u32 = 4;
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// `KeyValueStore` backed by a single SQLite table.
pub struct SqliteKeyValueStore {
    pool: SqlitePool,
}

impl SqliteKeyValueStore {
    /// Open (creating if missing) the store file at `path` and apply migrations.
    pub async fn connect(path: &Path) -> StoreErrorResult<Self> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
            && !dir.exists()
        {
            tokio::fs::create_dir_all(dir).await.map_err(|e| {
                StoreError::unavailable(format!(
                    "Failed to create store directory {}: {e}",
                    dir.display()
                ))
            })?;
        }

        info!("Opening key-value store: {}", path.display());

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(
                SqliteConnectOptions::new()
                    .filename(path)
                    .create_if_missing(true)
                    .journal_mode(SqliteJournalMode::Wal)
                    .synchronous(SqliteSynchronous::Normal)
                    .busy_timeout(BUSY_TIMEOUT),
            )
            .await?;

        Self::from_pool(pool).await
    }

    /// Private in-memory store, gone when dropped.
    pub async fn in_memory() -> StoreErrorResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(":memory:")
            .create_if_missing(true);

        // In-memory databases are per connection
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        Self::from_pool(pool).await
    }

    /// Wrap an existing pool and apply migrations.
    pub async fn from_pool(pool: SqlitePool) -> StoreErrorResult<Self> {
        sqlx::migrate!("./migrations").run(&pool).await?;
        debug!("Key-value store migrations applied");
        Ok(Self { pool })
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl KeyValueStore for SqliteKeyValueStore {
    async fn get_item(&self, key: &str) -> StoreErrorResult<Option<String>> {
        let value = sqlx::query_scalar::<_, String>("SELECT value FROM nc_kv_store WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(value)
    }

    async fn set_item(&self, key: &str, value: &str) -> StoreErrorResult<()> {
        let updated_at = Utc::now().timestamp();

        sqlx::query(
            r#"
              INSERT INTO nc_kv_store (key, value, updated_at)
              VALUES (?, ?, ?)
              ON CONFLICT(key) DO UPDATE SET
                  value = excluded.value,
                  updated_at = excluded.updated_at
              "#,
        )
        .bind(key)
        .bind(value)
        .bind(updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn remove_item(&self, key: &str) -> StoreErrorResult<()> {
        sqlx::query("DELETE FROM nc_kv_store WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn clear(&self) -> StoreErrorResult<()> {
        let result = sqlx::query("DELETE FROM nc_kv_store")
            .execute(&self.pool)
            .await?;

        info!("Cleared key-value store ({} keys)", result.rows_affected());
        Ok(())
    }
}
