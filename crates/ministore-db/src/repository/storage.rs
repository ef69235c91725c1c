//! # Durable Storage Repository
//!
//! Named string slots backed by the `durable_storage` table, with the same
//! contract as browser local storage: `get` returns the last value written,
//! `set` overwrites it, and writes fail once the quota is used up.
//!
//! ## Quota Accounting
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  set("ministore_products", value)                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  used   = Σ bytes(key) + bytes(value)  over every OTHER key            │
//! │  needed = used + bytes(key) + bytes(value)                             │
//! │       │                                                                 │
//! │       ├── needed > quota → DbError::QuotaExceeded (nothing written)    │
//! │       │                                                                 │
//! │       └── else UPSERT                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};

/// Repository for durable key-value slots.
#[derive(Debug, Clone)]
pub struct DurableStorageRepository {
    pool: SqlitePool,
    quota_bytes: u64,
}

impl DurableStorageRepository {
    /// Creates a new DurableStorageRepository.
    pub fn new(pool: SqlitePool, quota_bytes: u64) -> Self {
        DurableStorageRepository { pool, quota_bytes }
    }

    pub fn quota_bytes(&self) -> u64 {
        self.quota_bytes
    }

    /// Reads a slot.
    ///
    /// ## Returns
    /// * `Ok(Some(value))` - The last value written under `key`
    /// * `Ok(None)` - Nothing was ever written (or it was removed)
    pub async fn get(&self, key: &str) -> DbResult<Option<String>> {
        let value: Option<String> =
            sqlx::query_scalar("SELECT value FROM durable_storage WHERE key = ?1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;

        debug!(key = %key, found = value.is_some(), "Read durable key");
        Ok(value)
    }

    /// Overwrites a slot.
    ///
    /// ## Errors
    /// * `DbError::QuotaExceeded` - the write would push usage past the quota
    /// * `DbError::ConnectionFailed` - the database is closed or unreachable
    pub async fn set(&self, key: &str, value: &str) -> DbResult<()> {
        let used_elsewhere = self.usage_bytes_excluding(key).await?;
        let required = used_elsewhere + (key.len() + value.len()) as u64;

        if required > self.quota_bytes {
            return Err(DbError::QuotaExceeded {
                key: key.to_string(),
                required,
                quota: self.quota_bytes,
            });
        }

        sqlx::query(
            r#"
            INSERT INTO durable_storage (key, value, updated_at)
            VALUES (?1, ?2, CURRENT_TIMESTAMP)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;

        debug!(key = %key, bytes = value.len(), "Wrote durable key");
        Ok(())
    }

    /// Deletes a slot. Returns whether it existed.
    pub async fn remove(&self, key: &str) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM durable_storage WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await?;

        debug!(key = %key, "Removed durable key");
        Ok(result.rows_affected() > 0)
    }

    /// Total bytes held by all slots (keys plus values).
    pub async fn usage_bytes(&self) -> DbResult<u64> {
        let used: i64 = sqlx::query_scalar(
            r#"
            SELECT COALESCE(SUM(LENGTH(CAST(key AS BLOB)) + LENGTH(CAST(value AS BLOB))), 0)
            FROM durable_storage
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(used.max(0) as u64)
    }

    async fn usage_bytes_excluding(&self, key: &str) -> DbResult<u64> {
        let used: i64 = sqlx::query_scalar(
            r#"
            SELECT COALESCE(SUM(LENGTH(CAST(key AS BLOB)) + LENGTH(CAST(value AS BLOB))), 0)
            FROM durable_storage
            WHERE key != ?1
            "#,
        )
        .bind(key)
        .fetch_one(&self.pool)
        .await?;

        Ok(used.max(0) as u64)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
