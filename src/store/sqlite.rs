use sqlx::SqlitePool;
use tracing::debug;

use super::{ItemRepository, decode, encode};
use crate::error::Result;
use crate::models::Item;

/// Keeps the collection as one row of the `kv_store` table.
#[derive(Debug, Clone)]
pub struct SqliteItemRepository {
    pool: SqlitePool,
    key: String,
}

impl SqliteItemRepository {
    pub fn new(pool: SqlitePool, key: impl Into<String>) -> Self {
        Self {
            pool,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl ItemRepository for SqliteItemRepository {
    async fn load(&self) -> Result<Option<Vec<Item>>> {
        let raw: Option<String> = sqlx::query_scalar("SELECT value FROM kv_store WHERE key = ?")
            .bind(&self.key)
            .fetch_optional(&self.pool)
            .await?;

        match raw {
            Some(raw) => {
                let items = decode(&raw)?;
                debug!(key = %self.key, count = items.len(), "Loaded stored items");
                Ok(Some(items))
            }
            None => {
                debug!(key = %self.key, "No stored items");
                Ok(None)
            }
        }
    }

    async fn save(&self, items: &[Item]) -> Result<()> {
        let raw = encode(items)?;

        sqlx::query(
            r#"
            INSERT INTO kv_store (key, value) VALUES (?, ?)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = CURRENT_TIMESTAMP
            "#,
        )
        .bind(&self.key)
        .bind(&raw)
        .execute(&self.pool)
        .await?;

        debug!(key = %self.key, count = items.len(), "Saved items");
        Ok(())
    }

    async fn clear(&self) -> Result<bool> {
        let removed = sqlx::query("DELETE FROM kv_store WHERE key = ?")
            .bind(&self.key)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(removed > 0)
    }
}
