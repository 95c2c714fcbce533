use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;

use crate::kv::KeyValueStore;

/// Stores each document as a row of `kv_entries`.
pub struct PostgresKeyValueStore {
    pool: PgPool,
}

impl PostgresKeyValueStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn storage_error(err: sqlx::Error) -> RepositoryError {
    tracing::error!("kv_entries query failed: {}", err);
    RepositoryError::storage_error()
}

#[async_trait]
impl KeyValueStore for PostgresKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        sqlx::query_scalar::<_, String>("SELECT value FROM kv_entries WHERE key = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO kv_entries (key, value, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (key) DO UPDATE SET
                value = EXCLUDED.value,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM kv_entries WHERE key = $1")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        Ok(())
    }
}
