use std::env;
use std::sync::Arc;

use persistence::db::{
    DEFAULT_MIGRATIONS_PATH, DatabaseConfig, create_postgres_pool, run_migrations,
};
use persistence::keys::StorageKeys;
use persistence::kv::KeyValueStore;
use persistence::memory::InMemoryKeyValueStore;
use persistence::postgres::PostgresKeyValueStore;

/// Where session state is kept
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string; unset keeps state in memory
/// - STORAGE_NAMESPACE: Prefix for every stored key (default: "ed")
/// - MIGRATIONS_PATH: Directory of SQL migrations
///   (default: "infrastructure/persistence/migrations")
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub database_url: Option<String>,
    pub namespace: String,
    pub migrations_path: String,
}

impl StorageConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
            namespace: env::var("STORAGE_NAMESPACE").unwrap_or_else(|_| "ed".to_string()),
            migrations_path: env::var("MIGRATIONS_PATH")
                .unwrap_or_else(|_| DEFAULT_MIGRATIONS_PATH.to_string()),
        }
    }

    pub fn keys(&self) -> StorageKeys {
        StorageKeys::new(self.namespace.clone())
    }

    pub fn backend_name(&self) -> &'static str {
        if self.database_url.is_some() {
            "postgres"
        } else {
            "memory"
        }
    }

    /// Connects the configured backend, running migrations for PostgreSQL.
    pub async fn init_store(&self) -> anyhow::Result<Arc<dyn KeyValueStore>> {
        let Some(url) = &self.database_url else {
            tracing::warn!("DATABASE_URL not set, session state is kept in memory");
            return Ok(Arc::new(InMemoryKeyValueStore::new()));
        };

        let pool = create_postgres_pool(&DatabaseConfig::new(url.clone())).await?;
        run_migrations(&pool, &self.migrations_path).await?;
        tracing::info!("Session state stored in PostgreSQL");
        Ok(Arc::new(PostgresKeyValueStore::new(pool)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_report_memory_backend_without_database_url() {
        let config = StorageConfig {
            database_url: None,
            namespace: "ed".to_string(),
            migrations_path: DEFAULT_MIGRATIONS_PATH.to_string(),
        };

        assert_eq!(config.backend_name(), "memory");
    }

    #[tokio::test]
    async fn should_build_in_memory_store_without_database_url() {
        let config = StorageConfig {
            database_url: None,
            namespace: "test".to_string(),
            migrations_path: DEFAULT_MIGRATIONS_PATH.to_string(),
        };

        let store = config.init_store().await.unwrap();
        store.set("test_cart", "[]").await.unwrap();

        assert_eq!(store.get("test_cart").await.unwrap().as_deref(), Some("[]"));
    }
}
