use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;

use crate::kv::KeyValueStore;

/// Process-local store. Contents are lost when the process exits.
#[derive(Default)]
pub struct InMemoryKeyValueStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), RepositoryError> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}
