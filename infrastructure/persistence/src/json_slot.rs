use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use business::domain::errors::RepositoryError;
use business::domain::logger::Logger;

use crate::keys::{StorageKeys, StorageSlot};
use crate::kv::KeyValueStore;

/// One JSON document in a [`KeyValueStore`].
///
/// Malformed documents read as absent so a corrupted entry never blocks the
/// session; the next write replaces them.
pub struct JsonSlot {
    store: Arc<dyn KeyValueStore>,
    key: String,
    logger: Arc<dyn Logger>,
}

impl JsonSlot {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        keys: &StorageKeys,
        slot: StorageSlot,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            store,
            key: keys.key(slot),
            logger,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub async fn read<T: DeserializeOwned>(&self) -> Result<Option<T>, RepositoryError> {
        let Some(raw) = self.store.get(&self.key).await? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                self.logger.warn(&format!(
                    "Ignoring malformed data under {}: {}",
                    self.key, err
                ));
                Ok(None)
            }
        }
    }

    pub async fn write<T>(&self, value: &T) -> Result<(), RepositoryError>
    where
        T: Serialize + Sync + ?Sized,
    {
        let raw = serde_json::to_string(value).map_err(|err| {
            self.logger
                .error(&format!("Failed to serialize {}: {}", self.key, err));
            RepositoryError::persistence()
        })?;
        self.store.set(&self.key, &raw).await
    }

    pub async fn remove(&self) -> Result<(), RepositoryError> {
        self.store.remove(&self.key).await
    }
}
