use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use business::domain::errors::RepositoryError;
use business::domain::logger::Logger;
use business::domain::shared::value_objects::UserId;
use business::domain::user::session::SessionRepository;

use crate::json_slot::JsonSlot;
use crate::keys::{StorageKeys, StorageSlot};
use crate::kv::KeyValueStore;

#[derive(Debug, Serialize, Deserialize)]
struct CurrentUserEntity {
    id: String,
}

pub struct SessionRepositoryKv {
    slot: JsonSlot,
}

impl SessionRepositoryKv {
    pub fn new(store: Arc<dyn KeyValueStore>, keys: &StorageKeys, logger: Arc<dyn Logger>) -> Self {
        Self {
            slot: JsonSlot::new(store, keys, StorageSlot::CurrentUser, logger),
        }
    }
}

#[async_trait]
impl SessionRepository for SessionRepositoryKv {
    async fn current_user_id(&self) -> Result<Option<UserId>, RepositoryError> {
        Ok(self
            .slot
            .read::<CurrentUserEntity>()
            .await?
            .map(|e| UserId::new(e.id)))
    }

    async fn set_current(&self, user_id: &UserId) -> Result<(), RepositoryError> {
        self.slot
            .write(&CurrentUserEntity {
                id: user_id.as_str().to_string(),
            })
            .await
    }

    async fn clear(&self) -> Result<(), RepositoryError> {
        self.slot.remove().await
    }
}
