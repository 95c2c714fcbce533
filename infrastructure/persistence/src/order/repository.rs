use std::sync::Arc;

use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::logger::Logger;
use business::domain::order::model::{Order, OrderId};
use business::domain::order::repository::OrderRepository;

use super::entity::OrderEntity;
use crate::json_slot::JsonSlot;
use crate::keys::{StorageKeys, StorageSlot};
use crate::kv::KeyValueStore;

pub struct OrderRepositoryKv {
    slot: JsonSlot,
}

impl OrderRepositoryKv {
    pub fn new(store: Arc<dyn KeyValueStore>, keys: &StorageKeys, logger: Arc<dyn Logger>) -> Self {
        Self {
            slot: JsonSlot::new(store, keys, StorageSlot::Orders, logger),
        }
    }

    async fn entities(&self) -> Result<Vec<OrderEntity>, RepositoryError> {
        Ok(self.slot.read().await?.unwrap_or_default())
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryKv {
    async fn get_all(&self) -> Result<Vec<Order>, RepositoryError> {
        Ok(self
            .entities()
            .await?
            .into_iter()
            .map(|e| e.into_domain())
            .collect())
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, RepositoryError> {
        Ok(self
            .entities()
            .await?
            .into_iter()
            .find(|e| e.id == id.as_str())
            .map(|e| e.into_domain()))
    }

    async fn append(&self, order: &Order) -> Result<(), RepositoryError> {
        let mut entities = self.entities().await?;
        entities.push(OrderEntity::from_domain(order));
        self.slot.write(&entities).await
    }
}
