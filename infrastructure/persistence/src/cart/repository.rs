use std::sync::Arc;

use async_trait::async_trait;

use business::domain::cart::model::Cart;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;
use business::domain::logger::Logger;

use super::entity::CartItemEntity;
use crate::json_slot::JsonSlot;
use crate::keys::{StorageKeys, StorageSlot};
use crate::kv::KeyValueStore;

pub struct CartRepositoryKv {
    slot: JsonSlot,
}

impl CartRepositoryKv {
    pub fn new(store: Arc<dyn KeyValueStore>, keys: &StorageKeys, logger: Arc<dyn Logger>) -> Self {
        Self {
            slot: JsonSlot::new(store, keys, StorageSlot::Cart, logger),
        }
    }
}

#[async_trait]
impl CartRepository for CartRepositoryKv {
    async fn load(&self) -> Result<Cart, RepositoryError> {
        let entities: Vec<CartItemEntity> = self.slot.read().await?.unwrap_or_default();
        Ok(Cart::from_items(
            entities.into_iter().map(|e| e.into_domain()).collect(),
        ))
    }

    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError> {
        let entities: Vec<CartItemEntity> =
            cart.items().iter().map(CartItemEntity::from_domain).collect();
        self.slot.write(&entities).await
    }

    async fn clear(&self) -> Result<(), RepositoryError> {
        self.slot.remove().await
    }
}
