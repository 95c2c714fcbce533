use std::sync::Arc;

use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::favorite::model::FavoriteItem;
use business::domain::favorite::repository::FavoriteRepository;
use business::domain::logger::Logger;

use super::entity::FavoriteEntity;
use crate::json_slot::JsonSlot;
use crate::keys::{StorageKeys, StorageSlot};
use crate::kv::KeyValueStore;

pub struct FavoriteRepositoryKv {
    slot: JsonSlot,
}

impl FavoriteRepositoryKv {
    pub fn new(store: Arc<dyn KeyValueStore>, keys: &StorageKeys, logger: Arc<dyn Logger>) -> Self {
        Self {
            slot: JsonSlot::new(store, keys, StorageSlot::Favorites, logger),
        }
    }
}

#[async_trait]
impl FavoriteRepository for FavoriteRepositoryKv {
    async fn get_all(&self) -> Result<Vec<FavoriteItem>, RepositoryError> {
        let entities: Vec<FavoriteEntity> = self.slot.read().await?.unwrap_or_default();
        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn save_all(&self, items: &[FavoriteItem]) -> Result<(), RepositoryError> {
        let entities: Vec<FavoriteEntity> = items.iter().map(FavoriteEntity::from_domain).collect();
        self.slot.write(&entities).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryKeyValueStore;
    use business::domain::favorite::model::NewFavoriteProps;
    use business::domain::shared::locale::LocalizedName;
    use business::domain::shared::value_objects::ProductId;
    use logger::TracingLogger;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn should_keep_arabic_name_and_added_at() {
        let repo = FavoriteRepositoryKv::new(
            Arc::new(InMemoryKeyValueStore::new()),
            &StorageKeys::default(),
            Arc::new(TracingLogger),
        );
        let item = FavoriteItem::new(NewFavoriteProps {
            product_id: ProductId::new(11),
            name: LocalizedName::new("Dates", Some("تمر".to_string())),
            price: Decimal::new(1999, 2),
            original_price: Decimal::from(25),
            image_ref: None,
            seller_label: "Oasis Farms".to_string(),
            expiry_date: None,
        })
        .unwrap();

        repo.save_all(std::slice::from_ref(&item)).await.unwrap();

        assert_eq!(repo.get_all().await.unwrap(), vec![item]);
    }
}
