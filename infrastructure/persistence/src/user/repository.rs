use std::sync::Arc;

use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::logger::Logger;
use business::domain::shared::value_objects::UserId;
use business::domain::user::model::{User, normalize_email};
use business::domain::user::repository::UserRepository;

use super::entity::UserEntity;
use crate::json_slot::JsonSlot;
use crate::keys::{StorageKeys, StorageSlot};
use crate::kv::KeyValueStore;

/// Users stored as a single JSON list.
pub struct UserRepositoryKv {
    slot: JsonSlot,
}

impl UserRepositoryKv {
    pub fn new(store: Arc<dyn KeyValueStore>, keys: &StorageKeys, logger: Arc<dyn Logger>) -> Self {
        Self {
            slot: JsonSlot::new(store, keys, StorageSlot::Users, logger),
        }
    }

    async fn entities(&self) -> Result<Vec<UserEntity>, RepositoryError> {
        Ok(self.slot.read().await?.unwrap_or_default())
    }
}

#[async_trait]
impl UserRepository for UserRepositoryKv {
    async fn get_all(&self) -> Result<Vec<User>, RepositoryError> {
        Ok(self
            .entities()
            .await?
            .into_iter()
            .map(|e| e.into_domain())
            .collect())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .entities()
            .await?
            .into_iter()
            .find(|e| e.id == id.as_str())
            .map(|e| e.into_domain()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let email = normalize_email(email);
        Ok(self
            .entities()
            .await?
            .into_iter()
            .find(|e| normalize_email(&e.email) == email)
            .map(|e| e.into_domain()))
    }

    /// Inserts or replaces by id.
    async fn save(&self, user: &User) -> Result<(), RepositoryError> {
        let mut entities = self.entities().await?;
        let entity = UserEntity::from_domain(user);

        match entities.iter_mut().find(|e| e.id == entity.id) {
            Some(existing) => *existing = entity,
            None => entities.push(entity),
        }

        self.slot.write(&entities).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryKeyValueStore;
    use business::domain::user::model::{AccountRole, NewUserProps, SellerProfile};
    use logger::TracingLogger;

    fn props(email: &str, role: AccountRole) -> NewUserProps {
        NewUserProps {
            name: "Omar Khalid".to_string(),
            email: email.to_string(),
            password: "secret123".to_string(),
            confirm_password: "secret123".to_string(),
            phone: "0500000000".to_string(),
            address: "Riyadh".to_string(),
            bio: String::new(),
            role,
        }
    }

    fn repository(store: Arc<InMemoryKeyValueStore>) -> UserRepositoryKv {
        UserRepositoryKv::new(store, &StorageKeys::default(), Arc::new(TracingLogger))
    }

    #[tokio::test]
    async fn should_restore_seller_with_working_credential() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let repo = repository(store);
        let user = User::new(props(
            "shop@example.com",
            AccountRole::Seller(SellerProfile {
                store_name: "Green Basket".to_string(),
                store_location: "Khobar".to_string(),
                store_phone: "013000".to_string(),
                store_description: Some("Produce".to_string()),
            }),
        ))
        .unwrap();

        repo.save(&user).await.unwrap();
        let restored = repo.find_by_email("SHOP@example.com").await.unwrap().unwrap();

        assert_eq!(restored.id, user.id);
        assert_eq!(restored.role, user.role);
        assert!(restored.verify_password("secret123"));
    }

    #[tokio::test]
    async fn should_replace_existing_record_on_save() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let repo = repository(store);
        let mut user = User::new(props("a@example.com", AccountRole::Buyer)).unwrap();
        repo.save(&user).await.unwrap();

        user.bio = "Night owl".to_string();
        repo.save(&user).await.unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].bio, "Night owl");
    }

    #[tokio::test]
    async fn should_treat_malformed_list_as_empty() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        store.set("ed_users", "{not json").await.unwrap();
        let repo = repository(store);

        assert!(repo.get_all().await.unwrap().is_empty());
    }
}
