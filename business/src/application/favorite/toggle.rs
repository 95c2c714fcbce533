use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::model::FavoriteItem;
use crate::domain::favorite::repository::FavoriteRepository;
use crate::domain::favorite::use_cases::toggle::{ToggleFavoriteParams, ToggleFavoriteUseCase};
use crate::domain::logger::Logger;
use crate::domain::notifier::Notifier;

pub struct ToggleFavoriteUseCaseImpl {
    pub repository: Arc<dyn FavoriteRepository>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ToggleFavoriteUseCase for ToggleFavoriteUseCaseImpl {
    async fn execute(&self, params: ToggleFavoriteParams) -> Result<bool, FavoriteError> {
        let item = FavoriteItem::new(params.item)?;
        let mut favorites = self.repository.get_all().await?;

        let before = favorites.len();
        favorites.retain(|f| f.product_id != item.product_id);
        let now_favorite = favorites.len() == before;

        let name = item.name.en.clone();
        if now_favorite {
            favorites.push(item);
        }
        self.repository.save_all(&favorites).await?;

        let title = if now_favorite {
            "favorites.added"
        } else {
            "favorites.removed"
        };
        self.notifier.notify(title, &name);
        self.logger.info(&format!("Toggled favorite {}: {}", name, now_favorite));
        Ok(now_favorite)
    }
}
