use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::model::FavoriteItem;
use crate::domain::favorite::repository::FavoriteRepository;
use crate::domain::favorite::use_cases::add::{AddFavoriteParams, AddFavoriteUseCase};
use crate::domain::logger::Logger;

pub struct AddFavoriteUseCaseImpl {
    pub repository: Arc<dyn FavoriteRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddFavoriteUseCase for AddFavoriteUseCaseImpl {
    async fn execute(&self, params: AddFavoriteParams) -> Result<Vec<FavoriteItem>, FavoriteError> {
        let item = FavoriteItem::new(params.item)?;
        self.logger
            .info(&format!("Adding product {} to favorites", item.product_id));

        let mut favorites = self.repository.get_all().await?;
        if favorites.iter().any(|f| f.product_id == item.product_id) {
            self.logger
                .debug(&format!("Product {} already a favorite", item.product_id));
            return Ok(favorites);
        }

        favorites.push(item);
        self.repository.save_all(&favorites).await?;
        Ok(favorites)
    }
}
