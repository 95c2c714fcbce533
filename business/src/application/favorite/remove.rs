use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::model::FavoriteItem;
use crate::domain::favorite::repository::FavoriteRepository;
use crate::domain::favorite::use_cases::remove::{RemoveFavoriteParams, RemoveFavoriteUseCase};
use crate::domain::logger::Logger;

pub struct RemoveFavoriteUseCaseImpl {
    pub repository: Arc<dyn FavoriteRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveFavoriteUseCase for RemoveFavoriteUseCaseImpl {
    async fn execute(
        &self,
        params: RemoveFavoriteParams,
    ) -> Result<Vec<FavoriteItem>, FavoriteError> {
        self.logger.info(&format!(
            "Removing product {} from favorites",
            params.product_id
        ));

        let mut favorites = self.repository.get_all().await?;
        let before = favorites.len();
        favorites.retain(|f| f.product_id != params.product_id);

        if favorites.len() != before {
            self.repository.save_all(&favorites).await?;
        }
        Ok(favorites)
    }
}
