use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::model::FavoriteItem;
use crate::domain::favorite::repository::FavoriteRepository;
use crate::domain::favorite::use_cases::get_all::{GetFavoritesParams, GetFavoritesUseCase};
use crate::domain::logger::Logger;

pub struct GetFavoritesUseCaseImpl {
    pub repository: Arc<dyn FavoriteRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetFavoritesUseCase for GetFavoritesUseCaseImpl {
    async fn execute(
        &self,
        params: GetFavoritesParams,
    ) -> Result<Vec<FavoriteItem>, FavoriteError> {
        self.logger.info("Getting favorites");

        let favorites = self.repository.get_all().await?;
        let Some(query) = params.query else {
            return Ok(favorites);
        };

        Ok(favorites
            .into_iter()
            .filter(|item| item.matches(&query))
            .collect())
    }
}
