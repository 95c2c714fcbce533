use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::model::FavoriteItem;

#[derive(Debug, Clone, Default)]
pub struct GetFavoritesParams {
    pub query: Option<String>,
}

#[async_trait]
pub trait GetFavoritesUseCase: Send + Sync {
    async fn execute(&self, params: GetFavoritesParams) -> Result<Vec<FavoriteItem>, FavoriteError>;
}
