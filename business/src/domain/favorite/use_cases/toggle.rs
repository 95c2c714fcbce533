use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::model::NewFavoriteProps;

pub struct ToggleFavoriteParams {
    pub item: NewFavoriteProps,
}

#[async_trait]
pub trait ToggleFavoriteUseCase: Send + Sync {
    /// Returns whether the product is a favorite afterwards.
    async fn execute(&self, params: ToggleFavoriteParams) -> Result<bool, FavoriteError>;
}
