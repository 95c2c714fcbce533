use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::model::FavoriteItem;
use crate::domain::shared::value_objects::ProductId;

pub struct RemoveFavoriteParams {
    pub product_id: ProductId,
}

#[async_trait]
pub trait RemoveFavoriteUseCase: Send + Sync {
    async fn execute(&self, params: RemoveFavoriteParams)
    -> Result<Vec<FavoriteItem>, FavoriteError>;
}
