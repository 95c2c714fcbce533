use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::model::{FavoriteItem, NewFavoriteProps};

pub struct AddFavoriteParams {
    pub item: NewFavoriteProps,
}

#[async_trait]
pub trait AddFavoriteUseCase: Send + Sync {
    async fn execute(&self, params: AddFavoriteParams) -> Result<Vec<FavoriteItem>, FavoriteError>;
}
