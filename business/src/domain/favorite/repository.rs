use async_trait::async_trait;

use super::model::FavoriteItem;
use crate::domain::errors::RepositoryError;

#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Insertion order, oldest first.
    async fn get_all(&self) -> Result<Vec<FavoriteItem>, RepositoryError>;
    async fn save_all(&self, items: &[FavoriteItem]) -> Result<(), RepositoryError>;
}
