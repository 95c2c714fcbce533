use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

/// Holds the id of the signed-in user. The record itself always comes from
/// the user store.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn current_user_id(&self) -> Result<Option<UserId>, RepositoryError>;
    async fn set_current(&self, user_id: &UserId) -> Result<(), RepositoryError>;
    async fn clear(&self) -> Result<(), RepositoryError>;
}
