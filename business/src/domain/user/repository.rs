use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::User;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<User>, RepositoryError>;
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError>;
    /// `email` is matched after normalization (trimmed, lowercase).
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
    /// Inserts or replaces the record with the same id.
    async fn save(&self, user: &User) -> Result<(), RepositoryError>;
}
