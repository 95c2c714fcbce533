use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::model::UserProfile;

#[async_trait]
pub trait GetCurrentUserUseCase: Send + Sync {
    async fn execute(&self) -> Result<Option<UserProfile>, UserError>;
}
