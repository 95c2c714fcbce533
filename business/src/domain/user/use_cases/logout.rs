use async_trait::async_trait;

use crate::domain::user::errors::UserError;

#[async_trait]
pub trait LogoutUseCase: Send + Sync {
    async fn execute(&self) -> Result<(), UserError>;
}
