use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::model::UserProfile;

pub struct LoginParams {
    pub email: String,
    pub password: String,
}

#[async_trait]
pub trait LoginUseCase: Send + Sync {
    async fn execute(&self, params: LoginParams) -> Result<UserProfile, UserError>;
}
