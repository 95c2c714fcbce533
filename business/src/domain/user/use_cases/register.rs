use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::model::{AccountRole, UserProfile};

pub struct RegisterUserParams {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: String,
    pub address: String,
    pub bio: String,
    pub role: AccountRole,
}

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    /// Creates the account and signs it in.
    async fn execute(&self, params: RegisterUserParams) -> Result<UserProfile, UserError>;
}
