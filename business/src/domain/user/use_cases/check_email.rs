use async_trait::async_trait;

use crate::domain::user::errors::UserError;

pub struct CheckEmailParams {
    pub email: String,
}

/// Pre-submit hint for registration forms. Not an authorization check.
#[async_trait]
pub trait CheckExistingEmailUseCase: Send + Sync {
    async fn execute(&self, params: CheckEmailParams) -> Result<bool, UserError>;
}
