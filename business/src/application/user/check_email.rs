use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::normalize_email;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::check_email::{CheckEmailParams, CheckExistingEmailUseCase};

pub struct CheckExistingEmailUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CheckExistingEmailUseCase for CheckExistingEmailUseCaseImpl {
    async fn execute(&self, params: CheckEmailParams) -> Result<bool, UserError> {
        let email = normalize_email(&params.email);
        self.logger.debug(&format!("Checking whether {} is taken", email));

        if email.is_empty() {
            return Ok(false);
        }

        Ok(self.repository.find_by_email(&email).await?.is_some())
    }
}
