use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::{UserProfile, normalize_email};
use crate::domain::user::repository::UserRepository;
use crate::domain::user::session::SessionRepository;
use crate::domain::user::use_cases::login::{LoginParams, LoginUseCase};

pub struct LoginUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub session: Arc<dyn SessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoginUseCase for LoginUseCaseImpl {
    async fn execute(&self, params: LoginParams) -> Result<UserProfile, UserError> {
        let email = normalize_email(&params.email);
        self.logger.info(&format!("Login attempt: {}", email));

        let user = self
            .repository
            .find_by_email(&email)
            .await?
            .ok_or(UserError::NotFound)?;

        if !user.verify_password(&params.password) {
            self.logger
                .warn(&format!("Invalid credentials for {}", email));
            return Err(UserError::InvalidCredentials);
        }

        self.session.set_current(&user.id).await?;

        self.logger.info(&format!("User signed in: {}", user.id));
        Ok(user.profile())
    }
}
