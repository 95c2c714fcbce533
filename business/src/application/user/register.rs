use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::notifier::Notifier;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::{NewUserProps, User, UserProfile};
use crate::domain::user::repository::UserRepository;
use crate::domain::user::session::SessionRepository;
use crate::domain::user::use_cases::register::{RegisterUserParams, RegisterUserUseCase};

pub struct RegisterUserUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub session: Arc<dyn SessionRepository>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RegisterUserUseCase for RegisterUserUseCaseImpl {
    async fn execute(&self, params: RegisterUserParams) -> Result<UserProfile, UserError> {
        self.logger.info(&format!(
            "Registering {} account: {}",
            params.role.account_type(),
            params.email
        ));

        let user = User::new(NewUserProps {
            name: params.name,
            email: params.email,
            password: params.password,
            confirm_password: params.confirm_password,
            phone: params.phone,
            address: params.address,
            bio: params.bio,
            role: params.role,
        })?;

        if self.repository.find_by_email(&user.email).await?.is_some() {
            self.logger
                .warn(&format!("Email {} is already registered", user.email));
            return Err(UserError::EmailTaken);
        }

        self.repository.save(&user).await?;
        self.session.set_current(&user.id).await?;

        self.notifier.notify("auth.registered", &user.name);
        self.logger.info(&format!("User registered: {}", user.id));
        Ok(user.profile())
    }
}
