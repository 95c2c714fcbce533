use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::session::SessionRepository;
use crate::domain::user::use_cases::logout::LogoutUseCase;

pub struct LogoutUseCaseImpl {
    pub session: Arc<dyn SessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LogoutUseCase for LogoutUseCaseImpl {
    async fn execute(&self) -> Result<(), UserError> {
        self.logger.info("Signing out");
        self.session.clear().await?;
        Ok(())
    }
}
