use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::clear::ClearCartUseCase;
use crate::domain::logger::Logger;

pub struct ClearCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearCartUseCase for ClearCartUseCaseImpl {
    async fn execute(&self) -> Result<(), CartError> {
        self.logger.info("Clearing cart");
        self.repository.clear().await?;
        Ok(())
    }
}
