use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartSummary;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::get::GetCartUseCase;
use crate::domain::logger::Logger;

pub struct GetCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub shipping_fee: Decimal,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartUseCase for GetCartUseCaseImpl {
    async fn execute(&self) -> Result<CartSummary, CartError> {
        self.logger.debug("Loading cart");
        let cart = self.repository.load().await?;
        cart.summary(self.shipping_fee)
    }
}
