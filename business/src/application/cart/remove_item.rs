use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::remove_item::{RemoveCartItemParams, RemoveCartItemUseCase};
use crate::domain::logger::Logger;

pub struct RemoveCartItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveCartItemUseCase for RemoveCartItemUseCaseImpl {
    async fn execute(&self, params: RemoveCartItemParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Removing product {} from cart",
            params.product_id
        ));

        let mut cart = self.repository.load().await?;
        if !cart.remove_item(params.product_id) {
            self.logger.debug(&format!(
                "Product {} not in cart, nothing to remove",
                params.product_id
            ));
            return Ok(cart);
        }

        self.repository.save(&cart).await?;
        Ok(cart)
    }
}
