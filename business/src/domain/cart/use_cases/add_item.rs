use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, NewCartItemProps};

pub struct AddCartItemParams {
    pub item: NewCartItemProps,
}

#[async_trait]
pub trait AddCartItemUseCase: Send + Sync {
    async fn execute(&self, params: AddCartItemParams) -> Result<Cart, CartError>;
}
