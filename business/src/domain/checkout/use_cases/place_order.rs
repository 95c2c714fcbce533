use async_trait::async_trait;

use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::model::CheckoutFlow;
use crate::domain::order::model::Order;

/// Turns the cart into an order and moves `flow` to confirmation.
///
/// Nothing is written until the submission delay has elapsed, so dropping
/// the future early leaves the cart and the archive as they were.
#[async_trait]
pub trait PlaceOrderUseCase: Send + Sync {
    async fn execute(&self, flow: &mut CheckoutFlow) -> Result<Order, CheckoutError>;
}
