use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Cart;

/// Durable storage for the current session's cart.
///
/// `load` never fails on malformed stored data: implementations fall back to
/// an empty cart.
#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn load(&self) -> Result<Cart, RepositoryError>;
    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
    async fn clear(&self) -> Result<(), RepositoryError>;
}
