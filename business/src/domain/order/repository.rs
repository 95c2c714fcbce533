use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{Order, OrderId};

/// Append-only archive of placed orders.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Orders in the order they were placed.
    async fn get_all(&self) -> Result<Vec<Order>, RepositoryError>;
    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, RepositoryError>;
    async fn append(&self, order: &Order) -> Result<(), RepositoryError>;
}
