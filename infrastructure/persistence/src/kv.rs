use async_trait::async_trait;

use business::domain::errors::RepositoryError;

/// String-keyed storage holding one JSON document per key.
///
/// Writes are last-writer-wins: there is no versioning or conflict detection.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError>;
    async fn remove(&self, key: &str) -> Result<(), RepositoryError>;
}
