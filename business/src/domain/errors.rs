/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Data could not be serialized for storage
    #[error("repository.persistence")]
    Persistence,
    /// The storage backend itself failed
    #[error("repository.storage_error")]
    StorageError,
}

impl RepositoryError {
    pub fn persistence() -> Self {
        RepositoryError::Persistence
    }
    pub fn storage_error() -> Self {
        RepositoryError::StorageError
    }
}
