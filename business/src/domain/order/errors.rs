#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("order.not_found")]
    NotFound,
    #[error("order.amount_too_large")]
    AmountTooLarge,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
