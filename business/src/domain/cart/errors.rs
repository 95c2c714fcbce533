#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.invalid_quantity")]
    InvalidQuantity,
    #[error("cart.invalid_price")]
    InvalidPrice,
    #[error("cart.amount_too_large")]
    AmountTooLarge,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
