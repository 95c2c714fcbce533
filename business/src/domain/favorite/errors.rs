#[derive(Debug, thiserror::Error)]
pub enum FavoriteError {
    #[error("favorite.invalid_price")]
    InvalidPrice,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
