#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("user.name_empty")]
    NameEmpty,
    #[error("user.email_empty")]
    EmailEmpty,
    #[error("user.invalid_email")]
    InvalidEmail,
    #[error("user.password_too_short")]
    PasswordTooShort,
    #[error("user.password_mismatch")]
    PasswordMismatch,
    #[error("user.store_name_empty")]
    StoreNameEmpty,
    #[error("user.email_taken")]
    EmailTaken,
    #[error("user.not_found")]
    NotFound,
    #[error("user.invalid_credentials")]
    InvalidCredentials,
    #[error("user.not_authenticated")]
    NotAuthenticated,
    #[error("user.not_a_seller")]
    NotASeller,
    #[error("order.amount_too_large")]
    AmountTooLarge,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
