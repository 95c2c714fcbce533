use super::model::CheckoutStep;

#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("checkout.shipping_incomplete")]
    ShippingIncomplete { missing: Vec<String> },
    #[error("checkout.payment_incomplete")]
    PaymentIncomplete { missing: Vec<String> },
    #[error("checkout.invalid_transition")]
    InvalidTransition { from: CheckoutStep, to: CheckoutStep },
    #[error("checkout.empty_cart")]
    EmptyCart,
    #[error("order.amount_too_large")]
    AmountTooLarge,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
