use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::checkout::errors::CheckoutError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for CheckoutError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, details) = match &self {
            CheckoutError::ShippingIncomplete { missing }
            | CheckoutError::PaymentIncomplete { missing } => {
                (StatusCode::BAD_REQUEST, Some(missing.clone()))
            }
            CheckoutError::EmptyCart | CheckoutError::AmountTooLarge => {
                (StatusCode::BAD_REQUEST, None)
            }
            CheckoutError::InvalidTransition { from, to } => (
                StatusCode::CONFLICT,
                Some(vec![format!("{} -> {}", from, to)]),
            ),
            CheckoutError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, None),
        };

        let (status, mut json) = error_response(status, self);
        json.0.details = details;
        (status, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::checkout::model::CheckoutStep;

    #[test]
    fn should_list_missing_shipping_fields() {
        let (status, body) = CheckoutError::ShippingIncomplete {
            missing: vec!["phone".to_string(), "city".to_string()],
        }
        .into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.0.message, "checkout.shipping_incomplete");
        assert_eq!(
            body.0.details,
            Some(vec!["phone".to_string(), "city".to_string()])
        );
    }

    #[test]
    fn should_report_out_of_order_step_as_conflict() {
        let (status, body) = CheckoutError::InvalidTransition {
            from: CheckoutStep::Shipping,
            to: CheckoutStep::Confirmation,
        }
        .into_error_response();

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(
            body.0.details,
            Some(vec!["shipping -> confirmation".to_string()])
        );
    }
}
