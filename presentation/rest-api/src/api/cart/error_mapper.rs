use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let status = match &self {
            CartError::InvalidQuantity | CartError::InvalidPrice | CartError::AmountTooLarge => {
                StatusCode::BAD_REQUEST
            }
            CartError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        error_response(status, self)
    }
}
