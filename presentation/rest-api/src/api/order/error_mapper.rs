use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::order::errors::OrderError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for OrderError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let status = match &self {
            OrderError::NotFound => StatusCode::NOT_FOUND,
            OrderError::AmountTooLarge | OrderError::Repository(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        error_response(status, self)
    }
}
