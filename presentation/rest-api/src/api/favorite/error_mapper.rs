use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::favorite::errors::FavoriteError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for FavoriteError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let status = match &self {
            FavoriteError::InvalidPrice => StatusCode::BAD_REQUEST,
            FavoriteError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        error_response(status, self)
    }
}
