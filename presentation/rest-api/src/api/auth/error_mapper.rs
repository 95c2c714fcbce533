use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::user::errors::UserError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for UserError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let status = match &self {
            UserError::NameEmpty
            | UserError::EmailEmpty
            | UserError::InvalidEmail
            | UserError::PasswordTooShort
            | UserError::PasswordMismatch
            | UserError::StoreNameEmpty
            | UserError::NotASeller => StatusCode::BAD_REQUEST,
            UserError::InvalidCredentials | UserError::NotAuthenticated => {
                StatusCode::UNAUTHORIZED
            }
            UserError::NotFound => StatusCode::NOT_FOUND,
            UserError::EmailTaken => StatusCode::CONFLICT,
            UserError::AmountTooLarge | UserError::Repository(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        error_response(status, self)
    }
}
