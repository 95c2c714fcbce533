use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
    /// Offending fields, for validation errors that name them
    #[oai(skip_serializing_if_is_none)]
    pub details: Option<Vec<String>>,
}

impl ErrorResponse {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
            details: None,
        }
    }

    pub fn validation(message: &str) -> Json<Self> {
        Json(Self::new("ValidationError", message))
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Shared status/name pairs so every mapper answers alike.
pub fn error_response(
    status: StatusCode,
    message: impl std::fmt::Display,
) -> (StatusCode, Json<ErrorResponse>) {
    let name = match status {
        StatusCode::BAD_REQUEST => "ValidationError",
        StatusCode::UNAUTHORIZED => "Unauthorized",
        StatusCode::NOT_FOUND => "NotFound",
        StatusCode::CONFLICT => "Conflict",
        _ => "InternalError",
    };
    (status, Json(ErrorResponse::new(name, &message.to_string())))
}
