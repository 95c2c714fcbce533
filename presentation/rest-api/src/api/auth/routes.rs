use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::user::use_cases::check_email::{CheckEmailParams, CheckExistingEmailUseCase};
use business::domain::user::use_cases::current::GetCurrentUserUseCase;
use business::domain::user::use_cases::login::{LoginParams, LoginUseCase};
use business::domain::user::use_cases::logout::LogoutUseCase;
use business::domain::user::use_cases::register::{RegisterUserParams, RegisterUserUseCase};

use crate::api::auth::dto::{
    CurrentUserResponse, EmailExistsResponse, LoginRequest, RegisterRequest, UserResponse,
    role_from_request,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct AuthApi {
    register_use_case: Arc<dyn RegisterUserUseCase>,
    login_use_case: Arc<dyn LoginUseCase>,
    logout_use_case: Arc<dyn LogoutUseCase>,
    current_user_use_case: Arc<dyn GetCurrentUserUseCase>,
    check_email_use_case: Arc<dyn CheckExistingEmailUseCase>,
}

impl AuthApi {
    pub fn new(
        register_use_case: Arc<dyn RegisterUserUseCase>,
        login_use_case: Arc<dyn LoginUseCase>,
        logout_use_case: Arc<dyn LogoutUseCase>,
        current_user_use_case: Arc<dyn GetCurrentUserUseCase>,
        check_email_use_case: Arc<dyn CheckExistingEmailUseCase>,
    ) -> Self {
        Self {
            register_use_case,
            login_use_case,
            logout_use_case,
            current_user_use_case,
            check_email_use_case,
        }
    }
}

/// Account and session endpoints
///
/// The storefront serves a single browsing session: signing in replaces the
/// current user for every later request.
#[OpenApi]
impl AuthApi {
    /// Register an account
    ///
    /// Creates a buyer or seller account and signs it in.
    #[oai(path = "/auth/register", method = "post", tag = "ApiTags::Auth")]
    async fn register(&self, body: Json<RegisterRequest>) -> RegisterResponse {
        let request = body.0;
        let role = match role_from_request(request.account_type.as_deref(), request.store) {
            Ok(role) => role,
            Err(message) => return RegisterResponse::BadRequest(ErrorResponse::validation(message)),
        };

        let params = RegisterUserParams {
            name: request.name,
            email: request.email,
            password: request.password,
            confirm_password: request.confirm_password,
            phone: request.phone,
            address: request.address,
            bio: request.bio,
            role,
        };

        match self.register_use_case.execute(params).await {
            Ok(user) => RegisterResponse::Created(Json(user.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => RegisterResponse::BadRequest(json),
                    409 => RegisterResponse::Conflict(json),
                    _ => RegisterResponse::InternalError(json),
                }
            }
        }
    }

    /// Sign in
    ///
    /// Unknown emails answer 404 and wrong passwords 401; the current session
    /// is left untouched in both cases.
    #[oai(path = "/auth/login", method = "post", tag = "ApiTags::Auth")]
    async fn login(&self, body: Json<LoginRequest>) -> LoginResponse {
        let params = LoginParams {
            email: body.0.email,
            password: body.0.password,
        };

        match self.login_use_case.execute(params).await {
            Ok(user) => LoginResponse::Ok(Json(user.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => LoginResponse::Unauthorized(json),
                    404 => LoginResponse::NotFound(json),
                    _ => LoginResponse::InternalError(json),
                }
            }
        }
    }

    /// Sign out
    #[oai(path = "/auth/logout", method = "post", tag = "ApiTags::Auth")]
    async fn logout(&self) -> LogoutResponse {
        match self.logout_use_case.execute().await {
            Ok(()) => LogoutResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                LogoutResponse::InternalError(json)
            }
        }
    }

    /// Current user
    #[oai(path = "/auth/me", method = "get", tag = "ApiTags::Auth")]
    async fn me(&self) -> MeResponse {
        match self.current_user_use_case.execute().await {
            Ok(user) => MeResponse::Ok(Json(CurrentUserResponse {
                user: user.map(UserResponse::from),
            })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                MeResponse::InternalError(json)
            }
        }
    }

    /// Check whether an email is registered
    #[oai(path = "/auth/email-exists", method = "get", tag = "ApiTags::Auth")]
    async fn email_exists(&self, email: Query<String>) -> EmailExistsApiResponse {
        match self
            .check_email_use_case
            .execute(CheckEmailParams { email: email.0 })
            .await
        {
            Ok(exists) => EmailExistsApiResponse::Ok(Json(EmailExistsResponse { exists })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => EmailExistsApiResponse::BadRequest(json),
                    _ => EmailExistsApiResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum RegisterResponse {
    #[oai(status = 201)]
    Created(Json<UserResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum LoginResponse {
    #[oai(status = 200)]
    Ok(Json<UserResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum LogoutResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum MeResponse {
    #[oai(status = 200)]
    Ok(Json<CurrentUserResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum EmailExistsApiResponse {
    #[oai(status = 200)]
    Ok(Json<EmailExistsResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
