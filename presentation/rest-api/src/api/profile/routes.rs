use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::user::errors::UserError;
use business::domain::user::use_cases::current::GetCurrentUserUseCase;
use business::domain::user::use_cases::dashboard::GetProfileDashboardUseCase;
use business::domain::user::use_cases::update_profile::UpdateProfileUseCase;

use crate::api::auth::dto::UserResponse;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::profile::dto::{DashboardResponse, UpdateProfileRequest};
use crate::api::tags::ApiTags;

pub struct ProfileApi {
    current_user_use_case: Arc<dyn GetCurrentUserUseCase>,
    update_use_case: Arc<dyn UpdateProfileUseCase>,
    dashboard_use_case: Arc<dyn GetProfileDashboardUseCase>,
}

impl ProfileApi {
    pub fn new(
        current_user_use_case: Arc<dyn GetCurrentUserUseCase>,
        update_use_case: Arc<dyn UpdateProfileUseCase>,
        dashboard_use_case: Arc<dyn GetProfileDashboardUseCase>,
    ) -> Self {
        Self {
            current_user_use_case,
            update_use_case,
            dashboard_use_case,
        }
    }
}

/// Profile of the signed-in user
#[OpenApi]
impl ProfileApi {
    /// Get the profile
    #[oai(path = "/profile", method = "get", tag = "ApiTags::Profile")]
    async fn get(&self) -> ProfileResponse {
        let result = self
            .current_user_use_case
            .execute()
            .await
            .and_then(|user| user.ok_or(UserError::NotAuthenticated));

        match result {
            Ok(user) => ProfileResponse::Ok(Json(user.into())),
            Err(err) => ProfileResponse::from_error(err),
        }
    }

    /// Update the profile
    ///
    /// Merges the given fields. Store fields are rejected on buyer accounts
    /// and a new email must not belong to another account.
    #[oai(path = "/profile", method = "put", tag = "ApiTags::Profile")]
    async fn update(&self, body: Json<UpdateProfileRequest>) -> ProfileResponse {
        match self.update_use_case.execute(body.0.into()).await {
            Ok(user) => ProfileResponse::Ok(Json(user.into())),
            Err(err) => ProfileResponse::from_error(err),
        }
    }

    /// Profile dashboard
    ///
    /// The user together with their order history, total spent and number of
    /// favorites.
    #[oai(path = "/profile/dashboard", method = "get", tag = "ApiTags::Profile")]
    async fn dashboard(&self) -> DashboardApiResponse {
        match self.dashboard_use_case.execute().await {
            Ok(dashboard) => match DashboardResponse::try_from(dashboard) {
                Ok(dashboard) => DashboardApiResponse::Ok(Json(dashboard)),
                Err(err) => {
                    let (_status, json) = err.into_error_response();
                    DashboardApiResponse::InternalError(json)
                }
            },
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => DashboardApiResponse::Unauthorized(json),
                    _ => DashboardApiResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ProfileResponse {
    #[oai(status = 200)]
    Ok(Json<UserResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl ProfileResponse {
    fn from_error(err: UserError) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => Self::BadRequest(json),
            401 => Self::Unauthorized(json),
            409 => Self::Conflict(json),
            _ => Self::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum DashboardApiResponse {
    #[oai(status = 200)]
    Ok(Json<DashboardResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
