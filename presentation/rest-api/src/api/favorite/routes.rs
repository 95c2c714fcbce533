use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, param::Query, payload::Json};

use business::domain::favorite::errors::FavoriteError;
use business::domain::favorite::model::FavoriteItem;
use business::domain::favorite::use_cases::add::{AddFavoriteParams, AddFavoriteUseCase};
use business::domain::favorite::use_cases::get_all::{GetFavoritesParams, GetFavoritesUseCase};
use business::domain::favorite::use_cases::remove::{RemoveFavoriteParams, RemoveFavoriteUseCase};
use business::domain::favorite::use_cases::toggle::{ToggleFavoriteParams, ToggleFavoriteUseCase};
use business::domain::shared::locale::Locale;
use business::domain::shared::value_objects::ProductId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::favorite::dto::{FavoriteRequest, FavoriteResponse, ToggleFavoriteResponse};
use crate::api::locale::parse_locale;
use crate::api::tags::ApiTags;

pub struct FavoriteApi {
    get_all_use_case: Arc<dyn GetFavoritesUseCase>,
    add_use_case: Arc<dyn AddFavoriteUseCase>,
    toggle_use_case: Arc<dyn ToggleFavoriteUseCase>,
    remove_use_case: Arc<dyn RemoveFavoriteUseCase>,
}

impl FavoriteApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetFavoritesUseCase>,
        add_use_case: Arc<dyn AddFavoriteUseCase>,
        toggle_use_case: Arc<dyn ToggleFavoriteUseCase>,
        remove_use_case: Arc<dyn RemoveFavoriteUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            add_use_case,
            toggle_use_case,
            remove_use_case,
        }
    }
}

fn render(items: Vec<FavoriteItem>, locale: Locale) -> FavoritesApiResponse {
    FavoritesApiResponse::Ok(Json(
        items
            .into_iter()
            .map(|item| FavoriteResponse::from_item(item, locale))
            .collect(),
    ))
}

/// Products saved for later
#[OpenApi]
impl FavoriteApi {
    /// List favorites
    ///
    /// `q` filters by English or Arabic name and seller, ignoring case.
    #[oai(path = "/favorites", method = "get", tag = "ApiTags::Favorites")]
    async fn get_all(
        &self,
        q: Query<Option<String>>,
        locale: Query<Option<String>>,
    ) -> FavoritesApiResponse {
        let locale = match parse_locale(locale.0) {
            Ok(locale) => locale,
            Err(json) => return FavoritesApiResponse::BadRequest(json),
        };

        match self
            .get_all_use_case
            .execute(GetFavoritesParams { query: q.0 })
            .await
        {
            Ok(items) => render(items, locale),
            Err(err) => FavoritesApiResponse::from_error(err),
        }
    }

    /// Add a favorite
    ///
    /// Adding a product twice keeps a single entry.
    #[oai(path = "/favorites", method = "post", tag = "ApiTags::Favorites")]
    async fn add(
        &self,
        locale: Query<Option<String>>,
        body: Json<FavoriteRequest>,
    ) -> FavoritesApiResponse {
        let locale = match parse_locale(locale.0) {
            Ok(locale) => locale,
            Err(json) => return FavoritesApiResponse::BadRequest(json),
        };
        let item = match body.0.into_props() {
            Ok(item) => item,
            Err(json) => return FavoritesApiResponse::BadRequest(json),
        };

        match self.add_use_case.execute(AddFavoriteParams { item }).await {
            Ok(items) => render(items, locale),
            Err(err) => FavoritesApiResponse::from_error(err),
        }
    }

    /// Toggle a favorite
    #[oai(path = "/favorites/toggle", method = "post", tag = "ApiTags::Favorites")]
    async fn toggle(&self, body: Json<FavoriteRequest>) -> ToggleFavoriteApiResponse {
        let item = match body.0.into_props() {
            Ok(item) => item,
            Err(json) => return ToggleFavoriteApiResponse::BadRequest(json),
        };

        match self
            .toggle_use_case
            .execute(ToggleFavoriteParams { item })
            .await
        {
            Ok(is_favorite) => {
                ToggleFavoriteApiResponse::Ok(Json(ToggleFavoriteResponse { is_favorite }))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ToggleFavoriteApiResponse::BadRequest(json),
                    _ => ToggleFavoriteApiResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove a favorite
    #[oai(
        path = "/favorites/:product_id",
        method = "delete",
        tag = "ApiTags::Favorites"
    )]
    async fn remove(
        &self,
        product_id: Path<u64>,
        locale: Query<Option<String>>,
    ) -> FavoritesApiResponse {
        let locale = match parse_locale(locale.0) {
            Ok(locale) => locale,
            Err(json) => return FavoritesApiResponse::BadRequest(json),
        };
        let params = RemoveFavoriteParams {
            product_id: ProductId::new(product_id.0),
        };

        match self.remove_use_case.execute(params).await {
            Ok(items) => render(items, locale),
            Err(err) => FavoritesApiResponse::from_error(err),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum FavoritesApiResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<FavoriteResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl FavoritesApiResponse {
    fn from_error(err: FavoriteError) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => Self::BadRequest(json),
            _ => Self::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ToggleFavoriteApiResponse {
    #[oai(status = 200)]
    Ok(Json<ToggleFavoriteResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
