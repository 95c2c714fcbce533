use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, param::Query, payload::Json};

use business::domain::cart::errors::CartError;
use business::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use business::domain::cart::use_cases::clear::ClearCartUseCase;
use business::domain::cart::use_cases::get::GetCartUseCase;
use business::domain::cart::use_cases::remove_item::{RemoveCartItemParams, RemoveCartItemUseCase};
use business::domain::cart::use_cases::update_quantity::{
    UpdateCartQuantityParams, UpdateCartQuantityUseCase,
};
use business::domain::shared::locale::Locale;
use business::domain::shared::value_objects::ProductId;

use crate::api::cart::dto::{AddCartItemRequest, CartResponse, UpdateQuantityRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::locale::parse_locale;
use crate::api::tags::ApiTags;

pub struct CartApi {
    get_use_case: Arc<dyn GetCartUseCase>,
    add_item_use_case: Arc<dyn AddCartItemUseCase>,
    update_quantity_use_case: Arc<dyn UpdateCartQuantityUseCase>,
    remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
    clear_use_case: Arc<dyn ClearCartUseCase>,
}

impl CartApi {
    pub fn new(
        get_use_case: Arc<dyn GetCartUseCase>,
        add_item_use_case: Arc<dyn AddCartItemUseCase>,
        update_quantity_use_case: Arc<dyn UpdateCartQuantityUseCase>,
        remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
        clear_use_case: Arc<dyn ClearCartUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            add_item_use_case,
            update_quantity_use_case,
            remove_item_use_case,
            clear_use_case,
        }
    }

    async fn summary(&self, locale: Locale) -> CartApiResponse {
        match self.get_use_case.execute().await {
            Ok(summary) => CartApiResponse::Ok(Json(CartResponse::from_summary(&summary, locale))),
            Err(err) => CartApiResponse::from_error(err),
        }
    }
}

/// Shopping cart of the current session
///
/// Every mutation is persisted immediately and answers with the updated cart
/// and its totals. `locale` ("en" or "ar") selects the display names.
#[OpenApi]
impl CartApi {
    /// Get the cart
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get(&self, locale: Query<Option<String>>) -> CartApiResponse {
        match parse_locale(locale.0) {
            Ok(locale) => self.summary(locale).await,
            Err(json) => CartApiResponse::BadRequest(json),
        }
    }

    /// Add an item
    ///
    /// Adding a product already in the cart increases its quantity.
    #[oai(path = "/cart/items", method = "post", tag = "ApiTags::Cart")]
    async fn add_item(
        &self,
        locale: Query<Option<String>>,
        body: Json<AddCartItemRequest>,
    ) -> CartApiResponse {
        let locale = match parse_locale(locale.0) {
            Ok(locale) => locale,
            Err(json) => return CartApiResponse::BadRequest(json),
        };
        let item = match body.0.into_props() {
            Ok(item) => item,
            Err(json) => return CartApiResponse::BadRequest(json),
        };

        match self.add_item_use_case.execute(AddCartItemParams { item }).await {
            Ok(_) => self.summary(locale).await,
            Err(err) => CartApiResponse::from_error(err),
        }
    }

    /// Change an item's quantity
    ///
    /// A quantity of zero or less removes the item. Unknown products are ignored.
    #[oai(path = "/cart/items/:product_id", method = "put", tag = "ApiTags::Cart")]
    async fn update_quantity(
        &self,
        product_id: Path<u64>,
        locale: Query<Option<String>>,
        body: Json<UpdateQuantityRequest>,
    ) -> CartApiResponse {
        let locale = match parse_locale(locale.0) {
            Ok(locale) => locale,
            Err(json) => return CartApiResponse::BadRequest(json),
        };
        let params = UpdateCartQuantityParams {
            product_id: ProductId::new(product_id.0),
            quantity: body.0.quantity,
        };

        match self.update_quantity_use_case.execute(params).await {
            Ok(_) => self.summary(locale).await,
            Err(err) => CartApiResponse::from_error(err),
        }
    }

    /// Remove an item
    #[oai(path = "/cart/items/:product_id", method = "delete", tag = "ApiTags::Cart")]
    async fn remove_item(
        &self,
        product_id: Path<u64>,
        locale: Query<Option<String>>,
    ) -> CartApiResponse {
        let locale = match parse_locale(locale.0) {
            Ok(locale) => locale,
            Err(json) => return CartApiResponse::BadRequest(json),
        };
        let params = RemoveCartItemParams {
            product_id: ProductId::new(product_id.0),
        };

        match self.remove_item_use_case.execute(params).await {
            Ok(_) => self.summary(locale).await,
            Err(err) => CartApiResponse::from_error(err),
        }
    }

    /// Empty the cart
    #[oai(path = "/cart", method = "delete", tag = "ApiTags::Cart")]
    async fn clear(&self) -> ClearCartResponse {
        match self.clear_use_case.execute().await {
            Ok(()) => ClearCartResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ClearCartResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartApiResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl CartApiResponse {
    fn from_error(err: CartError) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => Self::BadRequest(json),
            _ => Self::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ClearCartResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
