use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::order::model::OrderId;
use business::domain::order::use_cases::get_all::GetAllOrdersUseCase;
use business::domain::order::use_cases::get_by_id::{GetOrderByIdParams, GetOrderByIdUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::order::dto::OrderResponse;
use crate::api::tags::ApiTags;

pub struct OrderApi {
    get_all_use_case: Arc<dyn GetAllOrdersUseCase>,
    get_by_id_use_case: Arc<dyn GetOrderByIdUseCase>,
}

impl OrderApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllOrdersUseCase>,
        get_by_id_use_case: Arc<dyn GetOrderByIdUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_id_use_case,
        }
    }
}

/// Archive of placed orders
#[OpenApi]
impl OrderApi {
    /// List orders
    ///
    /// Newest first.
    #[oai(path = "/orders", method = "get", tag = "ApiTags::Orders")]
    async fn get_all(&self) -> GetAllOrdersResponse {
        match self.get_all_use_case.execute().await {
            Ok(orders) => match orders
                .into_iter()
                .map(OrderResponse::try_from)
                .collect::<Result<Vec<_>, _>>()
            {
                Ok(orders) => GetAllOrdersResponse::Ok(Json(orders)),
                Err(err) => {
                    let (_status, json) = err.into_error_response();
                    GetAllOrdersResponse::InternalError(json)
                }
            },
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllOrdersResponse::InternalError(json)
            }
        }
    }

    /// Get an order
    #[oai(path = "/orders/:id", method = "get", tag = "ApiTags::Orders")]
    async fn get_by_id(&self, id: Path<String>) -> GetOrderResponse {
        let params = GetOrderByIdParams {
            id: OrderId::new(id.0),
        };

        match self
            .get_by_id_use_case
            .execute(params)
            .await
            .and_then(OrderResponse::try_from)
        {
            Ok(order) => GetOrderResponse::Ok(Json(order)),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetOrderResponse::NotFound(json),
                    _ => GetOrderResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllOrdersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<OrderResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetOrderResponse {
    #[oai(status = 200)]
    Ok(Json<OrderResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
