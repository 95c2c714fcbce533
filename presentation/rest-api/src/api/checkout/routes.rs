use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};
use tokio::sync::Mutex;

use business::domain::checkout::errors::CheckoutError;
use business::domain::checkout::model::{CheckoutFlow, CheckoutStep};
use business::domain::checkout::use_cases::place_order::PlaceOrderUseCase;
use business::domain::order::model::ShippingInfo;

use crate::api::checkout::dto::{CheckoutStateResponse, PaymentRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::order::dto::{OrderResponse, ShippingInfoDto};
use crate::api::tags::ApiTags;

pub struct CheckoutApi {
    flow: Mutex<CheckoutFlow>,
    place_order_use_case: Arc<dyn PlaceOrderUseCase>,
}

impl CheckoutApi {
    pub fn new(place_order_use_case: Arc<dyn PlaceOrderUseCase>) -> Self {
        Self {
            flow: Mutex::new(CheckoutFlow::new()),
            place_order_use_case,
        }
    }

    async fn transition(
        &self,
        step: impl FnOnce(&mut CheckoutFlow) -> Result<CheckoutStep, CheckoutError>,
    ) -> CheckoutStateApiResponse {
        let mut flow = self.flow.lock().await;
        match step(&mut *flow) {
            Ok(_) => CheckoutStateApiResponse::Ok(Json(CheckoutStateResponse::from(&*flow))),
            Err(err) => CheckoutStateApiResponse::from_error(err),
        }
    }
}

/// Checkout wizard: shipping, payment, review, confirmation
///
/// Steps must be completed in order; the edit endpoints step back while
/// keeping what was entered. The wizard lives in memory only, a restart
/// begins a fresh checkout.
#[OpenApi]
impl CheckoutApi {
    /// Current checkout state
    #[oai(path = "/checkout", method = "get", tag = "ApiTags::Checkout")]
    async fn get(&self) -> Json<CheckoutStateResponse> {
        let flow = self.flow.lock().await;
        Json(CheckoutStateResponse::from(&*flow))
    }

    /// Submit shipping details
    ///
    /// Full name, phone, address and city are required.
    #[oai(path = "/checkout/shipping", method = "post", tag = "ApiTags::Checkout")]
    async fn submit_shipping(&self, body: Json<ShippingInfoDto>) -> CheckoutStateApiResponse {
        let info: ShippingInfo = body.0.into();
        self.transition(|flow| flow.submit_shipping(info)).await
    }

    /// Submit payment details
    ///
    /// Card payments need every card field; cash needs none.
    #[oai(path = "/checkout/payment", method = "post", tag = "ApiTags::Checkout")]
    async fn submit_payment(&self, body: Json<PaymentRequest>) -> CheckoutStateApiResponse {
        let payment = match body.0.into_payment() {
            Ok(payment) => payment,
            Err(json) => return CheckoutStateApiResponse::BadRequest(json),
        };
        self.transition(|flow| flow.submit_payment(payment)).await
    }

    /// Go back to shipping
    #[oai(path = "/checkout/edit/shipping", method = "post", tag = "ApiTags::Checkout")]
    async fn edit_shipping(&self) -> CheckoutStateApiResponse {
        self.transition(CheckoutFlow::edit_shipping).await
    }

    /// Go back to payment
    #[oai(path = "/checkout/edit/payment", method = "post", tag = "ApiTags::Checkout")]
    async fn edit_payment(&self) -> CheckoutStateApiResponse {
        self.transition(CheckoutFlow::edit_payment).await
    }

    /// Place the order
    ///
    /// Only from review. Waits for the simulated submission, archives the
    /// order and empties the cart. The wizard stays locked meanwhile.
    #[oai(path = "/checkout/place-order", method = "post", tag = "ApiTags::Checkout")]
    async fn place_order(&self) -> PlaceOrderResponse {
        let mut flow = self.flow.lock().await;
        match self.place_order_use_case.execute(&mut *flow).await {
            Ok(order) => match OrderResponse::try_from(order) {
                Ok(order) => PlaceOrderResponse::Created(Json(order)),
                Err(err) => {
                    let (_status, json) = err.into_error_response();
                    PlaceOrderResponse::InternalError(json)
                }
            },
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => PlaceOrderResponse::BadRequest(json),
                    409 => PlaceOrderResponse::Conflict(json),
                    _ => PlaceOrderResponse::InternalError(json),
                }
            }
        }
    }

    /// Start a new checkout
    #[oai(path = "/checkout/reset", method = "post", tag = "ApiTags::Checkout")]
    async fn reset(&self) -> Json<CheckoutStateResponse> {
        let mut flow = self.flow.lock().await;
        *flow = CheckoutFlow::new();
        Json(CheckoutStateResponse::from(&*flow))
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CheckoutStateApiResponse {
    #[oai(status = 200)]
    Ok(Json<CheckoutStateResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl CheckoutStateApiResponse {
    fn from_error(err: CheckoutError) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => Self::BadRequest(json),
            409 => Self::Conflict(json),
            _ => Self::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum PlaceOrderResponse {
    #[oai(status = 201)]
    Created(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
