use poem_openapi::Object;
use poem_openapi::payload::Json;

use business::domain::checkout::model::{CardDetails, CheckoutFlow, PaymentInfo};
use business::domain::order::model::PaymentSummary;

use crate::api::error::ErrorResponse;
use crate::api::order::dto::ShippingInfoDto;

#[derive(Debug, Clone, Object)]
pub struct PaymentRequest {
    /// "card" or "cash"
    pub method: String,
    #[oai(default)]
    pub card_number: String,
    #[oai(default)]
    pub card_name: String,
    #[oai(default)]
    pub expiry: String,
    #[oai(default)]
    pub cvv: String,
}

impl PaymentRequest {
    pub fn into_payment(self) -> Result<PaymentInfo, Json<ErrorResponse>> {
        match self.method.trim().to_lowercase().as_str() {
            "cash" => Ok(PaymentInfo::Cash),
            "card" => Ok(PaymentInfo::Card(CardDetails {
                card_number: self.card_number,
                card_name: self.card_name,
                expiry: self.expiry,
                cvv: self.cvv,
            })),
            _ => Err(ErrorResponse::validation("checkout.invalid_payment_method")),
        }
    }
}

/// Where the wizard stands. Card numbers are only ever shown masked.
#[derive(Debug, Clone, Object)]
pub struct CheckoutStateResponse {
    /// "shipping", "payment", "review" or "confirmation"
    pub step: String,
    #[oai(skip_serializing_if_is_none)]
    pub shipping: Option<ShippingInfoDto>,
    #[oai(skip_serializing_if_is_none)]
    pub payment_method: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub card: Option<String>,
    /// Set once the order is placed
    #[oai(skip_serializing_if_is_none)]
    pub order_id: Option<String>,
}

impl From<&CheckoutFlow> for CheckoutStateResponse {
    fn from(flow: &CheckoutFlow) -> Self {
        let summary: Option<PaymentSummary> = flow.payment().map(PaymentInfo::summary);
        Self {
            step: flow.step().to_string(),
            shipping: flow.shipping().map(ShippingInfoDto::from),
            payment_method: summary.as_ref().map(|s| s.method.to_string()),
            card: summary.as_ref().and_then(PaymentSummary::masked_card),
            order_id: flow.order_id().map(|id| id.to_string()),
        }
    }
}
