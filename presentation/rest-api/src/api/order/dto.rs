use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::order::errors::OrderError;
use business::domain::order::model::{Order, ShippingInfo};
use business::domain::shared::locale::Locale;

use crate::api::cart::dto::CartItemResponse;
use crate::api::money::to_amount;

#[derive(Debug, Clone, Object)]
pub struct ShippingInfoDto {
    pub full_name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    #[oai(skip_serializing_if_is_none)]
    pub postal_code: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub notes: Option<String>,
}

impl From<ShippingInfoDto> for ShippingInfo {
    fn from(dto: ShippingInfoDto) -> Self {
        Self {
            full_name: dto.full_name,
            phone: dto.phone,
            address: dto.address,
            city: dto.city,
            postal_code: dto.postal_code,
            notes: dto.notes,
        }
    }
}

impl From<&ShippingInfo> for ShippingInfoDto {
    fn from(info: &ShippingInfo) -> Self {
        Self {
            full_name: info.full_name.clone(),
            phone: info.phone.clone(),
            address: info.address.clone(),
            city: info.city.clone(),
            postal_code: info.postal_code.clone(),
            notes: info.notes.clone(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct OrderResponse {
    /// `ED-<number>-<year>`
    pub id: String,
    #[oai(skip_serializing_if_is_none)]
    pub customer_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub items: Vec<CartItemResponse>,
    pub item_count: u32,
    pub shipping: ShippingInfoDto,
    /// "card" or "cash"
    pub payment_method: String,
    /// `**** **** **** 1234` for card payments
    #[oai(skip_serializing_if_is_none)]
    pub card: Option<String>,
    pub subtotal: f64,
    pub shipping_cost: f64,
    pub total: f64,
    /// "processing", "shipped", "delivered" or "cancelled"
    pub status: String,
}

impl TryFrom<Order> for OrderResponse {
    type Error = OrderError;

    fn try_from(order: Order) -> Result<Self, Self::Error> {
        let items: Vec<CartItemResponse> = order
            .lines()?
            .iter()
            .map(|line| CartItemResponse::from_line(line, Locale::default()))
            .collect();

        Ok(Self {
            id: order.id.to_string(),
            customer_id: order.customer_id.as_ref().map(|id| id.to_string()),
            created_at: order.created_at,
            items,
            item_count: order.item_count(),
            shipping: (&order.shipping).into(),
            payment_method: order.payment.method.to_string(),
            card: order.payment.masked_card(),
            subtotal: to_amount(order.subtotal),
            shipping_cost: to_amount(order.shipping_cost),
            total: to_amount(order.total),
            status: order.status.to_string(),
        })
    }
}
