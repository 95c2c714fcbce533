use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use business::domain::order::model::{
    Order, OrderId, OrderStatus, PaymentMethod, PaymentSummary, ShippingInfo,
};
use business::domain::shared::value_objects::UserId;

use crate::cart::entity::CartItemEntity;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingInfoEntity {
    pub full_name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<ShippingInfoEntity> for ShippingInfo {
    fn from(entity: ShippingInfoEntity) -> Self {
        Self {
            full_name: entity.full_name,
            phone: entity.phone,
            address: entity.address,
            city: entity.city,
            postal_code: entity.postal_code,
            notes: entity.notes,
        }
    }
}

impl From<&ShippingInfo> for ShippingInfoEntity {
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

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderEntity {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    pub date: DateTime<Utc>,
    pub items: Vec<CartItemEntity>,
    pub shipping_info: ShippingInfoEntity,
    pub payment_method: PaymentMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_last4: Option<String>,
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub total: Decimal,
    pub status: OrderStatus,
}

impl OrderEntity {
    pub fn into_domain(self) -> Order {
        Order::from_repository(
            OrderId::new(self.id),
            self.customer_id.map(UserId::new),
            self.date,
            self.items.into_iter().map(|i| i.into_domain()).collect(),
            self.shipping_info.into(),
            PaymentSummary {
                method: self.payment_method,
                card_last4: self.card_last4,
            },
            self.subtotal,
            self.shipping,
            self.total,
            self.status,
        )
    }

    pub fn from_domain(order: &Order) -> Self {
        Self {
            id: order.id.as_str().to_string(),
            customer_id: order.customer_id.as_ref().map(|id| id.as_str().to_string()),
            date: order.created_at,
            items: order.items.iter().map(CartItemEntity::from_domain).collect(),
            shipping_info: (&order.shipping).into(),
            payment_method: order.payment.method,
            card_last4: order.payment.card_last4.clone(),
            subtotal: order.subtotal,
            shipping: order.shipping_cost,
            total: order.total,
            status: order.status,
        }
    }
}
