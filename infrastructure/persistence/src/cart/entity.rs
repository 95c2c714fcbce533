use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use business::domain::cart::model::CartItem;
use business::domain::shared::locale::LocalizedName;
use business::domain::shared::value_objects::ProductId;

/// Stored cart line. Also embedded in stored orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemEntity {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_ar: Option<String>,
    pub price: Decimal,
    pub original_price: Decimal,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub seller: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<DateTime<Utc>>,
}

impl CartItemEntity {
    pub fn into_domain(self) -> CartItem {
        CartItem::from_repository(
            ProductId::new(self.id),
            LocalizedName::new(self.name, self.name_ar),
            self.price,
            self.original_price,
            self.quantity,
            self.image,
            self.seller,
            self.expiry_date,
        )
    }

    pub fn from_domain(item: &CartItem) -> Self {
        Self {
            id: item.product_id.value(),
            name: item.name.en.clone(),
            name_ar: item.name.ar.clone(),
            price: item.unit_price,
            original_price: item.original_unit_price,
            quantity: item.quantity,
            image: item.image_ref.clone(),
            seller: item.seller_label.clone(),
            expiry_date: item.expiry_date,
        }
    }
}
