use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use business::domain::favorite::model::FavoriteItem;
use business::domain::shared::locale::LocalizedName;
use business::domain::shared::value_objects::ProductId;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteEntity {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_ar: Option<String>,
    pub price: Decimal,
    pub original_price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub seller: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<DateTime<Utc>>,
    pub added_at: DateTime<Utc>,
}

impl FavoriteEntity {
    pub fn into_domain(self) -> FavoriteItem {
        FavoriteItem::from_repository(
            ProductId::new(self.id),
            LocalizedName::new(self.name, self.name_ar),
            self.price,
            self.original_price,
            self.image,
            self.seller,
            self.expiry_date,
            self.added_at,
        )
    }

    pub fn from_domain(item: &FavoriteItem) -> Self {
        Self {
            id: item.product_id.value(),
            name: item.name.en.clone(),
            name_ar: item.name.ar.clone(),
            price: item.price,
            original_price: item.original_price,
            image: item.image_ref.clone(),
            seller: item.seller_label.clone(),
            expiry_date: item.expiry_date,
            added_at: item.added_at,
        }
    }
}
