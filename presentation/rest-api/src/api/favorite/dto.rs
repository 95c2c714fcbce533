use chrono::{DateTime, Utc};
use poem_openapi::Object;
use poem_openapi::payload::Json;

use business::domain::favorite::model::{FavoriteItem, NewFavoriteProps};
use business::domain::shared::locale::{Locale, LocalizedName};
use business::domain::shared::value_objects::ProductId;

use crate::api::error::ErrorResponse;
use crate::api::money::{to_amount, to_decimal};

#[derive(Debug, Clone, Object)]
pub struct FavoriteRequest {
    pub product_id: u64,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub name_ar: Option<String>,
    pub price: f64,
    /// Defaults to `price`
    #[oai(skip_serializing_if_is_none)]
    pub original_price: Option<f64>,
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
    #[oai(default)]
    pub seller: String,
    #[oai(skip_serializing_if_is_none)]
    pub expiry_date: Option<DateTime<Utc>>,
}

impl FavoriteRequest {
    pub fn into_props(self) -> Result<NewFavoriteProps, Json<ErrorResponse>> {
        let price = to_decimal(self.price, "price")?;
        let original_price = match self.original_price {
            Some(original) => to_decimal(original, "original_price")?,
            None => price,
        };

        Ok(NewFavoriteProps {
            product_id: ProductId::new(self.product_id),
            name: LocalizedName::new(self.name, self.name_ar),
            price,
            original_price,
            image_ref: self.image,
            seller_label: self.seller,
            expiry_date: self.expiry_date,
        })
    }
}

#[derive(Debug, Clone, Object)]
pub struct FavoriteResponse {
    pub product_id: u64,
    pub display_name: String,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub name_ar: Option<String>,
    pub price: f64,
    pub original_price: f64,
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
    pub seller: String,
    #[oai(skip_serializing_if_is_none)]
    pub expiry_date: Option<DateTime<Utc>>,
    pub added_at: DateTime<Utc>,
}

impl FavoriteResponse {
    pub fn from_item(item: FavoriteItem, locale: Locale) -> Self {
        Self {
            product_id: item.product_id.value(),
            display_name: item.name.display(locale).to_string(),
            name: item.name.en,
            name_ar: item.name.ar,
            price: to_amount(item.price),
            original_price: to_amount(item.original_price),
            image: item.image_ref,
            seller: item.seller_label,
            expiry_date: item.expiry_date,
            added_at: item.added_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ToggleFavoriteResponse {
    /// Whether the product is a favorite after the toggle
    pub is_favorite: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> FavoriteRequest {
        FavoriteRequest {
            product_id: 3,
            name: "Labneh".to_string(),
            name_ar: None,
            price: 12.5,
            original_price: None,
            image: None,
            seller: "Dairy Corner".to_string(),
            expiry_date: None,
        }
    }

    #[test]
    fn should_default_original_price_to_price() {
        let props = request().into_props().unwrap();

        assert_eq!(props.original_price, props.price);
    }

    #[test]
    fn should_reject_original_price_above_the_cap() {
        let request = FavoriteRequest {
            original_price: Some(1e28),
            ..request()
        };

        let err = request.into_props().unwrap_err();

        assert_eq!(err.0.message, "money.invalid_amount");
        assert_eq!(err.0.details, Some(vec!["original_price".to_string()]));
    }
}
