use chrono::{DateTime, Utc};
use poem_openapi::Object;
use poem_openapi::payload::Json;

use business::domain::cart::model::{CartLine, CartSummary, NewCartItemProps};
use business::domain::shared::locale::{Locale, LocalizedName};
use business::domain::shared::value_objects::ProductId;

use crate::api::error::ErrorResponse;
use crate::api::money::{to_amount, to_decimal};

#[derive(Debug, Clone, Object)]
pub struct AddCartItemRequest {
    pub product_id: u64,
    /// English name
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub name_ar: Option<String>,
    /// Discounted unit price
    pub price: f64,
    /// Price before the discount; defaults to `price`
    #[oai(skip_serializing_if_is_none)]
    pub original_price: Option<f64>,
    /// Defaults to 1
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<u32>,
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
    #[oai(default)]
    pub seller: String,
    #[oai(skip_serializing_if_is_none)]
    pub expiry_date: Option<DateTime<Utc>>,
}

impl AddCartItemRequest {
    pub fn into_props(self) -> Result<NewCartItemProps, Json<ErrorResponse>> {
        let unit_price = to_decimal(self.price, "price")?;
        let original_unit_price = match self.original_price {
            Some(original) => to_decimal(original, "original_price")?,
            None => unit_price,
        };

        Ok(NewCartItemProps {
            product_id: ProductId::new(self.product_id),
            name: LocalizedName::new(self.name, self.name_ar),
            unit_price,
            original_unit_price,
            quantity: self.quantity.unwrap_or(1),
            image_ref: self.image,
            seller_label: self.seller,
            expiry_date: self.expiry_date,
        })
    }
}

#[derive(Debug, Clone, Object)]
pub struct UpdateQuantityRequest {
    /// Zero or negative removes the line
    pub quantity: i64,
}

#[derive(Debug, Clone, Object)]
pub struct CartItemResponse {
    pub product_id: u64,
    /// Name in the requested locale
    pub display_name: String,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub name_ar: Option<String>,
    pub price: f64,
    pub original_price: f64,
    pub quantity: u32,
    pub line_total: f64,
    pub line_savings: f64,
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
    pub seller: String,
    #[oai(skip_serializing_if_is_none)]
    pub expiry_date: Option<DateTime<Utc>>,
}

impl CartItemResponse {
    pub fn from_line(line: &CartLine, locale: Locale) -> Self {
        let item = &line.item;
        Self {
            product_id: item.product_id.value(),
            display_name: item.name.display(locale).to_string(),
            name: item.name.en.clone(),
            name_ar: item.name.ar.clone(),
            price: to_amount(item.unit_price),
            original_price: to_amount(item.original_unit_price),
            quantity: item.quantity,
            line_total: to_amount(line.line_total),
            line_savings: to_amount(line.line_savings),
            image: item.image_ref.clone(),
            seller: item.seller_label.clone(),
            expiry_date: item.expiry_date,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    /// "en" or "ar"
    pub locale: String,
    /// Whether the locale reads right-to-left
    pub rtl: bool,
    pub items: Vec<CartItemResponse>,
    pub item_count: u32,
    pub subtotal: f64,
    pub savings: f64,
    pub shipping_cost: f64,
    pub total: f64,
}

impl CartResponse {
    pub fn from_summary(summary: &CartSummary, locale: Locale) -> Self {
        Self {
            locale: locale.to_string(),
            rtl: locale.is_rtl(),
            items: summary
                .lines
                .iter()
                .map(|line| CartItemResponse::from_line(line, locale))
                .collect(),
            item_count: summary.item_count,
            subtotal: to_amount(summary.subtotal),
            savings: to_amount(summary.savings),
            shipping_cost: to_amount(summary.shipping_cost),
            total: to_amount(summary.total),
        }
    }
}
