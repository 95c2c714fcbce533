use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::errors::FavoriteError;
use crate::domain::shared::locale::LocalizedName;
use crate::domain::shared::value_objects::{MAX_UNIT_PRICE, ProductId};

/// Snapshot of a product saved for later.
#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteItem {
    pub product_id: ProductId,
    pub name: LocalizedName,
    pub price: Decimal,
    pub original_price: Decimal,
    pub image_ref: Option<String>,
    pub seller_label: String,
    pub expiry_date: Option<DateTime<Utc>>,
    pub added_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct NewFavoriteProps {
    pub product_id: ProductId,
    pub name: LocalizedName,
    pub price: Decimal,
    pub original_price: Decimal,
    pub image_ref: Option<String>,
    pub seller_label: String,
    pub expiry_date: Option<DateTime<Utc>>,
}

impl FavoriteItem {
    pub fn new(props: NewFavoriteProps) -> Result<Self, FavoriteError> {
        let in_range = |price: Decimal| !price.is_sign_negative() && price <= MAX_UNIT_PRICE;
        if !in_range(props.price) || !in_range(props.original_price) {
            return Err(FavoriteError::InvalidPrice);
        }

        Ok(Self {
            product_id: props.product_id,
            name: props.name,
            price: props.price,
            original_price: props.original_price,
            image_ref: props.image_ref,
            seller_label: props.seller_label,
            expiry_date: props.expiry_date,
            added_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        product_id: ProductId,
        name: LocalizedName,
        price: Decimal,
        original_price: Decimal,
        image_ref: Option<String>,
        seller_label: String,
        expiry_date: Option<DateTime<Utc>>,
        added_at: DateTime<Utc>,
    ) -> Self {
        Self {
            product_id,
            name,
            price,
            original_price,
            image_ref,
            seller_label,
            expiry_date,
            added_at,
        }
    }

    /// Case-insensitive match on either name variant or the seller label.
    /// A blank query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        needle.is_empty()
            || self.name.matches(&needle)
            || self.seller_label.to_lowercase().contains(&needle)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn favorite(product_id: u64, en: &str, ar: Option<&str>) -> FavoriteItem {
        FavoriteItem::new(NewFavoriteProps {
            product_id: ProductId::new(product_id),
            name: LocalizedName::new(en, ar.map(str::to_string)),
            price: Decimal::from(12),
            original_price: Decimal::from(20),
            image_ref: None,
            seller_label: "Fresh Market".to_string(),
            expiry_date: None,
        })
        .unwrap()
    }

    #[test]
    fn should_match_english_name_ignoring_case() {
        let item = favorite(1, "Greek Yogurt", None);

        assert!(item.matches("yogurt"));
        assert!(item.matches("GREEK"));
        assert!(!item.matches("milk"));
    }

    #[test]
    fn should_match_arabic_name_and_seller() {
        let item = favorite(2, "Dates", Some("تمر"));

        assert!(item.matches("تمر"));
        assert!(item.matches("fresh market"));
    }

    #[test]
    fn should_match_everything_on_blank_query() {
        assert!(favorite(3, "Bread", None).matches("   "));
    }

    #[test]
    fn should_reject_negative_price() {
        let result = FavoriteItem::new(NewFavoriteProps {
            product_id: ProductId::new(4),
            name: LocalizedName::new("Milk", None),
            price: Decimal::from(-1),
            original_price: Decimal::from(5),
            image_ref: None,
            seller_label: String::new(),
            expiry_date: None,
        });

        assert!(matches!(result.unwrap_err(), FavoriteError::InvalidPrice));
    }

    #[test]
    fn should_reject_price_above_the_cap() {
        let result = FavoriteItem::new(NewFavoriteProps {
            product_id: ProductId::new(5),
            name: LocalizedName::new("Saffron", None),
            price: Decimal::from(12),
            original_price: Decimal::from_i128_with_scale(10i128.pow(28), 0),
            image_ref: None,
            seller_label: String::new(),
            expiry_date: None,
        });

        assert!(matches!(result.unwrap_err(), FavoriteError::InvalidPrice));
    }
}
