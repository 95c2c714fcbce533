use poem_openapi::payload::Json;
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

use business::domain::shared::value_objects::MAX_UNIT_PRICE;

use crate::api::error::ErrorResponse;

/// JSON prices arrive as numbers; amounts are kept to the cent and capped at
/// the highest accepted unit price.
pub fn to_decimal(value: f64, field: &str) -> Result<Decimal, Json<ErrorResponse>> {
    Decimal::from_f64(value)
        .filter(|_| value.is_finite())
        .map(|d| d.round_dp(2))
        .filter(|d| *d <= MAX_UNIT_PRICE)
        .ok_or_else(|| {
            let mut error = ErrorResponse::new("ValidationError", "money.invalid_amount");
            error.details = Some(vec![field.to_string()]);
            Json(error)
        })
}

pub fn to_amount(value: Decimal) -> f64 {
    value.round_dp(2).to_f64().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_round_to_cents() {
        assert_eq!(to_decimal(22.499, "price").unwrap(), Decimal::new(2250, 2));
    }

    #[test]
    fn should_reject_non_finite_amounts() {
        let err = to_decimal(f64::NAN, "price").unwrap_err();
        assert_eq!(err.0.details, Some(vec!["price".to_string()]));
    }

    #[test]
    fn should_reject_amounts_above_the_price_cap() {
        assert!(to_decimal(1_000_000.0, "price").is_ok());

        let err = to_decimal(1e28, "original_price").unwrap_err();
        assert_eq!(err.0.message, "money.invalid_amount");
        assert_eq!(err.0.details, Some(vec!["original_price".to_string()]));
    }

    #[test]
    fn should_render_decimal_as_number() {
        assert_eq!(to_amount(Decimal::new(5900, 2)), 59.0);
    }
}
