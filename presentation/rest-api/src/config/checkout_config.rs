use std::env;
use std::str::FromStr;
use std::time::Duration;

use rust_decimal::Decimal;

/// Checkout pricing and timing
///
/// Environment variables:
/// - SHIPPING_FLAT_FEE: Flat shipping fee for a non-empty cart (default: 15)
/// - ORDER_SUBMISSION_DELAY_MS: Simulated order submission delay (default: 1500)
#[derive(Debug, Clone)]
pub struct CheckoutConfig {
    pub shipping_fee: Decimal,
    pub submission_delay: Duration,
}

impl CheckoutConfig {
    pub fn from_env() -> Self {
        let shipping_fee = parse_or(
            "SHIPPING_FLAT_FEE",
            env::var("SHIPPING_FLAT_FEE").ok(),
            Decimal::from(15),
        )
        .max(Decimal::ZERO);
        let delay_ms = parse_or(
            "ORDER_SUBMISSION_DELAY_MS",
            env::var("ORDER_SUBMISSION_DELAY_MS").ok(),
            1500u64,
        );

        Self {
            shipping_fee,
            submission_delay: Duration::from_millis(delay_ms),
        }
    }
}

fn parse_or<T: FromStr>(name: &str, raw: Option<String>, default: T) -> T {
    match raw {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid {} value {:?}, using default", name, raw);
            default
        }),
    }
}
