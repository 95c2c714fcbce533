use std::sync::LazyLock;

use chrono::{DateTime, Datelike, Utc};
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::errors::OrderError;
use crate::domain::cart::model::{CartItem, CartLine, subtotal_of};
use crate::domain::shared::value_objects::UserId;

static ORDER_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ED-\d{1,4}-\d{4}$").expect("Invalid regex"));

/// Human-readable order reference, `ED-<number>-<year>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn from_parts(number: u16, placed_at: DateTime<Utc>) -> Self {
        Self(format!("ED-{}-{}", number, placed_at.year()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_well_formed(&self) -> bool {
        ORDER_ID_RE.is_match(&self.0)
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Processing => write!(f, "processing"),
            OrderStatus::Shipped => write!(f, "shipped"),
            OrderStatus::Delivered => write!(f, "delivered"),
            OrderStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Card,
    Cash,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::Card => write!(f, "card"),
            PaymentMethod::Cash => write!(f, "cash"),
        }
    }
}

/// What an order remembers about its payment. Card data is reduced to the
/// last four digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentSummary {
    pub method: PaymentMethod,
    pub card_last4: Option<String>,
}

impl PaymentSummary {
    pub fn cash() -> Self {
        Self {
            method: PaymentMethod::Cash,
            card_last4: None,
        }
    }

    pub fn card(card_number: &str) -> Self {
        let digits: Vec<char> = card_number.chars().filter(|c| c.is_ascii_digit()).collect();
        let last4: String = digits[digits.len().saturating_sub(4)..].iter().collect();
        Self {
            method: PaymentMethod::Card,
            card_last4: Some(last4),
        }
    }

    /// `**** **** **** 1234` for cards, `None` for cash.
    pub fn masked_card(&self) -> Option<String> {
        self.card_last4
            .as_ref()
            .map(|last4| format!("**** **** **** {}", last4))
    }
}

/// Delivery details collected by the first checkout step.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShippingInfo {
    pub full_name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postal_code: Option<String>,
    pub notes: Option<String>,
}

impl ShippingInfo {
    /// Names of the required fields that are blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("full_name", &self.full_name),
            ("phone", &self.phone),
            ("address", &self.address),
            ("city", &self.city),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub items: Vec<CartItem>,
    pub shipping: ShippingInfo,
    pub payment: PaymentSummary,
    pub subtotal: Decimal,
    pub shipping_cost: Decimal,
    pub total: Decimal,
    pub status: OrderStatus,
}

pub struct NewOrderProps {
    pub id: OrderId,
    pub customer_id: Option<UserId>,
    pub items: Vec<CartItem>,
    pub shipping: ShippingInfo,
    pub payment: PaymentSummary,
    pub flat_shipping_fee: Decimal,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Freezes the totals of `items`; they are never recomputed afterwards.
    pub fn new(props: NewOrderProps) -> Result<Self, OrderError> {
        let subtotal = subtotal_of(&props.items).map_err(|_| OrderError::AmountTooLarge)?;
        let shipping_cost = if props.items.is_empty() {
            Decimal::ZERO
        } else {
            props.flat_shipping_fee
        };
        let total = subtotal
            .checked_add(shipping_cost)
            .ok_or(OrderError::AmountTooLarge)?;

        Ok(Self {
            id: props.id,
            customer_id: props.customer_id,
            created_at: props.created_at,
            items: props.items,
            shipping: props.shipping,
            payment: props.payment,
            subtotal,
            shipping_cost,
            total,
            status: OrderStatus::Processing,
        })
    }

    /// Ordered lines with their frozen totals resolved.
    pub fn lines(&self) -> Result<Vec<CartLine>, OrderError> {
        self.items
            .iter()
            .map(|item| CartLine::from_item(item).map_err(|_| OrderError::AmountTooLarge))
            .collect()
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: OrderId,
        customer_id: Option<UserId>,
        created_at: DateTime<Utc>,
        items: Vec<CartItem>,
        shipping: ShippingInfo,
        payment: PaymentSummary,
        subtotal: Decimal,
        shipping_cost: Decimal,
        total: Decimal,
        status: OrderStatus,
    ) -> Self {
        Self {
            id,
            customer_id,
            created_at,
            items,
            shipping,
            payment,
            subtotal,
            shipping_cost,
            total,
            status,
        }
    }

    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |acc, i| acc.saturating_add(i.quantity))
    }
}
