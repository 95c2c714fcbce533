use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::errors::CartError;
use crate::domain::shared::locale::LocalizedName;
use crate::domain::shared::value_objects::{MAX_UNIT_PRICE, ProductId};

/// A product line in the cart. Quantity is always at least 1.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub product_id: ProductId,
    pub name: LocalizedName,
    pub unit_price: Decimal,
    pub original_unit_price: Decimal,
    pub quantity: u32,
    pub image_ref: Option<String>,
    pub seller_label: String,
    pub expiry_date: Option<DateTime<Utc>>,
}

#[derive(Debug)]
pub struct NewCartItemProps {
    pub product_id: ProductId,
    pub name: LocalizedName,
    pub unit_price: Decimal,
    pub original_unit_price: Decimal,
    pub quantity: u32,
    pub image_ref: Option<String>,
    pub seller_label: String,
    pub expiry_date: Option<DateTime<Utc>>,
}

impl CartItem {
    pub fn new(props: NewCartItemProps) -> Result<Self, CartError> {
        if props.quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }

        let in_range = |price: Decimal| !price.is_sign_negative() && price <= MAX_UNIT_PRICE;
        if !in_range(props.unit_price) || !in_range(props.original_unit_price) {
            return Err(CartError::InvalidPrice);
        }

        Ok(Self {
            product_id: props.product_id,
            name: props.name,
            unit_price: props.unit_price,
            original_unit_price: props.original_unit_price,
            quantity: props.quantity,
            image_ref: props.image_ref,
            seller_label: props.seller_label,
            expiry_date: props.expiry_date,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        product_id: ProductId,
        name: LocalizedName,
        unit_price: Decimal,
        original_unit_price: Decimal,
        quantity: u32,
        image_ref: Option<String>,
        seller_label: String,
        expiry_date: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            product_id,
            name,
            unit_price,
            original_unit_price,
            quantity,
            image_ref,
            seller_label,
            expiry_date,
        }
    }

    pub fn line_total(&self) -> Result<Decimal, CartError> {
        self.unit_price
            .checked_mul(Decimal::from(self.quantity))
            .ok_or(CartError::AmountTooLarge)
    }

    /// Discount against the original price, never negative.
    pub fn line_savings(&self) -> Result<Decimal, CartError> {
        let per_unit = self
            .original_unit_price
            .checked_sub(self.unit_price)
            .ok_or(CartError::AmountTooLarge)?;
        if per_unit.is_sign_negative() {
            return Ok(Decimal::ZERO);
        }
        per_unit
            .checked_mul(Decimal::from(self.quantity))
            .ok_or(CartError::AmountTooLarge)
    }
}

/// Sum of the line totals of `items`.
pub fn subtotal_of(items: &[CartItem]) -> Result<Decimal, CartError> {
    checked_sum(items.iter().map(CartItem::line_total))
}

fn checked_sum(
    amounts: impl Iterator<Item = Result<Decimal, CartError>>,
) -> Result<Decimal, CartError> {
    amounts.fold(Ok(Decimal::ZERO), |acc, amount| {
        acc?.checked_add(amount?).ok_or(CartError::AmountTooLarge)
    })
}

/// Ordered list of cart lines, at most one per product.
///
/// Totals are always computed from the lines; there is no other way to
/// change them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Rebuilds a cart from stored lines, merging duplicated products and
    /// dropping lines with a zero quantity.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        let mut cart = Self::new();
        for item in items.into_iter().filter(|i| i.quantity > 0) {
            cart.add_item(item);
        }
        cart
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<CartItem> {
        self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }

    /// Adds `item`, or bumps the quantity of the existing line for the same product.
    pub fn add_item(&mut self, item: CartItem) {
        match self
            .items
            .iter_mut()
            .find(|i| i.product_id == item.product_id)
        {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(item.quantity);
            }
            None => self.items.push(item),
        }
    }

    /// Returns true if a line was removed.
    pub fn remove_item(&mut self, product_id: ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.product_id != product_id);
        self.items.len() != before
    }

    /// Sets the quantity of a line; zero or negative removes it.
    ///
    /// Returns true if the cart changed.
    pub fn update_quantity(&mut self, product_id: ProductId, new_quantity: i64) -> bool {
        if new_quantity <= 0 {
            return self.remove_item(product_id);
        }

        let quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
        match self.items.iter_mut().find(|i| i.product_id == product_id) {
            Some(existing) if existing.quantity != quantity => {
                existing.quantity = quantity;
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |acc, i| acc.saturating_add(i.quantity))
    }

    pub fn subtotal(&self) -> Result<Decimal, CartError> {
        subtotal_of(&self.items)
    }

    pub fn savings(&self) -> Result<Decimal, CartError> {
        checked_sum(self.items.iter().map(CartItem::line_savings))
    }

    /// Fails when any line or total falls outside the range of `Decimal`.
    pub fn check_totals(&self) -> Result<(), CartError> {
        self.subtotal()?;
        self.savings()?;
        Ok(())
    }

    /// Flat shipping fee, charged only when there is something to ship.
    pub fn shipping_cost(&self, flat_fee: Decimal) -> Decimal {
        if self.is_empty() {
            Decimal::ZERO
        } else {
            flat_fee
        }
    }

    /// Fails with `AmountTooLarge` when a line or a total does not fit.
    pub fn summary(&self, flat_fee: Decimal) -> Result<CartSummary, CartError> {
        let lines = self
            .items
            .iter()
            .map(CartLine::from_item)
            .collect::<Result<Vec<_>, CartError>>()?;
        let subtotal = checked_sum(lines.iter().map(|line| Ok(line.line_total)))?;
        let savings = checked_sum(lines.iter().map(|line| Ok(line.line_savings)))?;
        let shipping_cost = self.shipping_cost(flat_fee);
        let total = subtotal
            .checked_add(shipping_cost)
            .ok_or(CartError::AmountTooLarge)?;

        Ok(CartSummary {
            lines,
            item_count: self.item_count(),
            subtotal,
            savings,
            shipping_cost,
            total,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub item: CartItem,
    pub line_total: Decimal,
    pub line_savings: Decimal,
}

impl CartLine {
    pub fn from_item(item: &CartItem) -> Result<Self, CartError> {
        Ok(Self {
            line_total: item.line_total()?,
            line_savings: item.line_savings()?,
            item: item.clone(),
        })
    }
}

/// Read model of a cart with every derived figure resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSummary {
    pub lines: Vec<CartLine>,
    pub item_count: u32,
    pub subtotal: Decimal,
    pub savings: Decimal,
    pub shipping_cost: Decimal,
    pub total: Decimal,
}
