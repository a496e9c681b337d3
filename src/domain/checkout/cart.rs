//! Cart contents submitted by the browser when an order is created.

use crate::domain::foundation::{Money, ValidationError};

use super::errors::CheckoutError;

/// Largest quantity accepted for a single line.
pub const MAX_QUANTITY: u32 = 9_999;

/// One line of the buyer's cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    pub sku: String,
    pub name: String,
    pub quantity: u32,
    pub unit_amount: Money,
}

impl CartItem {
    /// Creates a cart line. An empty name falls back to the SKU.
    pub fn new(
        sku: impl Into<String>,
        name: impl Into<String>,
        quantity: u32,
        unit_amount: Money,
    ) -> Result<Self, CheckoutError> {
        let sku = sku.into().trim().to_string();
        if sku.is_empty() {
            return Err(CheckoutError::validation("sku", "SKU cannot be empty"));
        }
        if quantity == 0 || quantity > MAX_QUANTITY {
            return Err(ValidationError::out_of_range(
                "quantity",
                1,
                i64::from(MAX_QUANTITY),
                i64::from(quantity),
            )
            .into());
        }
        let name = name.into().trim().to_string();
        let name = if name.is_empty() { sku.clone() } else { name };

        Ok(Self {
            sku,
            name,
            quantity,
            unit_amount,
        })
    }

    pub fn line_total(&self) -> Result<Money, CheckoutError> {
        self.unit_amount
            .checked_mul(self.quantity)
            .ok_or_else(|| CheckoutError::validation("unit_amount", "line total overflows"))
    }
}

/// A non-empty list of cart lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new(items: Vec<CartItem>) -> Result<Self, CheckoutError> {
        if items.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Sum of every line's unit amount times quantity.
    pub fn item_total(&self) -> Result<Money, CheckoutError> {
        let lines = self
            .items
            .iter()
            .map(CartItem::line_total)
            .collect::<Result<Vec<_>, _>>()?;
        Money::checked_sum(lines)
            .ok_or_else(|| CheckoutError::validation("cart", "item total overflows"))
    }
}
