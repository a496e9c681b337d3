//! Shipping recalculation for the platform's mid-checkout callback.
//!
//! The platform calls back whenever the buyer changes the shipping address
//! or option. The item total arrives in the payload and is taken as the
//! source of truth; only the shipping line and the order total are
//! recomputed. Nothing is stored between calls.

use crate::domain::foundation::Money;

use super::address::ShippingAddress;
use super::errors::ShippingError;
use super::option::{shipping_options, ShippingOption, ShippingSelection};
use super::policy::ShippingPolicy;

/// Everything a recalculation needs, read from one callback payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingRecalcRequest {
    pub order_id: String,
    pub shipping_address: ShippingAddress,
    pub selection: ShippingSelection,
    pub item_total: Money,
}

/// The updated breakdown the platform displays and later charges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingRecalcResponse {
    pub order_id: String,
    pub item_total: Money,
    pub shipping_amount: Money,
    pub total: Money,
    pub shipping_options: Vec<ShippingOption>,
}

impl ShippingRecalcResponse {
    pub fn selected_option(&self) -> Option<&ShippingOption> {
        self.shipping_options.iter().find(|option| option.selected)
    }
}

/// Recomputes the shipping line and total for one callback.
pub fn recalculate_shipping(
    policy: &ShippingPolicy,
    request: ShippingRecalcRequest,
) -> Result<ShippingRecalcResponse, ShippingError> {
    policy.ensure_deliverable(&request.shipping_address)?;

    let method = request.selection.method();
    let shipping_amount = method.amount();
    let total = request
        .item_total
        .checked_add(shipping_amount)
        .ok_or_else(|| ShippingError::malformed("order total overflows"))?;

    Ok(ShippingRecalcResponse {
        order_id: request.order_id,
        item_total: request.item_total,
        shipping_amount,
        total,
        shipping_options: shipping_options(method),
    })
}
