//! Order drafts: what the server asks the platform to create.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Money;
use crate::domain::shipping::{shipping_options, ShippingMethod, ShippingOption};
use crate::domain::vault::PaymentSourceKind;

use super::cart::Cart;
use super::errors::CheckoutError;

/// How the platform should settle the order once the buyer approves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderIntent {
    #[default]
    Capture,
    Authorize,
}

impl OrderIntent {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderIntent::Capture => "CAPTURE",
            OrderIntent::Authorize => "AUTHORIZE",
        }
    }
}

/// Ask the platform to vault the payment method when the order succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultOnSuccess {
    pub source: PaymentSourceKind,
    /// Returning buyer's platform customer id, if they have one.
    pub customer_id: Option<String>,
}

/// Shipping options offered on the order, with the server-side callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingSetup {
    pub options: Vec<ShippingOption>,
    /// Where the platform sends address and option changes.
    pub callback_url: Option<String>,
}

impl ShippingSetup {
    /// Offers the standard option table with express preselected.
    pub fn standard(callback_url: Option<String>) -> Self {
        Self {
            options: shipping_options(ShippingMethod::Express),
            callback_url,
        }
    }

    pub fn preselected_amount(&self) -> Money {
        self.options
            .iter()
            .find(|option| option.selected)
            .map(ShippingOption::amount)
            .unwrap_or(Money::ZERO)
    }
}

/// A single-purchase-unit order ready to send to the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    pub intent: OrderIntent,
    pub cart: Cart,
    pub vault: Option<VaultOnSuccess>,
    pub shipping: Option<ShippingSetup>,
}

impl OrderDraft {
    pub fn new(intent: OrderIntent, cart: Cart) -> Self {
        Self {
            intent,
            cart,
            vault: None,
            shipping: None,
        }
    }

    pub fn save_payment_method(
        mut self,
        source: PaymentSourceKind,
        customer_id: Option<String>,
    ) -> Self {
        self.vault = Some(VaultOnSuccess {
            source,
            customer_id,
        });
        self
    }

    pub fn with_shipping(mut self, shipping: ShippingSetup) -> Self {
        self.shipping = Some(shipping);
        self
    }

    pub fn item_total(&self) -> Result<Money, CheckoutError> {
        self.cart.item_total()
    }

    pub fn shipping_amount(&self) -> Option<Money> {
        self.shipping.as_ref().map(ShippingSetup::preselected_amount)
    }

    /// Item total plus the preselected shipping amount.
    pub fn total(&self) -> Result<Money, CheckoutError> {
        let items = self.item_total()?;
        match self.shipping_amount() {
            Some(shipping) => items
                .checked_add(shipping)
                .ok_or_else(|| CheckoutError::validation("cart", "order total overflows")),
            None => Ok(items),
        }
    }
}
