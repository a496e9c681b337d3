//! Request DTOs for order endpoints.

use serde::Deserialize;

use crate::application::handlers::CreateOrderCommand;
use crate::domain::checkout::{CartItem, CheckoutError, OrderIntent};
use crate::domain::foundation::Money;
use crate::domain::vault::PaymentSourceKind;

/// One cart line as the browser submits it.
#[derive(Debug, Clone, Deserialize)]
pub struct CartItemRequest {
    pub sku: String,
    #[serde(default)]
    pub name: Option<String>,
    pub quantity: u32,
    /// Decimal string, e.g. `"19.99"`.
    pub unit_amount: String,
}

/// Body of `POST /api/orders` and `POST /api/checkout-orders`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderRequest {
    pub cart: Vec<CartItemRequest>,
    #[serde(default)]
    pub intent: OrderIntent,
    pub customer_id: Option<String>,
    #[serde(default)]
    pub save_payment_method: bool,
    /// Source to vault when `save_payment_method` is set. Defaults to the wallet.
    pub payment_source: Option<PaymentSourceKind>,
}

impl CreateOrderRequest {
    pub fn into_command(self, with_shipping: bool) -> Result<CreateOrderCommand, CheckoutError> {
        let items = self
            .cart
            .into_iter()
            .map(|item| {
                let unit_amount = Money::parse(&item.unit_amount, "unit_amount")?;
                CartItem::new(
                    item.sku,
                    item.name.unwrap_or_default(),
                    item.quantity,
                    unit_amount,
                )
            })
            .collect::<Result<Vec<_>, CheckoutError>>()?;

        let save_payment_source = self
            .save_payment_method
            .then(|| self.payment_source.unwrap_or(PaymentSourceKind::Paypal));

        Ok(CreateOrderCommand {
            items,
            intent: self.intent,
            save_payment_source,
            customer_id: self.customer_id,
            with_shipping,
        })
    }
}
