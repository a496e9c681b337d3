//! CreateOrderHandler - Command handler for creating platform orders from a cart.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::checkout::{Cart, CartItem, CheckoutError, OrderDraft, OrderIntent, ShippingSetup};
use crate::domain::vault::PaymentSourceKind;
use crate::ports::{PaymentPlatform, PlatformResponse};

/// Command to create an order.
#[derive(Debug, Clone)]
pub struct CreateOrderCommand {
    pub items: Vec<CartItem>,
    pub intent: OrderIntent,
    /// Vault this payment source once the payment succeeds.
    pub save_payment_source: Option<PaymentSourceKind>,
    pub customer_id: Option<String>,
    /// Attach the shipping option table and callback registration.
    pub with_shipping: bool,
}

/// Handler for creating orders.
///
/// Item totals are computed here from the cart, never taken from the browser.
pub struct CreateOrderHandler {
    platform: Arc<dyn PaymentPlatform>,
    shipping_callback_url: Option<String>,
}

impl CreateOrderHandler {
    pub fn new(platform: Arc<dyn PaymentPlatform>, shipping_callback_url: Option<String>) -> Self {
        Self {
            platform,
            shipping_callback_url,
        }
    }

    pub async fn handle(&self, cmd: CreateOrderCommand) -> Result<PlatformResponse, CheckoutError> {
        // 1. Build the draft
        let cart = Cart::new(cmd.items)?;
        let mut draft = OrderDraft::new(cmd.intent, cart);
        if let Some(source) = cmd.save_payment_source {
            let customer_id = cmd.customer_id.filter(|id| !id.trim().is_empty());
            draft = draft.save_payment_method(source, customer_id);
        }
        if cmd.with_shipping {
            draft = draft.with_shipping(ShippingSetup::standard(self.shipping_callback_url.clone()));
        }

        // 2. Totals must be representable before anything is sent
        let total = draft.total()?;

        // 3. Send with a fresh idempotency key
        let request_id = Uuid::new_v4().to_string();
        info!(
            request_id = %request_id,
            intent = draft.intent.as_str(),
            total = %total,
            with_shipping = cmd.with_shipping,
            vault = draft.vault.is_some(),
            "creating order"
        );

        let response = self
            .platform
            .create_order(&draft, &request_id)
            .await
            .map_err(|e| {
                warn!(request_id = %request_id, error = %e, "order creation failed");
                CheckoutError::platform_failed(e.to_string())
            })?;

        info!(
            request_id = %request_id,
            status = response.status,
            order_id = ?response.str_field("id"),
            "order created"
        );
        Ok(response)
    }
}
