//! SettleOrderHandler - capture or authorize an approved order.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::checkout::{CheckoutError, OrderIntent};
use crate::ports::{PaymentPlatform, PlatformResponse};

/// Command to capture or authorize an order the buyer approved.
#[derive(Debug, Clone)]
pub struct SettleOrderCommand {
    pub order_id: String,
    pub intent: OrderIntent,
}

pub struct SettleOrderHandler {
    platform: Arc<dyn PaymentPlatform>,
}

impl SettleOrderHandler {
    pub fn new(platform: Arc<dyn PaymentPlatform>) -> Self {
        Self { platform }
    }

    pub async fn handle(&self, cmd: SettleOrderCommand) -> Result<PlatformResponse, CheckoutError> {
        let order_id = validate_order_id(&cmd.order_id)?;

        let result = match cmd.intent {
            OrderIntent::Capture => self.platform.capture_order(order_id).await,
            OrderIntent::Authorize => self.platform.authorize_order(order_id).await,
        };
        let response = result.map_err(|e| {
            warn!(order_id, intent = cmd.intent.as_str(), error = %e, "settlement failed");
            CheckoutError::platform_failed(e.to_string())
        })?;

        info!(
            order_id,
            intent = cmd.intent.as_str(),
            status = response.status,
            "order settled"
        );
        Ok(response)
    }
}

/// Order ids are interpolated into the platform URL path.
fn validate_order_id(raw: &str) -> Result<&str, CheckoutError> {
    let order_id = raw.trim();
    if order_id.is_empty() {
        return Err(CheckoutError::validation("order_id", "order id cannot be empty"));
    }
    if !order_id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(CheckoutError::validation(
            "order_id",
            format!("'{}' is not a valid order id", order_id),
        ));
    }
    Ok(order_id)
}
