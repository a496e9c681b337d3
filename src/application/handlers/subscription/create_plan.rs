//! CreateSubscriptionPlanHandler - catalog product plus billing plan in one call.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::checkout::CheckoutError;
use crate::domain::foundation::Money;
use crate::domain::subscription::{BillingInterval, SubscriptionPlanRequest};
use crate::ports::{PaymentPlatform, PlatformResponse};

/// Command to create a subscription plan.
#[derive(Debug, Clone)]
pub struct CreateSubscriptionPlanCommand {
    pub product_name: String,
    pub plan_name: String,
    pub description: Option<String>,
    pub price: Money,
    pub interval: BillingInterval,
}

/// Handler for creating subscription plans.
///
/// Plans hang off a catalog product, so the product is created first. A
/// rejected product request is forwarded as-is and no plan is attempted.
pub struct CreateSubscriptionPlanHandler {
    platform: Arc<dyn PaymentPlatform>,
}

impl CreateSubscriptionPlanHandler {
    pub fn new(platform: Arc<dyn PaymentPlatform>) -> Self {
        Self { platform }
    }

    pub async fn handle(
        &self,
        cmd: CreateSubscriptionPlanCommand,
    ) -> Result<PlatformResponse, CheckoutError> {
        let request = SubscriptionPlanRequest::new(
            cmd.product_name,
            cmd.plan_name,
            cmd.description,
            cmd.price,
            cmd.interval,
        )?;

        // 1. Product
        let product = self
            .platform
            .create_product(&request)
            .await
            .map_err(|e| {
                warn!(product = %request.product_name, error = %e, "product creation failed");
                CheckoutError::platform_failed(e.to_string())
            })?;
        if !product.is_success() {
            warn!(status = product.status, "platform rejected product");
            return Ok(product);
        }
        let product_id = product
            .str_field("id")
            .ok_or_else(|| CheckoutError::platform_failed("product response has no id"))?;

        // 2. Plan
        let plan = self
            .platform
            .create_plan(&request, product_id)
            .await
            .map_err(|e| {
                warn!(product_id, error = %e, "plan creation failed");
                CheckoutError::platform_failed(e.to_string())
            })?;

        info!(
            product_id,
            plan_id = ?plan.str_field("id"),
            price = %request.price,
            interval = request.interval.as_str(),
            status = plan.status,
            "subscription plan created"
        );
        Ok(plan)
    }
}
