//! Request DTOs for subscription endpoints.

use serde::Deserialize;

use crate::application::handlers::CreateSubscriptionPlanCommand;
use crate::domain::checkout::CheckoutError;
use crate::domain::foundation::Money;
use crate::domain::subscription::BillingInterval;

/// Body of `POST /api/subscriptions/plan`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlanRequest {
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub plan_name: String,
    pub description: Option<String>,
    /// Decimal string charged every cycle.
    pub price: String,
    #[serde(default)]
    pub interval: BillingInterval,
}

impl CreatePlanRequest {
    pub fn into_command(self) -> Result<CreateSubscriptionPlanCommand, CheckoutError> {
        Ok(CreateSubscriptionPlanCommand {
            price: Money::parse(&self.price, "price")?,
            product_name: self.product_name,
            plan_name: self.plan_name,
            description: self.description.filter(|d| !d.trim().is_empty()),
            interval: self.interval,
        })
    }
}
