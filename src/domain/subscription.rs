//! Subscription module - billing plan requests.

use serde::{Deserialize, Serialize};

use crate::domain::checkout::CheckoutError;
use crate::domain::foundation::Money;

/// Length of one billing cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BillingInterval {
    Day,
    Week,
    #[default]
    Month,
    Year,
}

impl BillingInterval {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillingInterval::Day => "DAY",
            BillingInterval::Week => "WEEK",
            BillingInterval::Month => "MONTH",
            BillingInterval::Year => "YEAR",
        }
    }
}

/// A catalog product plus one fixed-price recurring plan for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionPlanRequest {
    pub product_name: String,
    pub plan_name: String,
    pub description: Option<String>,
    pub price: Money,
    pub interval: BillingInterval,
}

impl SubscriptionPlanRequest {
    pub fn new(
        product_name: impl Into<String>,
        plan_name: impl Into<String>,
        description: Option<String>,
        price: Money,
        interval: BillingInterval,
    ) -> Result<Self, CheckoutError> {
        let product_name = product_name.into().trim().to_string();
        let plan_name = plan_name.into().trim().to_string();
        if product_name.is_empty() {
            return Err(CheckoutError::validation("product_name", "product name cannot be empty"));
        }
        if plan_name.is_empty() {
            return Err(CheckoutError::validation("plan_name", "plan name cannot be empty"));
        }
        if price.is_zero() {
            return Err(CheckoutError::validation("price", "plan price must be greater than zero"));
        }

        Ok(Self {
            product_name,
            plan_name,
            description,
            price,
            interval,
        })
    }
}
