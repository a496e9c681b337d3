//! Shared application state for all relay routes.

use std::sync::Arc;

use crate::application::handlers::{
    CreateOrderHandler, CreatePaymentTokenHandler, CreateSetupTokenHandler,
    CreateSubscriptionPlanHandler, HandleWebhookHandler, IssueClientTokenHandler,
    RecalculateShippingHandler, SettleOrderHandler,
};
use crate::domain::shipping::ShippingPolicy;
use crate::ports::PaymentPlatform;

/// Shared application state containing all dependencies.
///
/// This struct is cloned for each request; the platform adapter is shared
/// behind an `Arc`.
#[derive(Clone)]
pub struct RelayAppState {
    pub platform: Arc<dyn PaymentPlatform>,
    pub shipping_policy: ShippingPolicy,
    /// Registered on checkout orders so the platform calls us back.
    pub shipping_callback_url: Option<String>,
    pub webhook_id: Option<String>,
}

impl RelayAppState {
    pub fn new(platform: Arc<dyn PaymentPlatform>) -> Self {
        Self {
            platform,
            shipping_policy: ShippingPolicy::default(),
            shipping_callback_url: None,
            webhook_id: None,
        }
    }

    pub fn with_shipping_policy(mut self, policy: ShippingPolicy) -> Self {
        self.shipping_policy = policy;
        self
    }

    pub fn with_shipping_callback_url(mut self, url: Option<String>) -> Self {
        self.shipping_callback_url = url;
        self
    }

    pub fn with_webhook_id(mut self, webhook_id: Option<String>) -> Self {
        self.webhook_id = webhook_id;
        self
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Handler factories
    // ════════════════════════════════════════════════════════════════════════════

    pub fn recalculate_shipping_handler(&self) -> RecalculateShippingHandler {
        RecalculateShippingHandler::new(self.shipping_policy.clone())
    }

    pub fn create_order_handler(&self) -> CreateOrderHandler {
        CreateOrderHandler::new(self.platform.clone(), self.shipping_callback_url.clone())
    }

    pub fn settle_order_handler(&self) -> SettleOrderHandler {
        SettleOrderHandler::new(self.platform.clone())
    }

    pub fn client_token_handler(&self) -> IssueClientTokenHandler {
        IssueClientTokenHandler::new(self.platform.clone())
    }

    pub fn setup_token_handler(&self) -> CreateSetupTokenHandler {
        CreateSetupTokenHandler::new(self.platform.clone())
    }

    pub fn payment_token_handler(&self) -> CreatePaymentTokenHandler {
        CreatePaymentTokenHandler::new(self.platform.clone())
    }

    pub fn subscription_plan_handler(&self) -> CreateSubscriptionPlanHandler {
        CreateSubscriptionPlanHandler::new(self.platform.clone())
    }

    pub fn webhook_handler(&self) -> HandleWebhookHandler {
        HandleWebhookHandler::new(self.platform.clone(), self.webhook_id.clone())
    }
}
