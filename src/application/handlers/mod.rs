//! Application handlers.
//!
//! Command handlers that orchestrate domain operations and platform calls.

pub mod checkout;
pub mod shipping;
pub mod subscription;
pub mod vault;
pub mod webhook;

pub use checkout::{
    CreateOrderCommand, CreateOrderHandler, IssueClientTokenHandler, SettleOrderCommand,
    SettleOrderHandler,
};
pub use shipping::{AddressInput, RecalculateShippingCommand, RecalculateShippingHandler};
pub use subscription::{CreateSubscriptionPlanCommand, CreateSubscriptionPlanHandler};
pub use vault::{
    CreatePaymentTokenCommand, CreatePaymentTokenHandler, CreateSetupTokenCommand,
    CreateSetupTokenHandler,
};
pub use webhook::{HandleWebhookCommand, HandleWebhookHandler, HandleWebhookResult};
