//! Webhook handlers.

mod handle_webhook;

pub use handle_webhook::{HandleWebhookCommand, HandleWebhookHandler, HandleWebhookResult};
