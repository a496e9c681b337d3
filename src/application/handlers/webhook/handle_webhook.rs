//! HandleWebhookHandler - verify and acknowledge platform webhook deliveries.

use std::sync::Arc;

use serde_json::Value;
use tracing::{info, warn};

use crate::domain::checkout::CheckoutError;
use crate::domain::webhook::{WebhookEventKind, WebhookNotification, WebhookTransmission};
use crate::ports::{PaymentPlatform, VerificationStatus};

/// Command to handle a webhook delivery.
#[derive(Debug, Clone)]
pub struct HandleWebhookCommand {
    pub transmission: WebhookTransmission,
    /// The event body exactly as delivered.
    pub event: Value,
}

/// Result of webhook processing.
#[derive(Debug, Clone, PartialEq)]
pub struct HandleWebhookResult {
    pub event_id: String,
    pub kind: WebhookEventKind,
}

/// Handler for processing platform webhooks.
///
/// Authenticity is decided by the platform's verification endpoint against
/// the webhook id configured for this server.
pub struct HandleWebhookHandler {
    platform: Arc<dyn PaymentPlatform>,
    webhook_id: Option<String>,
}

impl HandleWebhookHandler {
    pub fn new(platform: Arc<dyn PaymentPlatform>, webhook_id: Option<String>) -> Self {
        Self {
            platform,
            webhook_id,
        }
    }

    pub async fn handle(
        &self,
        cmd: HandleWebhookCommand,
    ) -> Result<HandleWebhookResult, CheckoutError> {
        let webhook_id = self
            .webhook_id
            .as_deref()
            .ok_or_else(|| CheckoutError::not_configured("payment.webhook_id"))?;

        // 1. Shape check before spending a platform call
        let notification = WebhookNotification::from_json(cmd.event)?;

        // 2. Verify
        let status = self
            .platform
            .verify_webhook_signature(&cmd.transmission, webhook_id, &notification.raw)
            .await
            .map_err(|e| {
                warn!(event_id = %notification.id, error = %e, "webhook verification failed");
                CheckoutError::platform_failed(e.to_string())
            })?;
        if status != VerificationStatus::Success {
            warn!(
                event_id = %notification.id,
                transmission_id = %cmd.transmission.transmission_id,
                "webhook signature rejected"
            );
            return Err(CheckoutError::InvalidWebhookSignature);
        }

        // 3. Acknowledge
        log_event(&notification);
        Ok(HandleWebhookResult {
            event_id: notification.id,
            kind: notification.kind,
        })
    }
}

fn log_event(notification: &WebhookNotification) {
    let resource_id = notification.resource_id.as_deref().unwrap_or("-");
    match &notification.kind {
        WebhookEventKind::PaymentCaptureDenied => warn!(
            event_id = %notification.id,
            resource_id,
            "payment capture denied"
        ),
        kind if kind.is_payment() => info!(
            event_id = %notification.id,
            event_type = %notification.event_type,
            resource_id,
            "payment event received"
        ),
        kind if kind.is_subscription() => info!(
            event_id = %notification.id,
            event_type = %notification.event_type,
            resource_id,
            "subscription event received"
        ),
        WebhookEventKind::Unknown(event_type) => info!(
            event_id = %notification.id,
            event_type = %event_type,
            "unhandled webhook event"
        ),
        _ => info!(
            event_id = %notification.id,
            event_type = %notification.event_type,
            resource_id,
            "webhook event received"
        ),
    }
}
