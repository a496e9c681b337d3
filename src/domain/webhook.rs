//! Webhook module - platform event notifications.

use serde_json::Value;

use crate::domain::checkout::CheckoutError;

/// Platform event types the server recognises.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookEventKind {
    CheckoutOrderApproved,
    PaymentCaptureCompleted,
    PaymentCaptureDenied,
    PaymentAuthorizationCreated,
    VaultPaymentTokenCreated,
    SubscriptionCreated,
    SubscriptionActivated,
    SubscriptionCancelled,
    Unknown(String),
}

impl WebhookEventKind {
    pub fn from_event_type(event_type: &str) -> Self {
        match event_type {
            "CHECKOUT.ORDER.APPROVED" => WebhookEventKind::CheckoutOrderApproved,
            "PAYMENT.CAPTURE.COMPLETED" => WebhookEventKind::PaymentCaptureCompleted,
            "PAYMENT.CAPTURE.DENIED" => WebhookEventKind::PaymentCaptureDenied,
            "PAYMENT.AUTHORIZATION.CREATED" => WebhookEventKind::PaymentAuthorizationCreated,
            "VAULT.PAYMENT-TOKEN.CREATED" => WebhookEventKind::VaultPaymentTokenCreated,
            "BILLING.SUBSCRIPTION.CREATED" => WebhookEventKind::SubscriptionCreated,
            "BILLING.SUBSCRIPTION.ACTIVATED" => WebhookEventKind::SubscriptionActivated,
            "BILLING.SUBSCRIPTION.CANCELLED" => WebhookEventKind::SubscriptionCancelled,
            other => WebhookEventKind::Unknown(other.to_string()),
        }
    }

    /// Events about money moving.
    pub fn is_payment(&self) -> bool {
        matches!(
            self,
            WebhookEventKind::PaymentCaptureCompleted
                | WebhookEventKind::PaymentCaptureDenied
                | WebhookEventKind::PaymentAuthorizationCreated
        )
    }

    pub fn is_subscription(&self) -> bool {
        matches!(
            self,
            WebhookEventKind::SubscriptionCreated
                | WebhookEventKind::SubscriptionActivated
                | WebhookEventKind::SubscriptionCancelled
        )
    }
}

/// Signature headers the platform sends with every webhook delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookTransmission {
    pub auth_algo: String,
    pub cert_url: String,
    pub transmission_id: String,
    pub transmission_sig: String,
    pub transmission_time: String,
}

/// A parsed webhook delivery.
///
/// The raw event is kept because signature verification needs it verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct WebhookNotification {
    pub id: String,
    pub event_type: String,
    pub kind: WebhookEventKind,
    pub resource_id: Option<String>,
    pub raw: Value,
}

impl WebhookNotification {
    pub fn from_json(raw: Value) -> Result<Self, CheckoutError> {
        let id = raw
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| CheckoutError::validation("id", "webhook event has no id"))?
            .to_string();
        let event_type = raw
            .get("event_type")
            .and_then(Value::as_str)
            .ok_or_else(|| CheckoutError::validation("event_type", "webhook event has no event_type"))?
            .to_string();
        let resource_id = raw
            .get("resource")
            .and_then(|resource| resource.get("id"))
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(Self {
            kind: WebhookEventKind::from_event_type(&event_type),
            id,
            event_type,
            resource_id,
            raw,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn known_event_types_are_classified() {
        assert_eq!(
            WebhookEventKind::from_event_type("PAYMENT.CAPTURE.COMPLETED"),
            WebhookEventKind::PaymentCaptureCompleted
        );
        assert!(WebhookEventKind::from_event_type("PAYMENT.CAPTURE.DENIED").is_payment());
        assert!(WebhookEventKind::from_event_type("BILLING.SUBSCRIPTION.CANCELLED").is_subscription());
    }

    #[test]
    fn unknown_event_types_keep_their_name() {
        assert_eq!(
            WebhookEventKind::from_event_type("CUSTOMER.DISPUTE.CREATED"),
            WebhookEventKind::Unknown("CUSTOMER.DISPUTE.CREATED".to_string())
        );
    }

    #[test]
    fn notification_reads_id_type_and_resource() {
        let raw = json!({
            "id": "WH-7Y7254563A4550640-11V2185806837105M",
            "event_type": "PAYMENT.CAPTURE.COMPLETED",
            "resource": { "id": "42311647XV020574X", "status": "COMPLETED" }
        });
        let notification = WebhookNotification::from_json(raw.clone()).unwrap();
        assert_eq!(notification.id, "WH-7Y7254563A4550640-11V2185806837105M");
        assert_eq!(notification.kind, WebhookEventKind::PaymentCaptureCompleted);
        assert_eq!(notification.resource_id.as_deref(), Some("42311647XV020574X"));
        assert_eq!(notification.raw, raw);
    }

    #[test]
    fn notification_without_event_type_is_rejected() {
        let err = WebhookNotification::from_json(json!({ "id": "WH-1" })).unwrap_err();
        assert!(matches!(err, CheckoutError::ValidationFailed { ref field, .. } if field == "event_type"));
    }
}
