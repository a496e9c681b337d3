//! Mock payment platform for testing.
//!
//! Provides a configurable in-memory implementation of `PaymentPlatform` for
//! unit and integration tests. Supports:
//! - Canned responses per endpoint (sensible defaults out of the box)
//! - Error injection
//! - Call tracking
//! - Webhook verification outcome

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::domain::checkout::OrderDraft;
use crate::domain::subscription::SubscriptionPlanRequest;
use crate::domain::vault::{PaymentTokenRequest, SetupTokenRequest};
use crate::domain::webhook::WebhookTransmission;
use crate::ports::{
    ClientToken, PaymentPlatform, PlatformError, PlatformResponse, VerificationStatus,
};

/// Platform endpoints the mock can be configured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MockEndpoint {
    ClientToken,
    CreateOrder,
    CaptureOrder,
    AuthorizeOrder,
    CreateSetupToken,
    CreatePaymentToken,
    CreateProduct,
    CreatePlan,
    VerifyWebhook,
}

/// Recorded method call for assertions.
#[derive(Debug, Clone)]
pub struct MethodCall {
    pub endpoint: MockEndpoint,
    pub args: Vec<String>,
    /// Payload the real adapter would have sent, where there is one.
    pub body: Option<Value>,
}

/// Mock payment platform for testing.
///
/// # Example
///
/// ```ignore
/// let mock = MockPaymentPlatform::new();
/// mock.set_response(MockEndpoint::CaptureOrder, PlatformResponse::new(422, json!({...})));
/// mock.set_verification_status(VerificationStatus::Failure);
/// ```
#[derive(Default, Clone)]
pub struct MockPaymentPlatform {
    /// Inner state (thread-safe for async tests).
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    responses: HashMap<MockEndpoint, PlatformResponse>,
    errors: HashMap<MockEndpoint, PlatformError>,
    verification_status: Option<VerificationStatus>,
    call_log: Vec<MethodCall>,
}

impl MockPaymentPlatform {
    /// Create a new mock with default responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that fails every webhook verification.
    pub fn rejecting_webhooks() -> Self {
        let mock = Self::new();
        mock.set_verification_status(VerificationStatus::Failure);
        mock
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Configuration Methods
    // ════════════════════════════════════════════════════════════════════════════

    /// Set the response returned by an endpoint.
    pub fn set_response(&self, endpoint: MockEndpoint, response: PlatformResponse) {
        self.inner.lock().unwrap().responses.insert(endpoint, response);
    }

    /// Make an endpoint fail with a transport-level error.
    pub fn set_error(&self, endpoint: MockEndpoint, error: PlatformError) {
        self.inner.lock().unwrap().errors.insert(endpoint, error);
    }

    pub fn set_verification_status(&self, status: VerificationStatus) {
        self.inner.lock().unwrap().verification_status = Some(status);
    }

    /// Clear all configured errors.
    pub fn clear_errors(&self) {
        self.inner.lock().unwrap().errors.clear();
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Call Tracking
    // ════════════════════════════════════════════════════════════════════════════

    /// Get all recorded method calls.
    pub fn calls(&self) -> Vec<MethodCall> {
        self.inner.lock().unwrap().call_log.clone()
    }

    /// Calls recorded for one endpoint.
    pub fn calls_to(&self, endpoint: MockEndpoint) -> Vec<MethodCall> {
        self.calls()
            .into_iter()
            .filter(|call| call.endpoint == endpoint)
            .collect()
    }

    /// Check if an endpoint was called.
    pub fn was_called(&self, endpoint: MockEndpoint) -> bool {
        !self.calls_to(endpoint).is_empty()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Internals
    // ════════════════════════════════════════════════════════════════════════════

    fn record(
        &self,
        endpoint: MockEndpoint,
        args: Vec<String>,
        body: Option<Value>,
        default: impl FnOnce() -> PlatformResponse,
    ) -> Result<PlatformResponse, PlatformError> {
        let mut state = self.inner.lock().unwrap();
        state.call_log.push(MethodCall {
            endpoint,
            args,
            body,
        });
        if let Some(error) = state.errors.get(&endpoint) {
            return Err(error.clone());
        }
        Ok(state
            .responses
            .get(&endpoint)
            .cloned()
            .unwrap_or_else(default))
    }
}

#[async_trait]
impl PaymentPlatform for MockPaymentPlatform {
    async fn generate_client_token(&self) -> Result<ClientToken, PlatformError> {
        let response = self.record(MockEndpoint::ClientToken, vec![], None, || {
            PlatformResponse::new(
                200,
                json!({ "access_token": "eyJicmFpbnRyZWUiOnsiYXV0aG9yaXphdGlvbkZpbmdlcnByaW50Ijoi", "expires_in": 3600 }),
            )
        })?;

        Ok(ClientToken {
            token: response.str_field("access_token").unwrap_or_default().to_string(),
            expires_in: response.body.get("expires_in").and_then(Value::as_i64).unwrap_or(0),
        })
    }

    async fn create_order(
        &self,
        draft: &OrderDraft,
        request_id: &str,
    ) -> Result<PlatformResponse, PlatformError> {
        let body = super::payloads::order_body(draft).ok();
        self.record(
            MockEndpoint::CreateOrder,
            vec![request_id.to_string()],
            body,
            || PlatformResponse::new(201, json!({ "id": "5O190127TN364715T", "status": "CREATED" })),
        )
    }

    async fn capture_order(&self, order_id: &str) -> Result<PlatformResponse, PlatformError> {
        let id = order_id.to_string();
        self.record(MockEndpoint::CaptureOrder, vec![id.clone()], None, || {
            PlatformResponse::new(201, json!({ "id": id, "status": "COMPLETED" }))
        })
    }

    async fn authorize_order(&self, order_id: &str) -> Result<PlatformResponse, PlatformError> {
        let id = order_id.to_string();
        self.record(MockEndpoint::AuthorizeOrder, vec![id.clone()], None, || {
            PlatformResponse::new(201, json!({ "id": id, "status": "COMPLETED" }))
        })
    }

    async fn create_setup_token(
        &self,
        request: &SetupTokenRequest,
        request_id: &str,
    ) -> Result<PlatformResponse, PlatformError> {
        self.record(
            MockEndpoint::CreateSetupToken,
            vec![request_id.to_string()],
            Some(super::payloads::setup_token_body(request)),
            || {
                PlatformResponse::new(
                    201,
                    json!({ "id": "5C991763VB2781612", "status": "PAYER_ACTION_REQUIRED" }),
                )
            },
        )
    }

    async fn create_payment_token(
        &self,
        request: &PaymentTokenRequest,
        request_id: &str,
    ) -> Result<PlatformResponse, PlatformError> {
        self.record(
            MockEndpoint::CreatePaymentToken,
            vec![request.setup_token_id.clone(), request_id.to_string()],
            Some(super::payloads::payment_token_body(request)),
            || {
                PlatformResponse::new(
                    201,
                    json!({ "id": "jwgvx22", "customer": { "id": "customer_4029352050" } }),
                )
            },
        )
    }

    async fn create_product(
        &self,
        request: &SubscriptionPlanRequest,
    ) -> Result<PlatformResponse, PlatformError> {
        self.record(
            MockEndpoint::CreateProduct,
            vec![request.product_name.clone()],
            Some(super::payloads::product_body(request)),
            || PlatformResponse::new(201, json!({ "id": "PROD-XXCD1234QWER65782" })),
        )
    }

    async fn create_plan(
        &self,
        request: &SubscriptionPlanRequest,
        product_id: &str,
    ) -> Result<PlatformResponse, PlatformError> {
        let product = product_id.to_string();
        self.record(
            MockEndpoint::CreatePlan,
            vec![request.plan_name.clone(), product.clone()],
            Some(super::payloads::plan_body(request, product_id)),
            || {
                PlatformResponse::new(
                    201,
                    json!({ "id": "P-5ML4271244454362WXNWU5NQ", "product_id": product, "status": "ACTIVE" }),
                )
            },
        )
    }

    async fn verify_webhook_signature(
        &self,
        transmission: &WebhookTransmission,
        webhook_id: &str,
        event: &Value,
    ) -> Result<VerificationStatus, PlatformError> {
        self.record(
            MockEndpoint::VerifyWebhook,
            vec![webhook_id.to_string(), transmission.transmission_id.clone()],
            Some(super::payloads::verify_webhook_body(transmission, webhook_id, event)),
            || PlatformResponse::new(200, Value::Null),
        )?;

        Ok(self
            .inner
            .lock()
            .unwrap()
            .verification_status
            .unwrap_or(VerificationStatus::Success))
    }
}
