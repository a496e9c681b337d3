//! Payment platform port for the external payments REST API.
//!
//! Every checkout operation other than the shipping callback is forwarded
//! to the platform. Implementations translate the typed requests below into
//! the platform's wire payloads and hand back its status and JSON body
//! unchanged.
//!
//! # Design
//!
//! - **Pass-through**: non-2xx platform answers are responses, not errors
//! - **Errors are transport-level**: `PlatformError` means no usable answer
//! - **Idempotent creates**: callers supply a request id per create call

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::checkout::OrderDraft;
use crate::domain::subscription::SubscriptionPlanRequest;
use crate::domain::vault::{PaymentTokenRequest, SetupTokenRequest};
use crate::domain::webhook::WebhookTransmission;

/// Port for the payments platform REST API.
#[async_trait]
pub trait PaymentPlatform: Send + Sync {
    /// Issue a browser-safe client token for the card fields and Fastlane SDKs.
    async fn generate_client_token(&self) -> Result<ClientToken, PlatformError>;

    /// Create an order from a draft.
    async fn create_order(
        &self,
        draft: &OrderDraft,
        request_id: &str,
    ) -> Result<PlatformResponse, PlatformError>;

    /// Capture payment for an approved order.
    async fn capture_order(&self, order_id: &str) -> Result<PlatformResponse, PlatformError>;

    /// Authorize payment for an approved order.
    async fn authorize_order(&self, order_id: &str) -> Result<PlatformResponse, PlatformError>;

    /// Create a vault setup token.
    async fn create_setup_token(
        &self,
        request: &SetupTokenRequest,
        request_id: &str,
    ) -> Result<PlatformResponse, PlatformError>;

    /// Exchange an approved setup token for a payment token.
    async fn create_payment_token(
        &self,
        request: &PaymentTokenRequest,
        request_id: &str,
    ) -> Result<PlatformResponse, PlatformError>;

    /// Create the catalog product a billing plan is attached to.
    async fn create_product(
        &self,
        request: &SubscriptionPlanRequest,
    ) -> Result<PlatformResponse, PlatformError>;

    /// Create a billing plan for an existing product.
    async fn create_plan(
        &self,
        request: &SubscriptionPlanRequest,
        product_id: &str,
    ) -> Result<PlatformResponse, PlatformError>;

    /// Ask the platform whether a webhook delivery is authentic.
    async fn verify_webhook_signature(
        &self,
        transmission: &WebhookTransmission,
        webhook_id: &str,
        event: &Value,
    ) -> Result<VerificationStatus, PlatformError>;
}

/// The platform's HTTP status and JSON body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformResponse {
    pub status: u16,
    pub body: Value,
}

impl PlatformResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Reads a top-level string field such as `id`.
    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.body.get(name).and_then(Value::as_str)
    }
}

/// Browser-safe token for client-side SDK components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientToken {
    pub token: String,
    /// Lifetime in seconds.
    pub expires_in: i64,
}

/// Outcome of a webhook signature check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VerificationStatus {
    Success,
    Failure,
}

/// Errors from payment platform calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformError {
    /// Error code for categorization.
    pub code: PlatformErrorCode,

    /// Human-readable message.
    pub message: String,
}

impl PlatformError {
    pub fn new(code: PlatformErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(PlatformErrorCode::NetworkError, message)
    }

    /// Create an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(PlatformErrorCode::AuthenticationError, message)
    }

    /// Create an error for a body that could not be read.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(PlatformErrorCode::InvalidResponse, message)
    }
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for PlatformError {}

/// Platform error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformErrorCode {
    /// Network connectivity issue.
    NetworkError,

    /// Client credentials were rejected.
    AuthenticationError,

    /// Response body was not the expected JSON.
    InvalidResponse,

    /// Platform rejected the call outright.
    ProviderError,
}

impl std::fmt::Display for PlatformErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PlatformErrorCode::NetworkError => "network_error",
            PlatformErrorCode::AuthenticationError => "authentication_error",
            PlatformErrorCode::InvalidResponse => "invalid_response",
            PlatformErrorCode::ProviderError => "provider_error",
        };
        write!(f, "{}", s)
    }
}
