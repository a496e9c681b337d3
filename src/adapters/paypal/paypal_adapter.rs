//! PayPal REST adapter.
//!
//! Implements the `PaymentPlatform` trait against the PayPal REST API.
//! Requests authenticate with an OAuth2 client-credentials bearer token that
//! is cached until shortly before it expires.
//!
//! # Configuration
//!
//! ```ignore
//! let config = PayPalConfig::new(client_id, client_secret);
//! let adapter = PayPalPlatformAdapter::new(config);
//! ```

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::Value;

use crate::domain::checkout::{CheckoutError, OrderDraft};
use crate::domain::subscription::SubscriptionPlanRequest;
use crate::domain::vault::{PaymentTokenRequest, SetupTokenRequest};
use crate::domain::webhook::WebhookTransmission;
use crate::ports::{
    ClientToken, PaymentPlatform, PlatformError, PlatformErrorCode, PlatformResponse,
    VerificationStatus,
};

use super::access_token::AccessTokenCache;
use super::payloads;

/// Sandbox REST endpoint.
pub const SANDBOX_API_BASE_URL: &str = "https://api-m.sandbox.paypal.com";

/// Live REST endpoint.
pub const LIVE_API_BASE_URL: &str = "https://api-m.paypal.com";

/// Header carrying the idempotency key for create calls.
const REQUEST_ID_HEADER: &str = "PayPal-Request-Id";

/// PayPal API configuration.
#[derive(Clone)]
pub struct PayPalConfig {
    client_id: String,

    client_secret: SecretString,

    /// Base URL for the REST API (default: sandbox).
    api_base_url: String,
}

impl PayPalConfig {
    /// Create a sandbox configuration.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: SecretString::new(client_secret.into()),
            api_base_url: SANDBOX_API_BASE_URL.to_string(),
        }
    }

    /// Set a custom API base URL (live endpoint or a test server).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

/// OAuth2 token endpoint response.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

/// Webhook verification endpoint response.
#[derive(Debug, Deserialize)]
struct VerifyWebhookResponse {
    verification_status: VerificationStatus,
}

/// PayPal payment platform adapter.
pub struct PayPalPlatformAdapter {
    config: PayPalConfig,
    http_client: reqwest::Client,
    token_cache: AccessTokenCache,
}

impl PayPalPlatformAdapter {
    /// Create a new adapter with the given configuration.
    pub fn new(config: PayPalConfig) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    /// Create an adapter around an existing HTTP client.
    pub fn with_client(config: PayPalConfig, http_client: reqwest::Client) -> Self {
        Self {
            config,
            http_client,
            token_cache: AccessTokenCache::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_base_url, path)
    }

    /// Call the OAuth2 token endpoint with client credentials.
    async fn request_token(&self, params: &[(&str, &str)]) -> Result<TokenResponse, PlatformError> {
        let response = self
            .http_client
            .post(self.url("/v1/oauth2/token"))
            .basic_auth(
                &self.config.client_id,
                Some(self.config.client_secret.expose_secret()),
            )
            .form(params)
            .send()
            .await
            .map_err(|e| PlatformError::network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(%status, error = %error_text, "PayPal token request failed");
            return Err(PlatformError::authentication(format!(
                "Token request failed with status {}",
                status
            )));
        }

        response.json().await.map_err(|e| {
            PlatformError::invalid_response(format!("Failed to parse token response: {}", e))
        })
    }

    /// Bearer token for API calls, from cache when still fresh.
    async fn access_token(&self) -> Result<String, PlatformError> {
        if let Some(token) = self.token_cache.get().await {
            return Ok(token);
        }

        tracing::debug!("Requesting new PayPal access token");
        let token = self
            .request_token(&[("grant_type", "client_credentials")])
            .await?;
        self.token_cache
            .store(token.access_token.clone(), token.expires_in)
            .await;
        Ok(token.access_token)
    }

    /// POST a JSON body (or none) and return the platform's answer.
    async fn post_json(
        &self,
        path: &str,
        body: Option<&Value>,
        request_id: Option<&str>,
    ) -> Result<PlatformResponse, PlatformError> {
        let token = self.access_token().await?;

        let mut request = self
            .http_client
            .post(self.url(path))
            .bearer_auth(token)
            .header(CONTENT_TYPE, "application/json");
        if let Some(request_id) = request_id {
            request = request.header(REQUEST_ID_HEADER, request_id);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!(path, error = %e, "PayPal request failed");
            PlatformError::network(e.to_string())
        })?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            // Revoked or rotated credentials; force a fresh token next call.
            self.token_cache.clear().await;
        }

        let response = read_response(response).await?;
        tracing::debug!(path, status = response.status, "PayPal responded");
        Ok(response)
    }
}

/// Status plus parsed JSON body; an empty body reads as `null`.
async fn read_response(response: reqwest::Response) -> Result<PlatformResponse, PlatformError> {
    let status = response.status().as_u16();
    let text = response
        .text()
        .await
        .map_err(|e| PlatformError::network(e.to_string()))?;

    if text.trim().is_empty() {
        return Ok(PlatformResponse::new(status, Value::Null));
    }

    let body = serde_json::from_str(&text).map_err(|e| {
        tracing::warn!(status, error = %e, "PayPal returned a non-JSON body");
        PlatformError::invalid_response(format!("Invalid JSON from platform: {}", e))
    })?;
    Ok(PlatformResponse::new(status, body))
}

fn invalid_request(err: CheckoutError) -> PlatformError {
    PlatformError::new(PlatformErrorCode::ProviderError, err.to_string())
}

#[async_trait]
impl PaymentPlatform for PayPalPlatformAdapter {
    async fn generate_client_token(&self) -> Result<ClientToken, PlatformError> {
        let token = self
            .request_token(&[
                ("grant_type", "client_credentials"),
                ("response_type", "client_token"),
                ("intent", "sdk_init"),
            ])
            .await?;

        Ok(ClientToken {
            token: token.access_token,
            expires_in: token.expires_in,
        })
    }

    async fn create_order(
        &self,
        draft: &OrderDraft,
        request_id: &str,
    ) -> Result<PlatformResponse, PlatformError> {
        let body = payloads::order_body(draft).map_err(invalid_request)?;
        self.post_json("/v2/checkout/orders", Some(&body), Some(request_id))
            .await
    }

    async fn capture_order(&self, order_id: &str) -> Result<PlatformResponse, PlatformError> {
        let path = format!("/v2/checkout/orders/{}/capture", order_id);
        self.post_json(&path, None, None).await
    }

    async fn authorize_order(&self, order_id: &str) -> Result<PlatformResponse, PlatformError> {
        let path = format!("/v2/checkout/orders/{}/authorize", order_id);
        self.post_json(&path, None, None).await
    }

    async fn create_setup_token(
        &self,
        request: &SetupTokenRequest,
        request_id: &str,
    ) -> Result<PlatformResponse, PlatformError> {
        let body = payloads::setup_token_body(request);
        self.post_json("/v3/vault/setup-tokens", Some(&body), Some(request_id))
            .await
    }

    async fn create_payment_token(
        &self,
        request: &PaymentTokenRequest,
        request_id: &str,
    ) -> Result<PlatformResponse, PlatformError> {
        let body = payloads::payment_token_body(request);
        self.post_json("/v3/vault/payment-tokens", Some(&body), Some(request_id))
            .await
    }

    async fn create_product(
        &self,
        request: &SubscriptionPlanRequest,
    ) -> Result<PlatformResponse, PlatformError> {
        let body = payloads::product_body(request);
        self.post_json("/v1/catalogs/products", Some(&body), None)
            .await
    }

    async fn create_plan(
        &self,
        request: &SubscriptionPlanRequest,
        product_id: &str,
    ) -> Result<PlatformResponse, PlatformError> {
        let body = payloads::plan_body(request, product_id);
        self.post_json("/v1/billing/plans", Some(&body), None).await
    }

    async fn verify_webhook_signature(
        &self,
        transmission: &WebhookTransmission,
        webhook_id: &str,
        event: &Value,
    ) -> Result<VerificationStatus, PlatformError> {
        let body = payloads::verify_webhook_body(transmission, webhook_id, event);
        let response = self
            .post_json("/v1/notifications/verify-webhook-signature", Some(&body), None)
            .await?;

        if !response.is_success() {
            return Err(PlatformError::new(
                PlatformErrorCode::ProviderError,
                format!("Webhook verification returned status {}", response.status),
            ));
        }

        let verified: VerifyWebhookResponse =
            serde_json::from_value(response.body).map_err(|e| {
                PlatformError::invalid_response(format!("Invalid verification response: {}", e))
            })?;
        Ok(verified.verification_status)
    }
}
