//! IssueClientTokenHandler - browser-safe tokens for the card fields and Fastlane SDKs.

use std::sync::Arc;

use tracing::warn;

use crate::domain::checkout::CheckoutError;
use crate::ports::{ClientToken, PaymentPlatform};

pub struct IssueClientTokenHandler {
    platform: Arc<dyn PaymentPlatform>,
}

impl IssueClientTokenHandler {
    pub fn new(platform: Arc<dyn PaymentPlatform>) -> Self {
        Self { platform }
    }

    pub async fn handle(&self) -> Result<ClientToken, CheckoutError> {
        let token = self.platform.generate_client_token().await.map_err(|e| {
            warn!(error = %e, "client token request failed");
            CheckoutError::platform_failed(e.to_string())
        })?;

        if token.token.is_empty() {
            return Err(CheckoutError::platform_failed("platform returned an empty client token"));
        }
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::paypal::{MockEndpoint, MockPaymentPlatform};
    use crate::ports::{PlatformError, PlatformResponse};
    use serde_json::json;

    #[tokio::test]
    async fn returns_platform_token() {
        let mock = MockPaymentPlatform::new();
        let token = IssueClientTokenHandler::new(Arc::new(mock)).handle().await.unwrap();
        assert!(!token.token.is_empty());
    }

    #[tokio::test]
    async fn empty_token_is_an_error() {
        let mock = MockPaymentPlatform::new();
        mock.set_response(MockEndpoint::ClientToken, PlatformResponse::new(200, json!({})));
        let err = IssueClientTokenHandler::new(Arc::new(mock)).handle().await.unwrap_err();
        assert_eq!(err.code(), "PLATFORM_ERROR");
    }

    #[tokio::test]
    async fn authentication_failure_is_reported() {
        let mock = MockPaymentPlatform::new();
        mock.set_error(MockEndpoint::ClientToken, PlatformError::authentication("invalid_client"));
        let err = IssueClientTokenHandler::new(Arc::new(mock)).handle().await.unwrap_err();
        assert!(err.to_string().contains("invalid_client"));
    }
}
