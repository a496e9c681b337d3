//! CreatePaymentTokenHandler - exchange an approved setup token for a saved payment method.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::checkout::CheckoutError;
use crate::domain::vault::PaymentTokenRequest;
use crate::ports::{PaymentPlatform, PlatformResponse};

/// Command to create a payment token.
#[derive(Debug, Clone)]
pub struct CreatePaymentTokenCommand {
    pub vault_setup_token: String,
}

pub struct CreatePaymentTokenHandler {
    platform: Arc<dyn PaymentPlatform>,
}

impl CreatePaymentTokenHandler {
    pub fn new(platform: Arc<dyn PaymentPlatform>) -> Self {
        Self { platform }
    }

    pub async fn handle(
        &self,
        cmd: CreatePaymentTokenCommand,
    ) -> Result<PlatformResponse, CheckoutError> {
        let request = PaymentTokenRequest::new(cmd.vault_setup_token)?;
        let request_id = Uuid::new_v4().to_string();

        let response = self
            .platform
            .create_payment_token(&request, &request_id)
            .await
            .map_err(|e| {
                warn!(request_id = %request_id, error = %e, "payment token request failed");
                CheckoutError::platform_failed(e.to_string())
            })?;

        // The customer id links later vaulted purchases to this buyer.
        info!(
            request_id = %request_id,
            status = response.status,
            customer_id = ?response.body.pointer("/customer/id").and_then(|v| v.as_str()),
            "payment token created"
        );
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::paypal::{MockEndpoint, MockPaymentPlatform};

    #[tokio::test]
    async fn forwards_setup_token_id() {
        let mock = MockPaymentPlatform::new();
        let response = CreatePaymentTokenHandler::new(Arc::new(mock.clone()))
            .handle(CreatePaymentTokenCommand {
                vault_setup_token: " 5C991763VB2781612 ".to_string(),
            })
            .await
            .unwrap();

        assert!(response.is_success());
        let calls = mock.calls_to(MockEndpoint::CreatePaymentToken);
        assert_eq!(calls[0].args[0], "5C991763VB2781612");
        assert_eq!(
            calls[0].body.as_ref().unwrap()["payment_source"]["token"]["type"],
            "SETUP_TOKEN"
        );
    }

    #[tokio::test]
    async fn empty_setup_token_is_rejected() {
        let mock = MockPaymentPlatform::new();
        let err = CreatePaymentTokenHandler::new(Arc::new(mock.clone()))
            .handle(CreatePaymentTokenCommand {
                vault_setup_token: String::new(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code(), "VALIDATION_FAILED");
        assert!(mock.calls().is_empty());
    }
}
