//! CreateSetupTokenHandler - start saving a payment method without a purchase.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::checkout::CheckoutError;
use crate::domain::vault::{PaymentSourceKind, SetupTokenRequest};
use crate::ports::{PaymentPlatform, PlatformResponse};

/// Command to create a vault setup token.
#[derive(Debug, Clone, Default)]
pub struct CreateSetupTokenCommand {
    pub source: PaymentSourceKind,
    pub customer_id: Option<String>,
    pub return_url: Option<String>,
    pub cancel_url: Option<String>,
}

pub struct CreateSetupTokenHandler {
    platform: Arc<dyn PaymentPlatform>,
}

impl CreateSetupTokenHandler {
    pub fn new(platform: Arc<dyn PaymentPlatform>) -> Self {
        Self { platform }
    }

    pub async fn handle(
        &self,
        cmd: CreateSetupTokenCommand,
    ) -> Result<PlatformResponse, CheckoutError> {
        let request =
            SetupTokenRequest::new(cmd.source, cmd.customer_id, cmd.return_url, cmd.cancel_url)?;
        let request_id = Uuid::new_v4().to_string();

        let response = self
            .platform
            .create_setup_token(&request, &request_id)
            .await
            .map_err(|e| {
                warn!(request_id = %request_id, error = %e, "setup token request failed");
                CheckoutError::platform_failed(e.to_string())
            })?;

        info!(
            request_id = %request_id,
            source = ?request.source,
            status = response.status,
            "setup token created"
        );
        Ok(response)
    }
}
