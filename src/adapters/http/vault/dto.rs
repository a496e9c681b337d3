//! Request DTOs for vault endpoints.

use serde::Deserialize;

use crate::application::handlers::{CreatePaymentTokenCommand, CreateSetupTokenCommand};
use crate::domain::vault::PaymentSourceKind;

/// Body of `POST /api/vault/setup-token`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SetupTokenRequestBody {
    #[serde(default)]
    pub payment_source: PaymentSourceKind,
    pub customer_id: Option<String>,
    pub return_url: Option<String>,
    pub cancel_url: Option<String>,
}

impl From<SetupTokenRequestBody> for CreateSetupTokenCommand {
    fn from(body: SetupTokenRequestBody) -> Self {
        Self {
            source: body.payment_source,
            customer_id: body.customer_id,
            return_url: body.return_url,
            cancel_url: body.cancel_url,
        }
    }
}

/// Body of `POST /api/vault/payment-token`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentTokenRequestBody {
    #[serde(default)]
    pub vault_setup_token: String,
}

impl From<PaymentTokenRequestBody> for CreatePaymentTokenCommand {
    fn from(body: PaymentTokenRequestBody) -> Self {
        Self {
            vault_setup_token: body.vault_setup_token,
        }
    }
}
