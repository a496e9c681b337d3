//! Vault module - stored payment method requests.
//!
//! The platform owns every vaulted credential. This server only relays the
//! two-step exchange: a setup token is created for the buyer, approved in the
//! browser, then swapped for a long-lived payment token.

use serde::{Deserialize, Serialize};

use crate::domain::checkout::CheckoutError;

/// Payment method family being vaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentSourceKind {
    #[default]
    Card,
    Paypal,
}

/// Request for a setup token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupTokenRequest {
    pub source: PaymentSourceKind,
    /// Existing platform customer to attach the token to.
    pub customer_id: Option<String>,
    pub return_url: Option<String>,
    pub cancel_url: Option<String>,
}

impl SetupTokenRequest {
    /// Wallet vaulting needs both redirect URLs for the approval flow.
    pub fn new(
        source: PaymentSourceKind,
        customer_id: Option<String>,
        return_url: Option<String>,
        cancel_url: Option<String>,
    ) -> Result<Self, CheckoutError> {
        if source == PaymentSourceKind::Paypal {
            if return_url.as_deref().map_or(true, str::is_empty) {
                return Err(CheckoutError::validation(
                    "return_url",
                    "return_url is required to vault a PayPal wallet",
                ));
            }
            if cancel_url.as_deref().map_or(true, str::is_empty) {
                return Err(CheckoutError::validation(
                    "cancel_url",
                    "cancel_url is required to vault a PayPal wallet",
                ));
            }
        }

        Ok(Self {
            source,
            customer_id: customer_id.filter(|id| !id.trim().is_empty()),
            return_url,
            cancel_url,
        })
    }
}

/// Request to exchange an approved setup token for a payment token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentTokenRequest {
    pub setup_token_id: String,
}

impl PaymentTokenRequest {
    pub fn new(setup_token_id: impl Into<String>) -> Result<Self, CheckoutError> {
        let setup_token_id = setup_token_id.into().trim().to_string();
        if setup_token_id.is_empty() {
            return Err(CheckoutError::validation(
                "vault_setup_token",
                "setup token id cannot be empty",
            ));
        }
        Ok(Self { setup_token_id })
    }
}
