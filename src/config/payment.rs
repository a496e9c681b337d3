//! Payment platform configuration

use serde::Deserialize;

use super::error::{require_http_url, ValidationError};
use crate::adapters::paypal::{LIVE_API_BASE_URL, SANDBOX_API_BASE_URL};

/// Payment platform configuration (PayPal REST credentials)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentConfig {
    /// REST app client id
    #[serde(default)]
    pub client_id: String,

    /// REST app client secret
    #[serde(default)]
    pub client_secret: String,

    /// Which platform environment to talk to
    #[serde(default)]
    pub platform: PlatformEnvironment,

    /// Overrides the environment's base URL (mock servers, proxies)
    pub api_base_url: Option<String>,

    /// Webhook id used when verifying deliveries
    pub webhook_id: Option<String>,
}

/// Platform environment
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlatformEnvironment {
    #[default]
    Sandbox,
    Live,
}

impl PlatformEnvironment {
    pub fn base_url(&self) -> &'static str {
        match self {
            PlatformEnvironment::Sandbox => SANDBOX_API_BASE_URL,
            PlatformEnvironment::Live => LIVE_API_BASE_URL,
        }
    }
}

impl PaymentConfig {
    /// Base URL for platform calls, honouring the override.
    pub fn api_base_url(&self) -> &str {
        self.api_base_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| self.platform.base_url())
    }

    /// Check if using live credentials
    pub fn is_live_mode(&self) -> bool {
        self.platform == PlatformEnvironment::Live
    }

    /// Webhook id, if one is configured.
    pub fn webhook_id(&self) -> Option<&str> {
        self.webhook_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }

    /// Validate payment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.client_id.trim().is_empty() {
            return Err(ValidationError::Missing { key: "PAYMENT__CLIENT_ID" });
        }
        if self.client_secret.trim().is_empty() {
            return Err(ValidationError::Missing { key: "PAYMENT__CLIENT_SECRET" });
        }
        require_http_url("PAYMENT__API_BASE_URL", self.api_base_url())
    }
}
