//! Shipping callback configuration

use serde::Deserialize;

use super::error::{require_http_url, ValidationError};
use super::server::Environment;
use crate::domain::shipping::{CountryCode, ShippingPolicy};

/// Shipping configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ShippingConfig {
    /// Two-letter code of the only country the merchant ships to
    #[serde(default = "default_supported_country")]
    pub supported_country: String,

    /// Public URL of `/api/shipping-callback`, registered on checkout orders
    pub callback_url: Option<String>,
}

impl ShippingConfig {
    /// Builds the shipping policy for the configured country.
    pub fn policy(&self) -> Result<ShippingPolicy, ValidationError> {
        let country = CountryCode::new(&self.supported_country)
            .map_err(|_| ValidationError::InvalidCountry {
                key: "SHIPPING__SUPPORTED_COUNTRY",
                value: self.supported_country.clone(),
            })?;
        Ok(ShippingPolicy::new(country))
    }

    /// Callback URL, if one is configured.
    pub fn callback_url(&self) -> Option<&str> {
        self.callback_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Validate shipping configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        self.policy()?;

        if let Some(url) = self.callback_url() {
            require_http_url("SHIPPING__CALLBACK_URL", url)?;
            // The platform refuses plain-HTTP callbacks on live orders.
            if *environment == Environment::Production && !url.starts_with("https://") {
                return Err(ValidationError::InsecureUrl {
                    key: "SHIPPING__CALLBACK_URL",
                });
            }
        }
        Ok(())
    }
}

impl Default for ShippingConfig {
    fn default() -> Self {
        Self {
            supported_country: default_supported_country(),
            callback_url: None,
        }
    }
}

fn default_supported_country() -> String {
    "US".to_string()
}
