//! Merchant shipping policy.

use super::address::{CountryCode, ShippingAddress};
use super::errors::ShippingError;

/// Where the merchant ships to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingPolicy {
    supported_country: CountryCode,
}

impl ShippingPolicy {
    pub fn new(supported_country: CountryCode) -> Self {
        Self { supported_country }
    }

    pub fn supported_country(&self) -> &CountryCode {
        &self.supported_country
    }

    /// Rejects addresses outside the supported country.
    pub fn ensure_deliverable(&self, address: &ShippingAddress) -> Result<(), ShippingError> {
        if address.country_code != self.supported_country {
            tracing::info!(
                country = %address.country_code,
                supported = %self.supported_country,
                "Rejecting shipping address outside supported country"
            );
            return Err(ShippingError::unsupported_country(
                address.country_code.as_str(),
            ));
        }
        Ok(())
    }
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self::new(CountryCode::us())
    }
}
