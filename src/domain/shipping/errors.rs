//! Shipping callback error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | UnsupportedCountry | 422 |
//! | MalformedPayload | 500 |

use thiserror::Error;

use crate::domain::foundation::ValidationError;

/// Errors raised while recalculating shipping for a callback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShippingError {
    /// The buyer's address is outside the country the merchant ships to.
    #[error("Shipping to '{country}' is not supported")]
    UnsupportedCountry { country: String },

    /// The callback payload could not be read.
    #[error("Malformed shipping callback payload: {0}")]
    MalformedPayload(String),
}

impl ShippingError {
    pub fn unsupported_country(country: impl Into<String>) -> Self {
        ShippingError::UnsupportedCountry {
            country: country.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        ShippingError::MalformedPayload(message.into())
    }

    /// Returns true when the platform should ask the buyer for another address.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ShippingError::UnsupportedCountry { .. })
    }
}

impl From<ValidationError> for ShippingError {
    fn from(err: ValidationError) -> Self {
        ShippingError::MalformedPayload(err.to_string())
    }
}
