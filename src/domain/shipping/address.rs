//! Shipping destination value objects.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// ISO 3166-1 alpha-2 country code, stored upper-case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    /// Parses a two-letter country code, ignoring case.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("country_code"));
        }
        if trimmed.len() != 2 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::invalid_format(
                "country_code",
                format!("'{}' is not a two-letter country code", trimmed),
            ));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// The United States.
    pub fn us() -> Self {
        Self("US".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CountryCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The part of a buyer's shipping address the platform shares with the callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingAddress {
    pub country_code: CountryCode,
    /// State or province.
    pub admin_area_1: Option<String>,
    /// City or town.
    pub admin_area_2: Option<String>,
    pub postal_code: Option<String>,
}

impl ShippingAddress {
    pub fn new(country_code: CountryCode) -> Self {
        Self {
            country_code,
            admin_area_1: None,
            admin_area_2: None,
            postal_code: None,
        }
    }
}
