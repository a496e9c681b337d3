//! Configuration errors

use thiserror::Error;

/// Failure to read or accept the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable was present but could not be decoded into its field.
    #[error("could not read configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// A decoded value this server cannot run with.
///
/// `key` is the variable name without the `CHECKOUT_RELAY__` prefix.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{key} is required")]
    Missing { key: &'static str },

    #[error("{key} must be between {min} and {max}, got {value}")]
    OutOfRange {
        key: &'static str,
        value: u64,
        min: u64,
        max: u64,
    },

    #[error("{key} is not an http(s) URL: '{value}'")]
    NotHttpUrl { key: &'static str, value: String },

    #[error("{key} must use https in production")]
    InsecureUrl { key: &'static str },

    #[error("{key} is not a two-letter country code: '{value}'")]
    InvalidCountry { key: &'static str, value: String },
}

/// Accepts `http://` and `https://` URLs only.
pub(super) fn require_http_url(key: &'static str, url: &str) -> Result<(), ValidationError> {
    if url.starts_with("https://") || url.starts_with("http://") {
        Ok(())
    } else {
        Err(ValidationError::NotHttpUrl {
            key,
            value: url.to_string(),
        })
    }
}
