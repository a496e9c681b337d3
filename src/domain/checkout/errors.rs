//! Checkout error types shared by the order, vault, subscription, and
//! webhook operations.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | EmptyCart | 400 |
//! | ValidationFailed | 400 |
//! | InvalidWebhookSignature | 401 |
//! | NotConfigured | 500 |
//! | PlatformFailed | 500 |

use thiserror::Error;

use crate::domain::foundation::ValidationError;

/// Errors from checkout-side operations relayed to the payments platform.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// An order needs at least one item.
    #[error("Cart is empty")]
    EmptyCart,

    /// A request field failed validation.
    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    /// The platform did not confirm the webhook's signature.
    #[error("Invalid webhook signature")]
    InvalidWebhookSignature,

    /// A setting the operation needs is absent from the configuration.
    #[error("Missing configuration: {0}")]
    NotConfigured(String),

    /// The call to the platform failed before a usable response came back.
    #[error("{reason}")]
    PlatformFailed { reason: String },
}

impl CheckoutError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        CheckoutError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn not_configured(setting: impl Into<String>) -> Self {
        CheckoutError::NotConfigured(setting.into())
    }

    pub fn platform_failed(reason: impl Into<String>) -> Self {
        CheckoutError::PlatformFailed {
            reason: reason.into(),
        }
    }

    /// Machine-readable code for API responses.
    pub fn code(&self) -> &'static str {
        match self {
            CheckoutError::EmptyCart => "EMPTY_CART",
            CheckoutError::ValidationFailed { .. } => "VALIDATION_FAILED",
            CheckoutError::InvalidWebhookSignature => "INVALID_WEBHOOK_SIGNATURE",
            CheckoutError::NotConfigured(_) => "NOT_CONFIGURED",
            CheckoutError::PlatformFailed { .. } => "PLATFORM_ERROR",
        }
    }
}

impl From<ValidationError> for CheckoutError {
    fn from(err: ValidationError) -> Self {
        CheckoutError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}
