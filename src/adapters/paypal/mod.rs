//! PayPal payment platform adapter.
//!
//! Implements the `PaymentPlatform` port against the PayPal REST API:
//! - Orders (create, capture, authorize)
//! - Vault setup and payment tokens
//! - Catalog products and billing plans
//! - Webhook signature verification
//! - Browser-safe client tokens
//!
//! # Security
//!
//! - The client secret is held in `secrecy::SecretString`
//! - Webhook authenticity is checked by the platform's verify endpoint
//!
//! # Configuration
//!
//! Set `CHECKOUT_RELAY__PAYMENT__CLIENT_ID` and
//! `CHECKOUT_RELAY__PAYMENT__CLIENT_SECRET`; see `config::PaymentConfig`.

mod access_token;
mod mock_platform;
mod payloads;
mod paypal_adapter;

pub use access_token::AccessTokenCache;
pub use mock_platform::{MethodCall, MockEndpoint, MockPaymentPlatform};
pub use paypal_adapter::{
    PayPalConfig, PayPalPlatformAdapter, LIVE_API_BASE_URL, SANDBOX_API_BASE_URL,
};
