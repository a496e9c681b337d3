//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum routes exposed to browsers and the platform
//! - `paypal` - PayPal REST implementation of `PaymentPlatform`, plus a mock

pub mod http;
pub mod paypal;

pub use http::{relay_app, RelayAppState};
pub use paypal::{MockPaymentPlatform, PayPalConfig, PayPalPlatformAdapter};
