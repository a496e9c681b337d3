//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `PaymentPlatform` - The payments platform REST API

mod payment_platform;

pub use payment_platform::{
    ClientToken, PaymentPlatform, PlatformError, PlatformErrorCode, PlatformResponse,
    VerificationStatus,
};
