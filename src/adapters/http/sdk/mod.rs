//! HTTP adapter for browser SDK support.
//!
//! - `GET /api/client-token` - Browser-safe client token

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::sdk_routes;
