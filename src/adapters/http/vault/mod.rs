//! HTTP adapter for vault endpoints.
//!
//! - `POST /api/vault/setup-token` - Create a setup token
//! - `POST /api/vault/payment-token` - Create a payment token

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::vault_routes;
