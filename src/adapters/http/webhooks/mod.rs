//! HTTP adapter for platform webhooks.
//!
//! - `POST /api/webhooks` - Verify and acknowledge a platform event

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::webhook_routes;
