//! HTTP adapter for subscription endpoints.
//!
//! - `POST /api/subscriptions/plan` - Create a product and billing plan

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::subscription_routes;
