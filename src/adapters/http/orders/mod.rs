//! HTTP adapter for order endpoints.
//!
//! - `POST /api/orders` - Create an order
//! - `POST /api/checkout-orders` - Create an order with shipping callback
//! - `POST /api/orders/:order_id/capture` - Capture an approved order
//! - `POST /api/orders/:order_id/authorize` - Authorize an approved order

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::order_routes;
