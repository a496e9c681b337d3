//! HTTP adapter for the shipping recalculation callback.
//!
//! - `POST /api/shipping-callback` - Recalculate totals for a shipping change

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::ShippingApiError;
pub use routes::shipping_routes;
