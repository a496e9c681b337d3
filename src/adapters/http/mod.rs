//! HTTP adapters - REST API implementations.
//!
//! Each endpoint group has its own module with DTOs, handlers, and routes.
//! All of them share [`RelayAppState`].

pub mod error;
pub mod orders;
pub mod sdk;
pub mod shipping;
pub mod state;
pub mod subscriptions;
pub mod vault;
pub mod webhooks;

use std::time::Duration;

use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub use error::{CheckoutApiError, ErrorResponse, PlatformReply};
pub use orders::order_routes;
pub use sdk::sdk_routes;
pub use shipping::{shipping_routes, ShippingApiError};
pub use state::RelayAppState;
pub use subscriptions::subscription_routes;
pub use vault::vault_routes;
pub use webhooks::webhook_routes;

/// Every relay route, mounted under `/api`.
pub fn api_router() -> Router<RelayAppState> {
    let api = Router::new()
        .merge(shipping_routes())
        .merge(order_routes())
        .merge(vault_routes())
        .merge(subscription_routes())
        .merge(webhook_routes())
        .merge(sdk_routes());

    Router::new().nest("/api", api)
}

/// The complete application: routes, state, request tracing, and timeout.
pub fn relay_app(state: RelayAppState, request_timeout: Duration) -> Router {
    api_router()
        .with_state(state)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
}
