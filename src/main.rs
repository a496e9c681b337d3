//! Checkout Relay server binary.

use std::sync::Arc;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use checkout_relay::adapters::{relay_app, PayPalConfig, PayPalPlatformAdapter, RelayAppState};
use checkout_relay::config::{AppConfig, LogFormat, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let platform = PayPalPlatformAdapter::new(
        PayPalConfig::new(&config.payment.client_id, &config.payment.client_secret)
            .with_base_url(config.payment.api_base_url()),
    );
    let state = RelayAppState::new(Arc::new(platform))
        .with_shipping_policy(config.shipping.policy()?)
        .with_shipping_callback_url(config.shipping.callback_url().map(str::to_string))
        .with_webhook_id(config.payment.webhook_id().map(str::to_string));

    if state.shipping_callback_url.is_none() {
        tracing::warn!("no shipping callback URL configured; checkout orders will not register one");
    }
    if state.webhook_id.is_none() {
        tracing::warn!("no webhook id configured; webhook deliveries will be refused");
    }

    let app = relay_app(state, config.server.request_timeout());

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        platform = config.payment.api_base_url(),
        "checkout relay listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("checkout relay stopped");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_filter));
    let registry = tracing_subscriber::registry().with(filter);

    match server.log_format {
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(fmt::layer().with_target(false)).init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
