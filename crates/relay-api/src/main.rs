//! # Checkout Relay
//!
//! Thin backend forwarding storefront checkout requests to PayPal and LiqPay.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export PAYPAL_CLIENT_ID=...
//! export PAYPAL_CLIENT_SECRET=...
//! export LIQPAY_SUNDBOX_PUBLIC_KEY=...
//! export LIQPAY_SUNDBOX_PRIVET_KEY=...
//!
//! # Run the server
//! checkout-relay
//! ```

use relay_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Initialize application state
    let state = AppState::new()?;

    let addr = state.config.socket_addr();
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Order currency: {}", state.config.currency);

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("Checkout relay listening on http://{}", addr);

    if !is_prod {
        info!("PayPal orders: POST http://{}/api/orders", addr);
        info!("LiqPay form:   GET  http://{}/liqpay/form", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
