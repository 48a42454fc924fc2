//! # Routes
//!
//! Axum router configuration for the checkout relay.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - GET  `/health` - Health check
/// - POST `/api/token` - PayPal identity client token
/// - POST `/api/orders` - Create PayPal order from a cart
/// - POST `/api/orders/{order_id}/capture` - Capture an approved order
/// - POST `/api/confirmOrder` - Forward Google Pay approval to PayPal
/// - GET  `/liqpay/form` - Signed LiqPay checkout form (demo payment)
pub fn create_router(state: AppState) -> Router {
    // The storefront is served from a different origin in development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/token", post(handlers::generate_token))
        .route("/orders", post(handlers::create_order))
        .route("/orders/{order_id}/capture", post(handlers::capture_order))
        .route("/confirmOrder", post(handlers::confirm_order));

    let liqpay_routes = Router::new().route("/form", get(handlers::liqpay_form));

    Router::new()
        .route("/health", get(handlers::health))
        .route("/", get(handlers::health))
        .nest("/api", api_routes)
        .nest("/liqpay", liqpay_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppConfig;
    use axum_test::TestServer;
    use relay_core::Currency;
    use relay_liqpay::{LiqPayConfig, LiqPaySigner};
    use relay_paypal::{PayPalConfig, PayPalGateway};
    use serde_json::{json, Value};

    fn test_state() -> AppState {
        // Gateway points at a closed local port so upstream calls fail fast.
        let paypal = PayPalGateway::new(
            PayPalConfig::new("client", "secret").with_api_base_url("http://127.0.0.1:9"),
        );
        let liqpay = LiqPaySigner::new(LiqPayConfig::new("sandbox_pub", "sandbox_priv"));
        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 8888,
            currency: Currency::EUR,
            environment: "test".to_string(),
        };
        AppState::with_parts(paypal, liqpay, config)
    }

    fn server() -> TestServer {
        TestServer::new(create_router(test_state())).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = server().get("/health").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["service"], "checkout-relay");
    }

    #[tokio::test]
    async fn test_liqpay_form_shape() {
        let response = server().get("/liqpay/form").await;
        response.assert_status_ok();

        let body: Value = response.json();
        let form = body["form"].as_str().unwrap();
        assert!(form.starts_with("<form method=\"POST\""));
        assert!(form.contains("name=\"data\""));
        assert!(form.contains("name=\"signature\""));
        assert!(form.contains("sdk-button"));
    }

    #[tokio::test]
    async fn test_create_order_upstream_failure_is_static_500() {
        let response = server()
            .post("/api/orders")
            .json(&json!({"cart": [{"price": "100.00"}]}))
            .await;

        response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body, json!({"error": "Failed to create order."}));
    }

    #[tokio::test]
    async fn test_capture_route_static_500_body() {
        let response = server().post("/api/orders/ORDER123/capture").await;

        response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body, json!({"error": "Failed to capture order."}));
    }
}
