//! # Request Handlers
//!
//! Axum handlers relaying checkout calls to the gateways. Successful gateway
//! replies pass through with the upstream status and JSON body untouched;
//! gateway errors are logged with their detail and collapsed to a `500` with
//! a static message, so upstream internals never leak to the frontend.

use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use relay_core::{Cart, GatewayReply, RelayResult};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{error, instrument};
use uuid::Uuid;

// =============================================================================
// Request/Response Types
// =============================================================================

/// Body of `POST /api/orders`
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    /// Cart line items from the storefront
    #[serde(default)]
    pub cart: Cart,
}

/// Body of `GET /liqpay/form`
#[derive(Debug, Serialize)]
pub struct LiqPayFormResponse {
    /// Signed, self-submitting checkout form snippet
    pub form: String,
}

/// Convert a gateway outcome into a response: mirror the upstream status on
/// success, collapse to a static-message `500` on failure.
fn relay(result: RelayResult<GatewayReply>, fallback: &'static str) -> Response {
    match result {
        Ok(reply) => {
            let status = StatusCode::from_u16(reply.status)
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, Json(reply.body)).into_response()
        }
        Err(err) => {
            error!("{} ({})", fallback, err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": fallback })),
            )
                .into_response()
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "checkout-relay",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// `POST /api/token` — relay an identity client token for the frontend SDK
#[instrument(skip(state))]
pub async fn generate_token(State(state): State<AppState>) -> Response {
    relay(
        state.paypal.client_token().await,
        "Failed to generate client token.",
    )
}

/// `POST /api/orders` — create a PayPal order from the posted cart
#[instrument(skip(state, request), fields(items = request.cart.0.len()))]
pub async fn create_order(
    State(state): State<AppState>,
    Json(request): Json<CreateOrderRequest>,
) -> Response {
    relay(
        state
            .paypal
            .create_order(&request.cart, state.config.currency)
            .await,
        "Failed to create order.",
    )
}

/// `POST /api/orders/{order_id}/capture` — capture an approved order
#[instrument(skip(state), fields(order_id = %order_id))]
pub async fn capture_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Response {
    relay(
        state.paypal.capture_order(&order_id).await,
        "Failed to capture order.",
    )
}

/// `POST /api/confirmOrder` — forward a Google Pay approval to PayPal
#[instrument(skip(state, body))]
pub async fn confirm_order(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    relay(
        state.paypal.confirm_order(&body).await,
        "Failed to confirm order.",
    )
}

/// `GET /liqpay/form` — signed checkout form for the fixed demo payment
/// (50 UAH, fresh order id per request)
#[instrument(skip(state))]
pub async fn liqpay_form(State(state): State<AppState>) -> Response {
    let mut params = relay_liqpay::Params::new();
    params.insert("action".to_string(), json!("pay"));
    params.insert("amount".to_string(), json!("50"));
    params.insert("currency".to_string(), json!("UAH"));
    params.insert("description".to_string(), json!("description text"));
    params.insert("order_id".to_string(), json!(Uuid::new_v4().to_string()));
    params.insert("version".to_string(), json!("3"));

    match state.liqpay.checkout_form(&params) {
        Ok(form) => Json(LiqPayFormResponse { form }).into_response(),
        Err(err) => {
            error!("Failed to build LiqPay form. ({})", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to build LiqPay form." })),
            )
                .into_response()
        }
    }
}
