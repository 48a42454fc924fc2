//! # PayPal Order Gateway
//!
//! Builds and sends the Checkout Orders v2 calls and relays whatever PayPal
//! answers. Every operation is a pure pass-through: the upstream JSON body and
//! HTTP status come back verbatim in a `GatewayReply`, 4xx/5xx included, so
//! the route layer can propagate them to the frontend untouched.

use crate::auth::{PayPalAuth, SharedAccessTokens};
use crate::config::PayPalConfig;
use relay_core::{Cart, Currency, GatewayReply, RelayError, RelayResult};
use reqwest::{Client, Response};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Gateway over the PayPal REST API.
///
/// Holds only read-only configuration and a shared HTTP client; safe to clone
/// into concurrent request handlers.
#[derive(Clone)]
pub struct PayPalGateway {
    config: PayPalConfig,
    client: Client,
    tokens: SharedAccessTokens,
}

impl PayPalGateway {
    /// Create a gateway with its own client-credentials token provider
    pub fn new(config: PayPalConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        let tokens = Arc::new(PayPalAuth::new(config.clone(), client.clone()));

        Self {
            config,
            client,
            tokens,
        }
    }

    /// Create from environment variables
    pub fn from_env() -> RelayResult<Self> {
        let config = PayPalConfig::from_env()?;
        Ok(Self::new(config))
    }

    /// Create with an explicit token provider (for testing)
    pub fn with_tokens(config: PayPalConfig, tokens: SharedAccessTokens) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            client,
            tokens,
        }
    }

    /// Create a Checkout Order with intent `CAPTURE`.
    ///
    /// The single purchase unit's amount is the price of the first cart line
    /// item; the currency code is the deployment's fixed currency.
    #[instrument(skip(self, cart), fields(items = cart.0.len()))]
    pub async fn create_order(&self, cart: &Cart, currency: Currency) -> RelayResult<GatewayReply> {
        let price = cart.first_price().ok_or_else(|| {
            RelayError::InvalidRequest("cart has no items".to_string())
        })?;

        let payload = OrderPayload {
            intent: "CAPTURE",
            purchase_units: vec![PurchaseUnit {
                amount: Amount {
                    currency_code: currency.code(),
                    value: price,
                },
            }],
        };

        debug!("Creating PayPal order: value={}, currency={}", price, currency);

        let token = self.tokens.access_token().await?;
        let url = format!("{}/v2/checkout/orders", self.config.api_base_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", token.bearer_header())
            .json(&payload)
            .send()
            .await
            .map_err(|e| RelayError::Network(e.to_string()))?;

        let reply = relay_response(response).await?;
        info!("PayPal create order: status={}", reply.status);
        Ok(reply)
    }

    /// Capture a previously approved order. POST with no body.
    #[instrument(skip(self), fields(order_id = %order_id))]
    pub async fn capture_order(&self, order_id: &str) -> RelayResult<GatewayReply> {
        if order_id.is_empty() {
            return Err(RelayError::InvalidRequest("order id is empty".to_string()));
        }

        let token = self.tokens.access_token().await?;
        let url = format!(
            "{}/v2/checkout/orders/{}/capture",
            self.config.api_base_url, order_id
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", token.bearer_header())
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| RelayError::Network(e.to_string()))?;

        let reply = relay_response(response).await?;
        info!("PayPal capture order: status={}", reply.status);
        Ok(reply)
    }

    /// Generate an identity client token for the frontend SDK
    #[instrument(skip(self))]
    pub async fn client_token(&self) -> RelayResult<GatewayReply> {
        let token = self.tokens.access_token().await?;
        let url = format!("{}/v1/identity/generate-token", self.config.api_base_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", token.bearer_header())
            .header("Accept-Language", "en_US")
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| RelayError::Network(e.to_string()))?;

        relay_response(response).await
    }

    /// Forward a Google Pay approval payload to PayPal's GraphQL endpoint.
    ///
    /// The request body arrives opaque from the frontend and is forwarded
    /// unchanged; the response body is parsed and relayed like every other
    /// call.
    #[instrument(skip(self, body))]
    pub async fn confirm_order(&self, body: &serde_json::Value) -> RelayResult<GatewayReply> {
        let token = self.tokens.access_token().await?;
        let url = format!(
            "{}/graphql?ApproveGooglePayPayment",
            self.config.api_base_url
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", token.bearer_header())
            .json(body)
            .send()
            .await
            .map_err(|e| RelayError::Network(e.to_string()))?;

        relay_response(response).await
    }
}

/// Shared response handling: mirror the upstream status and parse the body as
/// JSON. A body that is not JSON is an upstream failure with the raw text
/// captured as the error detail.
async fn relay_response(response: Response) -> RelayResult<GatewayReply> {
    let status = response.status().as_u16();
    let text = response
        .text()
        .await
        .map_err(|e| RelayError::Network(e.to_string()))?;

    match serde_json::from_str(&text) {
        Ok(body) => Ok(GatewayReply::new(body, status)),
        Err(_) => Err(RelayError::upstream(
            "paypal",
            format!("non-JSON response (HTTP {}): {}", status, text),
        )),
    }
}

// =============================================================================
// PayPal API Types
// =============================================================================

#[derive(Debug, Serialize)]
struct OrderPayload<'a> {
    intent: &'a str,
    purchase_units: Vec<PurchaseUnit<'a>>,
}

#[derive(Debug, Serialize)]
struct PurchaseUnit<'a> {
    amount: Amount<'a>,
}

#[derive(Debug, Serialize)]
struct Amount<'a> {
    currency_code: &'a str,
    value: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AccessToken, AccessTokens};
    use async_trait::async_trait;
    use relay_core::CartItem;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    struct FixedTokens;

    #[async_trait]
    impl AccessTokens for FixedTokens {
        async fn access_token(&self) -> RelayResult<AccessToken> {
            Ok(AccessToken::new("test-token"))
        }
    }

    fn gateway_for(server: &MockServer) -> PayPalGateway {
        let config = PayPalConfig::new("client", "secret").with_api_base_url(server.uri());
        PayPalGateway::with_tokens(config, Arc::new(FixedTokens))
    }

    #[tokio::test]
    async fn test_create_order_payload() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/checkout/orders"))
            .and(header("Authorization", "Bearer test-token"))
            .and(body_json(json!({
                "intent": "CAPTURE",
                "purchase_units": [
                    { "amount": { "currency_code": "EUR", "value": "100.00" } }
                ]
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "5O190127TN364715T",
                "status": "CREATED"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let cart = Cart(vec![CartItem::new("100.00")]);
        let reply = gateway_for(&server)
            .create_order(&cart, Currency::EUR)
            .await
            .unwrap();

        assert_eq!(reply.status, 201);
        assert_eq!(reply.body["status"], "CREATED");
    }

    #[tokio::test]
    async fn test_create_order_empty_cart() {
        let server = MockServer::start().await;
        let err = gateway_for(&server)
            .create_order(&Cart::default(), Currency::EUR)
            .await
            .unwrap_err();

        assert!(matches!(err, RelayError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_capture_order_path_and_status_mirroring() {
        let server = MockServer::start().await;

        // Upstream declines with 422; the gateway must mirror it, not mask it.
        Mock::given(method("POST"))
            .and(path("/v2/checkout/orders/ORDER123/capture"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({
                "name": "UNPROCESSABLE_ENTITY",
                "details": [{"issue": "ORDER_NOT_APPROVED"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let reply = gateway_for(&server).capture_order("ORDER123").await.unwrap();

        assert_eq!(reply.status, 422);
        assert_eq!(reply.body["name"], "UNPROCESSABLE_ENTITY");
    }

    #[tokio::test]
    async fn test_non_json_body_is_upstream_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/checkout/orders/ORDER123/capture"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let err = gateway_for(&server).capture_order("ORDER123").await.unwrap_err();

        match err {
            RelayError::Upstream { provider, message } => {
                assert_eq!(provider, "paypal");
                assert!(message.contains("Bad Gateway"));
            }
            other => panic!("expected upstream error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_client_token_relays_identity_response() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/identity/generate-token"))
            .and(header("Accept-Language", "en_US"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "client_token": "eyJicmFpbnRyZWUi",
                "expires_in": 3600
            })))
            .expect(1)
            .mount(&server)
            .await;

        let reply = gateway_for(&server).client_token().await.unwrap();
        assert_eq!(reply.status, 200);
        assert_eq!(reply.body["client_token"], "eyJicmFpbnRyZWUi");
    }

    #[tokio::test]
    async fn test_confirm_order_forwards_body() {
        let server = MockServer::start().await;
        let approval = json!({"paymentMethodData": {"type": "CARD"}});

        Mock::given(method("POST"))
            .and(path("/graphql"))
            .and(body_json(approval.clone()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"approveGooglePayPayment": {"status": "APPROVED"}}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let reply = gateway_for(&server).confirm_order(&approval).await.unwrap();
        assert_eq!(reply.status, 200);
        assert_eq!(
            reply.body["data"]["approveGooglePayPayment"]["status"],
            "APPROVED"
        );
    }
}
