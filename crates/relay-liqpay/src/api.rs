//! # LiqPay Server-to-Server API
//!
//! Form-urlencoded POST of a signed `{data, signature}` pair to the LiqPay
//! API host. Unlike the cnb family this path does not normalize parameters;
//! the protocol only requires `version` and the injected public key.

use crate::params::Params;
use crate::signer::LiqPaySigner;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use relay_core::{RelayError, RelayResult};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument};

/// Production API host; the request path selects the operation
pub const API_HOST: &str = "https://www.liqpay.ua/api/";

/// Signed-request client for LiqPay's server-to-server API
#[derive(Clone)]
pub struct LiqPayApi {
    signer: LiqPaySigner,
    client: Client,
    host: String,
}

impl LiqPayApi {
    pub fn new(signer: LiqPaySigner) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            signer,
            client,
            host: API_HOST.to_string(),
        }
    }

    /// Builder: set custom API host (for testing)
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// POST signed params to `{host}{path}` and return the response JSON.
    #[instrument(skip(self, params))]
    pub async fn request(&self, path: &str, params: &Params) -> RelayResult<Value> {
        if !params.contains_key("version") {
            return Err(RelayError::validation("version", "version is null"));
        }

        let mut params = params.clone();
        params.insert(
            "public_key".to_string(),
            Value::String(self.signer.public_key().to_string()),
        );

        let json = serde_json::to_string(&params)
            .map_err(|e| RelayError::Serialization(e.to_string()))?;
        let data = BASE64.encode(json);
        let signature = self.signer.sign_data(&data);

        debug!("LiqPay API request: path={}", path);

        let response = self
            .client
            .post(format!("{}{}", self.host, path))
            .form(&[("data", data), ("signature", signature)])
            .send()
            .await
            .map_err(|e| RelayError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::upstream(
                "liqpay",
                format!("HTTP {}: {}", status, body),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| RelayError::upstream("liqpay", format!("non-JSON response: {}", e)))
    }
}
