//! # PayPal Configuration
//!
//! Configuration for the PayPal REST integration.
//! All secrets are loaded from environment variables once at startup.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use relay_core::RelayError;
use std::env;

/// Default REST host. Overridable via `PAYPAL_API_BASE` so a deployment can
/// point at the live host without a code change.
pub const SANDBOX_API_BASE: &str = "https://api-m.sandbox.paypal.com";

/// PayPal REST API configuration
#[derive(Debug, Clone)]
pub struct PayPalConfig {
    /// OAuth client id
    pub client_id: String,

    /// OAuth client secret
    pub client_secret: String,

    /// API base URL (sandbox by default; also settable for test mocking)
    pub api_base_url: String,
}

impl PayPalConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `PAYPAL_CLIENT_ID`
    /// - `PAYPAL_CLIENT_SECRET`
    ///
    /// Optional:
    /// - `PAYPAL_API_BASE` (defaults to the sandbox host)
    pub fn from_env() -> Result<Self, RelayError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let client_id = env::var("PAYPAL_CLIENT_ID")
            .map_err(|_| RelayError::Configuration("PAYPAL_CLIENT_ID not set".to_string()))?;

        let client_secret = env::var("PAYPAL_CLIENT_SECRET")
            .map_err(|_| RelayError::Configuration("PAYPAL_CLIENT_SECRET not set".to_string()))?;

        if client_id.is_empty() || client_secret.is_empty() {
            return Err(RelayError::Configuration(
                "PayPal credentials must not be empty".to_string(),
            ));
        }

        let api_base_url =
            env::var("PAYPAL_API_BASE").unwrap_or_else(|_| SANDBOX_API_BASE.to_string());

        Ok(Self {
            client_id,
            client_secret,
            api_base_url,
        })
    }

    /// Create config with explicit values (for testing)
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            api_base_url: SANDBOX_API_BASE.to_string(),
        }
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Check if pointed at the sandbox host
    pub fn is_sandbox(&self) -> bool {
        self.api_base_url == SANDBOX_API_BASE
    }

    /// `Basic` authorization header value: `base64(client_id:client_secret)`
    pub fn basic_auth_header(&self) -> String {
        let pair = format!("{}:{}", self.client_id, self.client_secret);
        format!("Basic {}", BASE64.encode(pair))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_auth_header() {
        let config = PayPalConfig::new("client", "secret");
        // base64("client:secret")
        assert_eq!(config.basic_auth_header(), "Basic Y2xpZW50OnNlY3JldA==");
    }

    #[test]
    fn test_defaults_to_sandbox() {
        let config = PayPalConfig::new("client", "secret");
        assert!(config.is_sandbox());

        let live = config.with_api_base_url("https://api-m.paypal.com");
        assert!(!live.is_sandbox());
    }

    #[test]
    fn test_from_env_missing_credentials() {
        std::env::remove_var("PAYPAL_CLIENT_ID");
        std::env::remove_var("PAYPAL_CLIENT_SECRET");

        let result = PayPalConfig::from_env();
        assert!(matches!(result, Err(RelayError::Configuration(_))));
    }
}
