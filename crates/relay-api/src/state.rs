//! # Application State
//!
//! Shared state for the Axum application: the PayPal gateway, the LiqPay
//! signer, and server configuration. Everything is constructed once at
//! startup and read-only afterwards; handlers clone cheap handles.

use relay_core::Currency;
use relay_liqpay::LiqPaySigner;
use relay_paypal::PayPalGateway;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Fixed currency for PayPal order creation
    pub currency: Currency,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8888),
            currency: std::env::var("CURRENCY")
                .ok()
                .and_then(|c| c.parse().ok())
                .unwrap_or_default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// PayPal order gateway
    pub paypal: PayPalGateway,
    /// LiqPay request signer
    pub liqpay: LiqPaySigner,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create state from environment configuration
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();

        let paypal = PayPalGateway::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize PayPal: {}", e))?;

        let liqpay = LiqPaySigner::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize LiqPay: {}", e))?;

        Ok(Self {
            paypal,
            liqpay,
            config,
        })
    }

    /// Create state with explicit parts (for testing)
    pub fn with_parts(paypal: PayPalGateway, liqpay: LiqPaySigner, config: AppConfig) -> Self {
        Self {
            paypal,
            liqpay,
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_defaults() {
        std::env::remove_var("HOST");
        std::env::remove_var("PORT");
        std::env::remove_var("CURRENCY");

        let config = AppConfig::from_env();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8888);
        assert_eq!(config.currency, Currency::EUR);
        assert!(!config.is_production());
    }

    #[test]
    fn test_socket_addr() {
        let config = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 8888,
            currency: Currency::EUR,
            environment: "test".to_string(),
        };

        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8888");
    }
}
