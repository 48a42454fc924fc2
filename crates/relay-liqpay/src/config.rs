//! # LiqPay Configuration
//!
//! Merchant key pair for LiqPay signing. The env var names (including their
//! misspellings) are kept verbatim from the deployment — they are the
//! interface this service is configured with.

use relay_core::RelayError;
use std::env;

/// LiqPay merchant key pair
#[derive(Debug, Clone)]
pub struct LiqPayConfig {
    /// Merchant public key (embedded in signed payloads)
    pub public_key: String,

    /// Merchant private key (signing secret, never sent)
    pub private_key: String,
}

impl LiqPayConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `LIQPAY_SUNDBOX_PUBLIC_KEY`
    /// - `LIQPAY_SUNDBOX_PRIVET_KEY`
    pub fn from_env() -> Result<Self, RelayError> {
        dotenvy::dotenv().ok();

        let public_key = env::var("LIQPAY_SUNDBOX_PUBLIC_KEY").map_err(|_| {
            RelayError::Configuration("LIQPAY_SUNDBOX_PUBLIC_KEY not set".to_string())
        })?;

        let private_key = env::var("LIQPAY_SUNDBOX_PRIVET_KEY").map_err(|_| {
            RelayError::Configuration("LIQPAY_SUNDBOX_PRIVET_KEY not set".to_string())
        })?;

        if public_key.is_empty() || private_key.is_empty() {
            return Err(RelayError::Configuration(
                "LiqPay keys must not be empty".to_string(),
            ));
        }

        Ok(Self {
            public_key,
            private_key,
        })
    }

    /// Create config with explicit keys (for testing)
    pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: private_key.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_missing_keys() {
        std::env::remove_var("LIQPAY_SUNDBOX_PUBLIC_KEY");
        std::env::remove_var("LIQPAY_SUNDBOX_PRIVET_KEY");

        let result = LiqPayConfig::from_env();
        assert!(matches!(result, Err(RelayError::Configuration(_))));
    }
}
