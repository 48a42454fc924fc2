//! # Relay Error Types
//!
//! Typed error handling for the checkout-relay gateway bridge.
//! All gateway operations return `Result<T, RelayError>`.

use thiserror::Error;

/// Core error type for all relay operations
#[derive(Debug, Error)]
pub enum RelayError {
    /// Configuration errors (missing credentials, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request data (empty cart, missing path params)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A LiqPay checkout parameter failed validation
    #[error("Validation error: {field}: {message}")]
    Validation { field: String, message: String },

    /// Upstream gateway returned an unusable response
    #[error("Upstream error [{provider}]: {message}")]
    Upstream { provider: String, message: String },

    /// Network/HTTP error communicating with a gateway
    #[error("Network error: {0}")]
    Network(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RelayError {
    /// Shorthand for a validation failure naming the offending field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        RelayError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Shorthand for an upstream failure naming the provider
    pub fn upstream(provider: impl Into<String>, message: impl Into<String>) -> Self {
        RelayError::Upstream {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            RelayError::Configuration(_) => 500,
            RelayError::InvalidRequest(_) => 400,
            RelayError::Validation { .. } => 400,
            RelayError::Upstream { .. } => 502,
            RelayError::Network(_) => 503,
            RelayError::Serialization(_) => 500,
        }
    }
}

/// Result type alias for relay operations
pub type RelayResult<T> = Result<T, RelayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(RelayError::Configuration("no key".into()).status_code(), 500);
        assert_eq!(RelayError::validation("amount", "amount is null").status_code(), 400);
        assert_eq!(RelayError::upstream("paypal", "bad body").status_code(), 502);
        assert_eq!(RelayError::Network("timeout".into()).status_code(), 503);
    }

    #[test]
    fn test_validation_names_field() {
        let err = RelayError::validation("version", "version is null");
        assert_eq!(err.to_string(), "Validation error: version: version is null");
    }
}
