//! # Currency Codes
//!
//! The relay does no multi-currency arithmetic; a deployment is pinned to one
//! PayPal currency and passes LiqPay currencies through as-is. This enum only
//! exists so the pinned code is typed configuration, not a loose string.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Supported currencies (ISO 4217)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    EUR,
    USD,
    GBP,
    UAH,
}

impl Currency {
    /// Returns the uppercase ISO 4217 code, as PayPal's `currency_code` expects
    pub fn code(&self) -> &'static str {
        match self {
            Currency::EUR => "EUR",
            Currency::USD => "USD",
            Currency::GBP => "GBP",
            Currency::UAH => "UAH",
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::EUR
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = crate::RelayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "EUR" => Ok(Currency::EUR),
            "USD" => Ok(Currency::USD),
            "GBP" => Ok(Currency::GBP),
            "UAH" => Ok(Currency::UAH),
            other => Err(crate::RelayError::Configuration(format!(
                "Unsupported currency: {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_is_uppercase() {
        assert_eq!(Currency::EUR.code(), "EUR");
        assert_eq!(Currency::UAH.to_string(), "UAH");
    }

    #[test]
    fn test_parse() {
        assert_eq!("eur".parse::<Currency>().unwrap(), Currency::EUR);
        assert!("XTS".parse::<Currency>().is_err());
    }
}
