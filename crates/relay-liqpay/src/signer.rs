//! # LiqPay Signer
//!
//! The cnb (checkout button) signing family. All operations are pure
//! transformations of their input: the signer holds only the immutable
//! merchant key pair and fixed lookup tables.
//!
//! The signature recipe is load-bearing and must not drift:
//! `data = base64(JSON(normalized params))`,
//! `signature = base64(SHA1(private_key + data + private_key))`.

use crate::config::LiqPayConfig;
use crate::params::{self, Params, DEFAULT_LANGUAGE};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use relay_core::{RelayError, RelayResult};
use serde::Serialize;
use serde_json::Value;
use sha1::{Digest, Sha1};

/// Hosted checkout endpoint the signed form posts to
pub const CHECKOUT_URL: &str = "https://www.liqpay.ua/api/3/checkout";

/// Checkout button SDK script embedded in the form snippet
pub const SDK_BUTTON_URL: &str = "https://static.liqpay.ua/libjs/sdk_button.js";

/// Button label translations, keyed by supported language
const BUTTON_LABELS: &[(&str, &str)] = &[("ru", "Оплатить"), ("uk", "Сплатити"), ("en", "Pay")];

/// A deterministic `{data, signature}` pair, immutable once computed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignedPayload {
    /// `base64(JSON(params))`
    pub data: String,
    /// `base64(SHA1(private_key + data + private_key))`
    pub signature: String,
}

/// Stateless signer holding the merchant key pair
#[derive(Debug, Clone)]
pub struct LiqPaySigner {
    config: LiqPayConfig,
}

impl LiqPaySigner {
    pub fn new(config: LiqPayConfig) -> Self {
        Self { config }
    }

    /// Create from environment variables
    pub fn from_env() -> RelayResult<Self> {
        Ok(Self::new(LiqPayConfig::from_env()?))
    }

    /// Merchant public key injected into every signed payload
    pub fn public_key(&self) -> &str {
        &self.config.public_key
    }

    /// `base64(SHA1(private_key + data + private_key))`
    pub fn sign_data(&self, data: &str) -> String {
        let mut hasher = Sha1::new();
        hasher.update(self.config.private_key.as_bytes());
        hasher.update(data.as_bytes());
        hasher.update(self.config.private_key.as_bytes());
        BASE64.encode(hasher.finalize())
    }

    /// Normalize and sign a parameter set
    pub fn sign(&self, params: &Params) -> RelayResult<SignedPayload> {
        let normalized = params::normalize(params, &self.config.public_key)?;
        self.encode(&normalized)
    }

    /// Self-submitting checkout form snippet embedding `data`, `signature`,
    /// the SDK script, and a localized button label.
    ///
    /// The label is looked up from the raw `language` before normalization
    /// (matching the hosted-button behavior); absent or unsupported languages
    /// fall back to the default language's label.
    pub fn checkout_form(&self, params: &Params) -> RelayResult<String> {
        let label = button_label(params.get("language").and_then(Value::as_str));
        let payload = self.sign(params)?;

        Ok(format!(
            "<form method=\"POST\" action=\"{}\" accept-charset=\"utf-8\">\
             <input type=\"hidden\" name=\"data\" value=\"{}\" />\
             <input type=\"hidden\" name=\"signature\" value=\"{}\" />\
             <script type=\"text/javascript\" src=\"{}\"></script>\
             <sdk-button label=\"{}\" background=\"#77CC5D\" onClick=\"submit()\"></sdk-button>\
             </form>",
            CHECKOUT_URL, payload.data, payload.signature, SDK_BUTTON_URL, label
        ))
    }

    /// `{data, signature}` pair for client-side SDK integrations.
    /// Defaults `language` before normalization so the payload always carries
    /// one.
    pub fn checkout_object(&self, params: &Params) -> RelayResult<SignedPayload> {
        let mut params = params.clone();
        params
            .entry("language".to_string())
            .or_insert_with(|| Value::String(DEFAULT_LANGUAGE.to_string()));
        self.sign(&params)
    }

    /// Signature string only
    pub fn checkout_signature(&self, params: &Params) -> RelayResult<String> {
        Ok(self.sign(params)?.signature)
    }

    fn encode(&self, normalized: &Params) -> RelayResult<SignedPayload> {
        let json = serde_json::to_string(normalized)
            .map_err(|e| RelayError::Serialization(e.to_string()))?;
        let data = BASE64.encode(json);
        let signature = self.sign_data(&data);
        Ok(SignedPayload { data, signature })
    }
}

/// Localized checkout button label with default-language fallback
fn button_label(language: Option<&str>) -> &'static str {
    let lang = language.unwrap_or(DEFAULT_LANGUAGE);
    BUTTON_LABELS
        .iter()
        .find(|(l, _)| *l == lang)
        .or_else(|| BUTTON_LABELS.iter().find(|(l, _)| *l == DEFAULT_LANGUAGE))
        .map(|(_, label)| *label)
        .unwrap_or("Pay")
}
