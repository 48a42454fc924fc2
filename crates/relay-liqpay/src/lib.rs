//! # relay-liqpay
//!
//! LiqPay checkout signing for checkout-relay-rs.
//!
//! The cnb ("checkout button") family shares one parameter-normalization
//! routine and one signature recipe:
//!
//! - **LiqPaySigner::checkout_form** — signed, self-submitting HTML form
//! - **LiqPaySigner::checkout_object** — `{data, signature}` pair
//! - **LiqPaySigner::checkout_signature** — raw signature string
//! - **LiqPayApi::request** — signed server-to-server POST
//!
//! Signing is local; no network call happens until the browser (or
//! `LiqPayApi`) submits the signed payload.
//!
//! ## Quick Start
//!
//! ```rust
//! use relay_liqpay::{LiqPayConfig, LiqPaySigner};
//!
//! let signer = LiqPaySigner::new(LiqPayConfig::new("pub_key", "priv_key"));
//!
//! let params = serde_json::json!({
//!     "action": "pay",
//!     "amount": "50",
//!     "currency": "UAH",
//!     "description": "description text",
//!     "version": "3"
//! });
//! let html = signer.checkout_form(params.as_object().unwrap()).unwrap();
//! assert!(html.contains("sdk-button"));
//! ```

pub mod api;
pub mod config;
pub mod params;
pub mod signer;

// Re-exports
pub use api::{LiqPayApi, API_HOST};
pub use config::LiqPayConfig;
pub use params::{Params, DEFAULT_LANGUAGE, SUPPORTED_LANGUAGES};
pub use signer::{LiqPaySigner, SignedPayload, CHECKOUT_URL, SDK_BUTTON_URL};
