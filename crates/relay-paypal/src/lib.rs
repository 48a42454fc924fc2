//! # relay-paypal
//!
//! PayPal REST gateway for checkout-relay-rs.
//!
//! Two collaborators:
//!
//! 1. **PayPalAuth** — OAuth client-credentials exchange. A fresh bearer
//!    token per outbound call, never cached, never persisted.
//! 2. **PayPalGateway** — Checkout Orders v2 create/capture, identity
//!    client-token generation, and the Google Pay GraphQL confirmation.
//!    Upstream status codes are mirrored verbatim so the route layer can
//!    relay 4xx/5xx to the frontend untouched.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use relay_paypal::PayPalGateway;
//! use relay_core::{Cart, CartItem, Currency};
//!
//! let gateway = PayPalGateway::from_env()?;
//!
//! let cart = Cart(vec![CartItem::new("100.00")]);
//! let reply = gateway.create_order(&cart, Currency::EUR).await?;
//!
//! // reply.status mirrors PayPal's HTTP status; reply.body is PayPal's JSON.
//! ```

pub mod auth;
pub mod config;
pub mod orders;

// Re-exports
pub use auth::{AccessToken, AccessTokens, PayPalAuth, SharedAccessTokens};
pub use config::{PayPalConfig, SANDBOX_API_BASE};
pub use orders::PayPalGateway;
