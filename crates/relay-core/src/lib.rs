//! # relay-core
//!
//! Core types for the checkout-relay gateway bridge.
//!
//! This crate provides:
//! - `RelayError` for typed error handling across all gateway calls
//! - `GatewayReply` for relaying upstream `(body, status)` pairs verbatim
//! - `Cart` and `CartItem` for the transient storefront cart shape
//! - `Currency` for the fixed per-deployment currency code
//!
//! ## Example
//!
//! ```rust
//! use relay_core::{Cart, CartItem, Currency, GatewayReply};
//!
//! let cart = Cart(vec![CartItem::new("100.00")]);
//! assert_eq!(cart.first_price(), Some("100.00"));
//!
//! let reply = GatewayReply::new(serde_json::json!({"status": "COMPLETED"}), 201);
//! assert!(reply.is_success());
//! assert_eq!(Currency::default().code(), "EUR");
//! ```

pub mod cart;
pub mod currency;
pub mod error;
pub mod reply;

// Re-exports for convenience
pub use cart::{Cart, CartItem};
pub use currency::Currency;
pub use error::{RelayError, RelayResult};
pub use reply::GatewayReply;
