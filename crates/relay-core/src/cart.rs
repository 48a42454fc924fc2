//! # Cart Types
//!
//! Transient cart shapes passed from the storefront frontend. The relay never
//! stores a cart; it reads the first item's price and forwards everything
//! else untouched.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single cart line item from the frontend.
///
/// Only `price` is interpreted; any other fields the frontend sends
/// (sku, title, quantity, ...) ride along in `extra` and are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    /// Price as a decimal string (e.g., "100.00"), forwarded verbatim
    pub price: String,

    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl CartItem {
    pub fn new(price: impl Into<String>) -> Self {
        Self {
            price: price.into(),
            extra: HashMap::new(),
        }
    }
}

/// The cart array posted to `/api/orders`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart(pub Vec<CartItem>);

impl Cart {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The price that becomes the order's purchase-unit amount
    pub fn first_price(&self) -> Option<&str> {
        self.0.first().map(|item| item.price.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_price() {
        let cart = Cart(vec![CartItem::new("100.00"), CartItem::new("5.00")]);
        assert_eq!(cart.first_price(), Some("100.00"));
        assert!(Cart::default().first_price().is_none());
    }

    #[test]
    fn test_extra_fields_ride_along() {
        let item: CartItem =
            serde_json::from_str(r#"{"price":"9.99","sku":"abc","quantity":2}"#).unwrap();
        assert_eq!(item.price, "9.99");
        assert_eq!(item.extra.get("sku").and_then(|v| v.as_str()), Some("abc"));
    }
}
