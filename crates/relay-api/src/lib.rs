//! # relay-api
//!
//! HTTP API layer for checkout-relay-rs.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/api/token` | PayPal identity client token |
//! | POST | `/api/orders` | Create PayPal order from a cart |
//! | POST | `/api/orders/{order_id}/capture` | Capture an approved order |
//! | POST | `/api/confirmOrder` | Forward Google Pay approval to PayPal |
//! | GET | `/liqpay/form` | Signed LiqPay checkout form |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
