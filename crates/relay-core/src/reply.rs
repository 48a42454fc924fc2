//! # Gateway Reply
//!
//! The `(body, statusCode)` pair every gateway operation resolves to.
//! The body is the upstream JSON untouched; the status mirrors the upstream
//! HTTP status so route handlers can relay 4xx/5xx responses verbatim.

use serde::Serialize;

/// Upstream response relayed to the caller without local mutation
#[derive(Debug, Clone, Serialize)]
pub struct GatewayReply {
    /// Opaque JSON body returned by the gateway
    pub body: serde_json::Value,
    /// Upstream HTTP status, mirrored verbatim
    pub status: u16,
}

impl GatewayReply {
    pub fn new(body: serde_json::Value, status: u16) -> Self {
        Self { body, status }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
