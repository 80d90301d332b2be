use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failures at the gateway boundary.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Bad caller input; rejected locally before any network round trip.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// The upstream node could not be reached (connect, DNS, timeout).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The node answered with a JSON-RPC error envelope.
    #[error("Upstream RPC error: {0}")]
    UpstreamRpc(String),
}

/// Failures inside the ledger pipeline. These never cross the HTTP boundary;
/// the refresh layer degrades them to renderable fallback rows.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// The wallet capability was unavailable or the user rejected the
    /// connection.
    #[error("Wallet connection failed: {0}")]
    Connection(String),

    /// The owned-objects query (or a per-group fetch) failed.
    #[error("Discovery failed: {0}")]
    Discovery(String),
}

impl From<GatewayError> for LedgerError {
    fn from(err: GatewayError) -> Self {
        LedgerError::Discovery(err.to_string())
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        // Every gateway failure shares the 500 { error } shape; the dashboard
        // renders the message inline next to the affected widget.
        let body = Json(json!({
            "error": self.to_string(),
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
