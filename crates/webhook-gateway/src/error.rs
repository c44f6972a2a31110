//! Error types for the webhook endpoint.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Rejections produced at the transport boundary. Rejected events never
/// reach the ingestion queue.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The request body was not declared as JSON.
    #[error("unsupported content type")]
    UnsupportedContentType,

    /// The request body could not be parsed as an update envelope.
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        let status = match &self {
            WebhookError::UnsupportedContentType => StatusCode::FORBIDDEN,
            WebhookError::MalformedEnvelope(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::warn!(status = %status, "Rejecting inbound request: {}", self);

        let body = serde_json::json!({
            "status": "error",
            "message": self.to_string(),
        });

        (status, Json(body)).into_response()
    }
}
