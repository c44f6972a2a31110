//! Webhook route handlers.
//!
//! The POST handler validates the envelope synchronously, enqueues, and
//! acknowledges immediately; it never waits on lookup processing. A full
//! queue drops the incoming update (drop-newest) but still acknowledges, so
//! Telegram's delivery retries cannot amplify load.

use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tokio::sync::mpsc::error::TrySendError;
use tracing::{debug, warn};

use crate::envelope::Update;
use crate::error::WebhookError;
use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/webhook", post(webhook).get(liveness))
}

/// Acknowledgment body for accepted updates.
#[derive(Serialize)]
struct Ack {
    status: &'static str,
}

/// Inbound webhook endpoint.
pub async fn webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Result<Json<Ack>, WebhookError> {
    if !is_json(&headers) {
        return Err(WebhookError::UnsupportedContentType);
    }

    let update: Update = serde_json::from_str(&body)
        .map_err(|e| WebhookError::MalformedEnvelope(e.to_string()))?;

    let update_id = update.update_id;
    let Some(inbound) = update.into_inbound() else {
        debug!(update_id, "Update carries no usable text, skipping");
        return Ok(Json(Ack { status: "ok" }));
    };

    match state.queue.try_send(inbound) {
        Ok(()) => debug!(update_id, "Update enqueued"),
        Err(TrySendError::Full(dropped)) => {
            warn!(update_id, chat_id = dropped.chat_id, "Queue full, dropping update");
        }
        Err(TrySendError::Closed(dropped)) => {
            warn!(update_id, chat_id = dropped.chat_id, "Queue closed, dropping update");
        }
    }

    Ok(Json(Ack { status: "ok" }))
}

/// Liveness endpoint.
pub async fn liveness() -> Response {
    "region lookup bot is running".into_response()
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("application/json"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use tokio::sync::mpsc;

    fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, "application/json".parse().unwrap());
        headers
    }

    fn state_with_capacity(capacity: usize) -> (AppState, mpsc::Receiver<bot_core::InboundMessage>) {
        let (tx, rx) = mpsc::channel(capacity);
        (AppState::new(tx), rx)
    }

    #[tokio::test]
    async fn test_valid_update_is_enqueued_and_acknowledged() {
        let (state, mut rx) = state_with_capacity(4);
        let body = r#"{"update_id":1,"message":{"message_id":1,"chat":{"id":42},"text":"77"}}"#;

        let result = webhook(State(state), json_headers(), body.to_string()).await;
        assert!(result.is_ok());

        let queued = rx.try_recv().unwrap();
        assert_eq!(queued.chat_id, 42);
        assert_eq!(queued.text, "77");
    }

    #[tokio::test]
    async fn test_wrong_content_type_rejected_without_enqueue() {
        let (state, mut rx) = state_with_capacity(4);
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, "text/plain".parse().unwrap());

        let response = webhook(State(state), headers, "{}".to_string())
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_missing_content_type_rejected() {
        let (state, _rx) = state_with_capacity(4);

        let response = webhook(State(state), HeaderMap::new(), "{}".to_string())
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_malformed_json_rejected_without_enqueue() {
        let (state, mut rx) = state_with_capacity(4);

        let response = webhook(State(state), json_headers(), "not json".to_string())
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_textless_update_acknowledged_but_skipped() {
        let (state, mut rx) = state_with_capacity(4);
        let body = r#"{"update_id":5,"message":{"message_id":2,"chat":{"id":42}}}"#;

        let result = webhook(State(state), json_headers(), body.to_string()).await;
        assert!(result.is_ok());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_full_queue_drops_newest_but_acknowledges() {
        let (state, mut rx) = state_with_capacity(1);
        let body = |id: i64| {
            format!(
                r#"{{"update_id":{},"message":{{"message_id":{},"chat":{{"id":42}},"text":"мос"}}}}"#,
                id, id
            )
        };

        let first = webhook(State(state.clone()), json_headers(), body(1)).await;
        assert!(first.is_ok());

        // Queue capacity is 1; the second update is dropped but still acked.
        let second = webhook(State(state), json_headers(), body(2)).await;
        assert!(second.is_ok());

        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_liveness_responds_ok() {
        let response = liveness().await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
