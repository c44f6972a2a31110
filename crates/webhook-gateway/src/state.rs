//! Application state shared across handlers.

use bot_core::InboundMessage;
use tokio::sync::mpsc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Sending side of the ingestion queue.
    pub queue: mpsc::Sender<InboundMessage>,
}

impl AppState {
    /// Create new application state.
    pub fn new(queue: mpsc::Sender<InboundMessage>) -> Self {
        Self { queue }
    }
}
