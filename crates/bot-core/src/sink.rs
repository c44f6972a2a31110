//! The outbound delivery trait.

use async_trait::async_trait;

use crate::error::DeliveryError;
use crate::message::OutboundReply;

/// A destination for outbound replies.
///
/// The production implementation talks to the Telegram Bot API; tests use
/// in-memory sinks to observe what the worker would have sent.
#[async_trait]
pub trait ReplySink: Send + Sync {
    /// Deliver a reply to its chat.
    async fn deliver(&self, reply: &OutboundReply) -> Result<(), DeliveryError>;
}
