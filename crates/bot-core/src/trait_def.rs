//! The Responder trait definition.

use async_trait::async_trait;

use crate::error::ResponderError;
use crate::message::{InboundMessage, OutboundReply};

/// A trait for turning inbound messages into replies.
///
/// Implementations range from simple echo responders (in tests) to the
/// directory-backed region lookup. This trait is object-safe and can be used
/// with `Box<dyn Responder>`.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Produce a reply for an inbound message.
    async fn respond(&self, message: InboundMessage) -> Result<OutboundReply, ResponderError>;

    /// Get a human-readable name for this responder implementation.
    fn name(&self) -> &str;

    /// Check if the responder is ready to process messages.
    ///
    /// Default implementation always returns true.
    async fn is_ready(&self) -> bool {
        true
    }
}
