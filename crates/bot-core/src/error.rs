//! Error types for responder and delivery operations.

use thiserror::Error;

/// Errors that can occur while producing a reply.
#[derive(Debug, Error)]
pub enum ResponderError {
    /// The responder is misconfigured.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The message could not be processed.
    #[error("processing failed: {0}")]
    ProcessingFailed(String),
}

/// Errors that can occur while delivering a reply to the chat platform.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The transport to the chat platform failed.
    #[error("transport error: {0}")]
    Transport(String),

    /// The chat platform rejected the reply.
    #[error("delivery rejected: {0}")]
    Rejected(String),
}
