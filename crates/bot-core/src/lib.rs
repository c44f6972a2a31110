//! Core traits and types for the region lookup bot.
//!
//! This crate provides the shared interface between the webhook gateway and
//! the lookup logic. It defines:
//!
//! - [`Responder`] - The trait a message-handling implementation must provide
//! - [`InboundMessage`] / [`OutboundReply`] - Message types for input/output
//! - [`ReplySink`] - Trait for the outbound delivery channel
//! - [`ResponderError`] / [`DeliveryError`] - Error types
//!
//! # Example
//!
//! ```rust
//! use bot_core::{Responder, ResponderError, InboundMessage, OutboundReply};
//! use async_trait::async_trait;
//!
//! struct MyResponder;
//!
//! #[async_trait]
//! impl Responder for MyResponder {
//!     async fn respond(&self, message: InboundMessage) -> Result<OutboundReply, ResponderError> {
//!         Ok(OutboundReply::reply_to(&message, "Hello!"))
//!     }
//!
//!     fn name(&self) -> &str {
//!         "MyResponder"
//!     }
//! }
//! ```

mod error;
mod message;
mod sink;
mod trait_def;

pub use error::{DeliveryError, ResponderError};
pub use message::{InboundMessage, OutboundReply};
pub use sink::ReplySink;
pub use trait_def::Responder;

// Re-export async_trait for convenience
pub use async_trait::async_trait;

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
