//! Region lookup responder.
//!
//! Wraps the pure [`region_lookup`] engine behind the [`bot_core::Responder`]
//! trait and renders the Russian reply strings the bot sends back.
//!
//! # Example
//!
//! ```rust
//! use bot_core::{InboundMessage, Responder};
//! use lookup_brain::RegionResponder;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), bot_core::ResponderError> {
//! let responder = RegionResponder::builtin();
//!
//! let reply = responder.respond(InboundMessage::new(1, "77")).await?;
//! assert_eq!(reply.text, "Код 77 — это Москва");
//! # Ok(())
//! # }
//! ```

mod responder;

pub use responder::RegionResponder;
