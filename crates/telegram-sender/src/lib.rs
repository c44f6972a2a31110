//! Telegram Bot API client for outbound replies.
//!
//! This crate is the outbound collaborator of the webhook gateway: it sends
//! reply texts to chats via `sendMessage` and registers the webhook URL with
//! Telegram at startup.
//!
//! # Example
//!
//! ```no_run
//! use telegram_sender::{SenderConfig, TelegramClient};
//!
//! # async fn example() -> Result<(), telegram_sender::SenderError> {
//! let config = SenderConfig::from_env()?;
//! let client = TelegramClient::new(config)?;
//!
//! client.send_message(123456789, "Москва (77)").await?;
//! # Ok(())
//! # }
//! ```

mod api_types;
mod client;
mod config;
mod error;

pub use api_types::BotIdentity;
pub use client::TelegramClient;
pub use config::SenderConfig;
pub use error::SenderError;

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
