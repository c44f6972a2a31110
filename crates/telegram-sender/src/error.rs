//! Error types for Telegram delivery.

use thiserror::Error;

/// Errors that can occur while talking to the Telegram Bot API.
#[derive(Debug, Error)]
pub enum SenderError {
    /// Required configuration is missing or invalid. Fatal at startup.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// HTTP transport failure.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with ok=false.
    #[error("telegram api error: {0}")]
    Api(String),
}
