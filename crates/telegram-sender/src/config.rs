//! Configuration for the Telegram client.

use std::env;

use crate::error::SenderError;

/// Default Telegram Bot API base URL.
pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

/// Configuration for [`crate::TelegramClient`].
#[derive(Debug, Clone)]
pub struct SenderConfig {
    /// Bot API base URL.
    pub api_url: String,

    /// Bot token issued by BotFather.
    pub token: String,
}

impl SenderConfig {
    /// Create a config with the default API URL.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: token.into(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `TELEGRAM_BOT_TOKEN` | Bot token | (required) |
    /// | `TELEGRAM_API_URL` | Bot API base URL | `https://api.telegram.org` |
    pub fn from_env() -> Result<Self, SenderError> {
        let token = env::var("TELEGRAM_BOT_TOKEN").map_err(|_| {
            SenderError::Configuration("TELEGRAM_BOT_TOKEN environment variable is required".into())
        })?;
        if token.trim().is_empty() {
            return Err(SenderError::Configuration(
                "TELEGRAM_BOT_TOKEN must not be empty".into(),
            ));
        }

        let api_url =
            env::var("TELEGRAM_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Ok(Self { api_url, token })
    }

    /// Build the URL for a Bot API method.
    pub(crate) fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_url.trim_end_matches('/'), self.token, method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_url() {
        let config = SenderConfig::new("123:abc");
        assert_eq!(
            config.method_url("sendMessage"),
            "https://api.telegram.org/bot123:abc/sendMessage"
        );
    }

    #[test]
    fn test_method_url_trims_trailing_slash() {
        let mut config = SenderConfig::new("123:abc");
        config.api_url = "http://localhost:8081/".to_string();
        assert_eq!(config.method_url("getMe"), "http://localhost:8081/bot123:abc/getMe");
    }
}
