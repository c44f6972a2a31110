//! Request and response types for the Telegram Bot API.

use serde::{Deserialize, Serialize};

/// Generic Bot API response wrapper.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Body of a `sendMessage` call.
#[derive(Debug, Serialize)]
pub(crate) struct SendMessageRequest<'a> {
    pub chat_id: i64,
    pub text: &'a str,
}

/// Body of a `setWebhook` call.
#[derive(Debug, Serialize)]
pub(crate) struct SetWebhookRequest<'a> {
    pub url: &'a str,
}

/// The bot's own identity, as returned by `getMe`.
#[derive(Debug, Clone, Deserialize)]
pub struct BotIdentity {
    pub id: i64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
}
