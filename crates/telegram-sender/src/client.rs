//! The Telegram Bot API client.

use async_trait::async_trait;
use bot_core::{DeliveryError, OutboundReply, ReplySink};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use crate::api_types::{ApiResponse, BotIdentity, SendMessageRequest, SetWebhookRequest};
use crate::config::SenderConfig;
use crate::error::SenderError;

/// A client for sending messages through the Telegram Bot API.
#[derive(Clone)]
pub struct TelegramClient {
    http: Client,
    config: SenderConfig,
}

impl TelegramClient {
    /// Create a client with the given configuration.
    pub fn new(config: SenderConfig) -> Result<Self, SenderError> {
        let http = Client::builder().build().map_err(|e| {
            SenderError::Configuration(format!("failed to create HTTP client: {}", e))
        })?;
        Ok(Self { http, config })
    }

    /// Create a client from environment variables and verify the token
    /// against `getMe`.
    pub async fn connect_from_env() -> Result<Self, SenderError> {
        let client = Self::new(SenderConfig::from_env()?)?;
        let identity = client.get_me().await?;
        info!(
            bot_id = identity.id,
            username = identity.username.as_deref().unwrap_or("-"),
            "Telegram client connected"
        );
        Ok(client)
    }

    /// Send a text message to a chat.
    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), SenderError> {
        debug!(chat_id, "Sending message");
        let request = SendMessageRequest { chat_id, text };
        self.call::<_, serde_json::Value>("sendMessage", &request)
            .await?;
        Ok(())
    }

    /// Register the webhook URL with Telegram.
    pub async fn set_webhook(&self, url: &str) -> Result<(), SenderError> {
        info!(url = %url, "Registering webhook");
        let request = SetWebhookRequest { url };
        self.call::<_, serde_json::Value>("setWebhook", &request)
            .await?;
        Ok(())
    }

    /// Fetch the bot's own identity.
    pub async fn get_me(&self) -> Result<BotIdentity, SenderError> {
        let response = self
            .http
            .get(self.config.method_url("getMe"))
            .send()
            .await?
            .json::<ApiResponse<BotIdentity>>()
            .await?;
        into_result(response)
    }

    async fn call<Req, Res>(&self, method: &str, request: &Req) -> Result<Res, SenderError>
    where
        Req: Serialize + Sync,
        Res: DeserializeOwned,
    {
        let response = self
            .http
            .post(self.config.method_url(method))
            .json(request)
            .send()
            .await?
            .json::<ApiResponse<Res>>()
            .await?;
        into_result(response)
    }
}

fn into_result<T>(response: ApiResponse<T>) -> Result<T, SenderError> {
    if !response.ok {
        let description = response
            .description
            .unwrap_or_else(|| "unknown error".to_string());
        return Err(SenderError::Api(description));
    }
    response
        .result
        .ok_or_else(|| SenderError::Api("missing result field".to_string()))
}

#[async_trait]
impl ReplySink for TelegramClient {
    async fn deliver(&self, reply: &OutboundReply) -> Result<(), DeliveryError> {
        self.send_message(reply.chat_id, &reply.text)
            .await
            .map_err(|e| match e {
                SenderError::Api(description) => DeliveryError::Rejected(description),
                other => DeliveryError::Transport(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_result_ok() {
        let response = ApiResponse {
            ok: true,
            result: Some(5),
            description: None,
        };
        assert_eq!(into_result(response).unwrap(), 5);
    }

    #[test]
    fn test_into_result_api_error() {
        let response: ApiResponse<i32> = ApiResponse {
            ok: false,
            result: None,
            description: Some("Bad Request: chat not found".to_string()),
        };
        match into_result(response) {
            Err(SenderError::Api(description)) => {
                assert!(description.contains("chat not found"))
            }
            other => panic!("unexpected: {:?}", other.err()),
        }
    }
}
