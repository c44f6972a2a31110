//! Telegram update envelope types.

use bot_core::InboundMessage;
use serde::{Deserialize, Serialize};

/// An update delivered by Telegram to the webhook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Update {
    /// Update sequence number.
    #[serde(default)]
    pub update_id: i64,

    /// The message, when the update carries one. Other update kinds
    /// (edits, callbacks) arrive without it and are skipped.
    #[serde(default)]
    pub message: Option<Message>,
}

/// A chat message inside an update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub message_id: i64,

    /// The chat the message was sent in.
    pub chat: Chat,

    /// Text content; absent for stickers, photos and the like.
    #[serde(default)]
    pub text: Option<String>,

    /// Message date (seconds since epoch).
    #[serde(default)]
    pub date: Option<u64>,
}

/// The chat a message belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
}

impl Update {
    /// Convert the update into an inbound message, if it carries usable text.
    pub fn into_inbound(self) -> Option<InboundMessage> {
        let message = self.message?;
        let text = message.text?;
        if text.trim().is_empty() {
            return None;
        }

        Some(match message.date {
            Some(date) => InboundMessage::with_timestamp(message.chat.id, text, date),
            None => InboundMessage::new(message.chat.id, text),
        })
    }
}
