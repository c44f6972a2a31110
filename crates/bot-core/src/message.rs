//! Inbound and outbound message types.

use serde::{Deserialize, Serialize};

/// A message received from a chat user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundMessage {
    /// Chat the message arrived from.
    pub chat_id: i64,

    /// The text content of the message.
    pub text: String,

    /// Message timestamp (seconds since epoch), if the platform provided one.
    #[serde(default)]
    pub timestamp: Option<u64>,
}

impl InboundMessage {
    /// Create an inbound message.
    pub fn new(chat_id: i64, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            text: text.into(),
            timestamp: None,
        }
    }

    /// Create an inbound message with a timestamp.
    pub fn with_timestamp(chat_id: i64, text: impl Into<String>, timestamp: u64) -> Self {
        Self {
            chat_id,
            text: text.into(),
            timestamp: Some(timestamp),
        }
    }
}

/// A reply to be delivered back to a chat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutboundReply {
    /// Chat the reply goes to.
    pub chat_id: i64,

    /// The reply text.
    pub text: String,
}

impl OutboundReply {
    /// Create a reply addressed to the sender of an inbound message.
    pub fn reply_to(message: &InboundMessage, text: impl Into<String>) -> Self {
        Self {
            chat_id: message.chat_id,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_to_addresses_sender() {
        let inbound = InboundMessage::new(42, "мос");
        let reply = OutboundReply::reply_to(&inbound, "Москва (77)");

        assert_eq!(reply.chat_id, 42);
        assert_eq!(reply.text, "Москва (77)");
    }

    #[test]
    fn test_timestamp_defaults_to_none() {
        let inbound = InboundMessage::new(1, "77");
        assert!(inbound.timestamp.is_none());

        let stamped = InboundMessage::with_timestamp(1, "77", 1234567890);
        assert_eq!(stamped.timestamp, Some(1234567890));
    }
}
