use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::Channel;

/// A single chat message. Append-only per channel; ordering is
/// creation-time ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub text: String,
    pub sender: String,
    pub channel: Channel,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
    pub sender_email: Option<String>,
}

impl ChatMessage {
    pub fn new(
        text: impl Into<String>,
        sender: impl Into<String>,
        channel: Channel,
        sender_email: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            sender: sender.into(),
            channel,
            created_at: chrono::Utc::now().to_rfc3339(),
            sender_email,
        }
    }
}
