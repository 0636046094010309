//! Telegram Bot API DTOs

use serde::{Deserialize, Serialize};

/// Body of a `sendMessage` call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessage {
    /// Target chat: numeric id or `@channelusername`
    pub chat_id: String,

    /// Plain message text
    pub text: String,
}

/// Envelope every Bot API method responds with
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub ok: bool,

    /// Reason for failure when `ok` is false
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub error_code: Option<i64>,
}
