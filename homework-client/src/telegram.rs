//! Telegram Bot API client

use async_trait::async_trait;
use homework_core::dto::telegram::{ApiResponse, SendMessage};
use reqwest::Client;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::{MessageSink, read_json};

/// Default Bot API base URL
pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

/// HTTP client for the Telegram Bot API
#[derive(Clone)]
pub struct TelegramClient {
    /// Bot API base URL (e.g., "https://api.telegram.org")
    api_url: String,
    /// Bot token; part of every method URL
    token: String,
    /// HTTP client instance
    client: Client,
}

impl TelegramClient {
    /// Create a new bot client against the public Bot API
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_client(DEFAULT_API_URL, token, Client::new())
    }

    /// Create a new bot client with a custom base URL and HTTP client
    pub fn with_client(api_url: impl Into<String>, token: impl Into<String>, client: Client) -> Self {
        let api_url = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.into(),
            client,
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_url, self.token, method)
    }

    /// Send a plain-text message
    ///
    /// # Errors
    /// * `Transport` - the request did not complete
    /// * `EndpointUnavailable` - non-200 answer without a Bot API envelope
    /// * `Rejected` - the Bot API answered `"ok": false`
    pub async fn send_text(&self, chat_id: &str, text: &str) -> Result<()> {
        debug!("Sending message to chat {}", chat_id);

        // The token is part of the URL, so it is stripped from transport errors.
        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .json(&SendMessage {
                chat_id: chat_id.to_string(),
                text: text.to_string(),
            })
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        let body = match read_json(response).await {
            Ok(body) => body,
            Err(ClientError::MalformedPayload(message)) if !status.is_success() => {
                return Err(ClientError::endpoint_unavailable(status.as_u16(), message));
            }
            Err(e) => return Err(e),
        };

        let envelope: ApiResponse = match serde_json::from_value(body) {
            Ok(envelope) => envelope,
            Err(e) if !status.is_success() => {
                return Err(ClientError::endpoint_unavailable(status.as_u16(), e.to_string()));
            }
            Err(e) => {
                return Err(ClientError::MalformedPayload(format!(
                    "Unexpected Bot API response: {}",
                    e
                )));
            }
        };

        if !envelope.ok {
            return Err(ClientError::Rejected(
                envelope
                    .description
                    .unwrap_or_else(|| format!("status {}", status.as_u16())),
            ));
        }

        Ok(())
    }
}

#[async_trait]
impl MessageSink for TelegramClient {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<()> {
        self.send_text(chat_id, text).await
    }
}

impl std::fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramClient")
            .field("api_url", &self.api_url)
            .field("token", &"<redacted>")
            .finish()
    }
}
