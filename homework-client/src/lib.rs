//! Homework HTTP Clients
//!
//! Thin, typed clients for the two remote services the watcher talks to:
//! - The Practicum review API, queried for homework status changes
//! - The Telegram Bot API, used to deliver notifications
//!
//! Both are exposed behind traits ([`StatusSource`], [`MessageSink`]) so the
//! poller can be driven by in-memory fakes in tests.
//!
//! # Example
//!
//! ```no_run
//! use homework_client::{PracticumClient, StatusSource};
//!
//! #[tokio::main]
//! async fn main() -> homework_client::Result<()> {
//!     let client = PracticumClient::new(
//!         "https://practicum.yandex.ru/api/user_api/homework_statuses/",
//!         "my-oauth-token",
//!     );
//!
//!     let payload = client.fetch(0).await?;
//!     println!("{}", payload);
//!     Ok(())
//! }
//! ```

pub mod error;
mod practicum;
mod telegram;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use practicum::PracticumClient;
pub use telegram::TelegramClient;

use async_trait::async_trait;
use serde_json::Value;

/// Source of homework status payloads
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetches every homework whose status changed after `from_date`
    ///
    /// # Arguments
    /// * `from_date` - Unix timestamp; 0 means "now"
    ///
    /// # Returns
    /// The decoded JSON payload, not yet validated
    async fn fetch(&self, from_date: i64) -> Result<Value>;
}

/// Capability to send a plain-text message to a chat
#[async_trait]
pub trait MessageSink: Send + Sync {
    /// Sends `text` to `chat_id`
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<()>;
}

/// Reads a response body and decodes it as JSON
async fn read_json(response: reqwest::Response) -> Result<Value> {
    let body = response.text().await.map_err(reqwest::Error::without_url)?;

    serde_json::from_str(&body)
        .map_err(|e| ClientError::MalformedPayload(format!("Response is not valid JSON: {}", e)))
}
