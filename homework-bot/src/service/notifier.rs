//! Notification delivery
//!
//! Sends composed status messages to the configured chat. Delivery is
//! attempted once; retrying is left to the next poll cycle.

use homework_client::{ClientError, MessageSink};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Result of a successful delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Delivered { chat_id: String },
}

/// The messaging capability failed to deliver a message
#[derive(Debug, Error)]
#[error("failed to send message to chat {chat_id}: {source}")]
pub struct DeliveryError {
    pub chat_id: String,
    #[source]
    pub source: ClientError,
}

/// Delivers messages to a single chat
pub struct Notifier {
    sink: Arc<dyn MessageSink>,
    chat_id: String,
}

impl Notifier {
    /// Creates a notifier bound to `chat_id`
    pub fn new(sink: Arc<dyn MessageSink>, chat_id: impl Into<String>) -> Self {
        Self {
            sink,
            chat_id: chat_id.into(),
        }
    }

    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }

    /// Sends `message` to the chat
    pub async fn notify(&self, message: &str) -> Result<DeliveryOutcome, DeliveryError> {
        self.sink
            .send_message(&self.chat_id, message)
            .await
            .map_err(|source| DeliveryError {
                chat_id: self.chat_id.clone(),
                source,
            })?;

        info!("Message sent to chat {}: {}", self.chat_id, message);

        Ok(DeliveryOutcome::Delivered {
            chat_id: self.chat_id.clone(),
        })
    }
}
