//! Practicum review API client

use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::{StatusSource, read_json};

/// HTTP client for the homework status endpoint
#[derive(Clone)]
pub struct PracticumClient {
    /// Full URL of the status endpoint
    endpoint: String,
    /// OAuth token sent in the `Authorization` header
    token: String,
    /// HTTP client instance
    client: Client,
}

impl PracticumClient {
    /// Create a new client with a default HTTP client
    ///
    /// # Arguments
    /// * `endpoint` - URL of the homework status endpoint
    /// * `token` - Practicum OAuth token
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(endpoint, token, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client,
        }
    }

    /// Query the status endpoint for changes since `from_date`
    ///
    /// A zero timestamp is replaced with the current time.
    ///
    /// # Errors
    /// * `Transport` - the request did not complete
    /// * `EndpointUnavailable` - the status is not 200 OK
    /// * `MalformedPayload` - the body is not JSON
    pub async fn get_api_answer(&self, from_date: i64) -> Result<Value> {
        let timestamp = if from_date == 0 {
            Utc::now().timestamp()
        } else {
            from_date
        };

        debug!("Requesting homework statuses from_date={}", timestamp);

        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", timestamp)])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ClientError::endpoint_unavailable(status.as_u16(), error_text));
        }

        read_json(response).await
    }
}

#[async_trait]
impl StatusSource for PracticumClient {
    async fn fetch(&self, from_date: i64) -> Result<Value> {
        self.get_api_answer(from_date).await
    }
}

impl std::fmt::Debug for PracticumClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PracticumClient")
            .field("endpoint", &self.endpoint)
            .field("token", &"<redacted>")
            .finish()
    }
}
