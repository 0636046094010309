//! Bot configuration
//!
//! Credentials, endpoints and timing for the status watcher, read from
//! environment variables.

use homework_core::domain::Watermark;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_LOG_FILE: &str = "homework-bot.log";

/// Credentials that must be present before the bot starts polling
pub const REQUIRED_VARS: [&str; 3] = ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"];

/// Bot configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// OAuth token for the review service
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Chat that receives status notifications
    pub telegram_chat_id: String,

    /// Homework status endpoint
    pub endpoint: String,

    /// Telegram Bot API base URL
    pub telegram_api_url: String,

    /// Pause between two poll cycles
    pub retry_interval: Duration,

    /// How far back the first poll looks for changes
    pub lookback: Duration,

    /// Upper bound for a single HTTP request
    pub request_timeout: Duration,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new(practicum_token: String, telegram_token: String, telegram_chat_id: String) -> Self {
        Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            telegram_api_url: DEFAULT_TELEGRAM_API_URL.to_string(),
            retry_interval: Duration::from_secs(600),
            lookback: Duration::from_secs(30 * 24 * 60 * 60), // 30 days
            request_timeout: Duration::from_secs(30),
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - PRACTICUM_TOKEN (required)
    /// - TELEGRAM_TOKEN (required)
    /// - TELEGRAM_CHAT_ID (required)
    /// - PRACTICUM_ENDPOINT (optional, default: Practicum homework statuses URL)
    /// - TELEGRAM_API_URL (optional, default: https://api.telegram.org)
    /// - RETRY_TIME (optional, seconds, default: 600)
    /// - LOOKBACK_DAYS (optional, default: 30)
    /// - REQUEST_TIMEOUT (optional, seconds, default: 30)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates configuration from an arbitrary variable lookup
    ///
    /// Blank values of required variables count as missing.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let missing: Vec<&str> = REQUIRED_VARS
            .iter()
            .copied()
            .filter(|key| lookup(*key).is_none_or(|value| value.trim().is_empty()))
            .collect();

        if !missing.is_empty() {
            anyhow::bail!(
                "Missing required environment variable(s): {}",
                missing.join(", ")
            );
        }

        let required = |key: &str| lookup(key).unwrap_or_default();
        let mut config = Self::new(
            required("PRACTICUM_TOKEN"),
            required("TELEGRAM_TOKEN"),
            required("TELEGRAM_CHAT_ID"),
        );

        if let Some(endpoint) = lookup("PRACTICUM_ENDPOINT") {
            config.endpoint = endpoint;
        }

        if let Some(api_url) = lookup("TELEGRAM_API_URL") {
            config.telegram_api_url = api_url;
        }

        if let Some(secs) = lookup("RETRY_TIME").and_then(|s| s.parse::<u64>().ok()) {
            config.retry_interval = Duration::from_secs(secs);
        }

        if let Some(days) = lookup("LOOKBACK_DAYS").and_then(|s| s.parse::<u64>().ok()) {
            let secs = days
                .checked_mul(24 * 60 * 60)
                .ok_or_else(|| anyhow::anyhow!("LOOKBACK_DAYS is out of range: {}", days))?;
            config.lookback = Duration::from_secs(secs);
        }

        if let Some(secs) = lookup("REQUEST_TIMEOUT").and_then(|s| s.parse::<u64>().ok()) {
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.practicum_token.is_empty() {
            anyhow::bail!("practicum_token cannot be empty");
        }

        if self.telegram_token.is_empty() {
            anyhow::bail!("telegram_token cannot be empty");
        }

        if self.telegram_chat_id.is_empty() {
            anyhow::bail!("telegram_chat_id cannot be empty");
        }

        for (name, url) in [
            ("endpoint", &self.endpoint),
            ("telegram_api_url", &self.telegram_api_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!("{} must start with http:// or https://", name);
            }
        }

        if self.retry_interval.is_zero() {
            anyhow::bail!("retry_interval must be greater than 0");
        }

        if self.request_timeout.is_zero() {
            anyhow::bail!("request_timeout must be greater than 0");
        }

        self.start_watermark()?;

        Ok(())
    }

    /// Lookback as a calendar duration
    pub fn lookback_window(&self) -> anyhow::Result<chrono::Duration> {
        chrono::Duration::from_std(self.lookback)
            .map_err(|_| anyhow::anyhow!("lookback of {:?} is out of range", self.lookback))
    }

    /// Watermark for the first poll: the lookback window before now
    pub fn start_watermark(&self) -> anyhow::Result<Watermark> {
        Watermark::lookback_from_now(self.lookback_window()?).ok_or_else(|| {
            anyhow::anyhow!(
                "lookback of {:?} reaches before the earliest supported date",
                self.lookback
            )
        })
    }
}

/// Path of the persistent log file (LOG_FILE, default: homework-bot.log)
///
/// Read separately from [`Config`] so logging is up before credentials are checked.
pub fn log_file_path() -> PathBuf {
    std::env::var("LOG_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOG_FILE))
}
