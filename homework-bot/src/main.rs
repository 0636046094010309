//! Homework Status Bot
//!
//! A long-running worker that watches a homework submission on the review
//! service and reports every status change to a Telegram chat.
//!
//! Architecture:
//! - Configuration: credentials and timing from environment variables
//! - Telemetry: logs to stdout and to a persistent file
//! - Services: notification delivery to the configured chat
//! - Scheduler: the polling loop and its watermark
//!
//! Missing credentials stop the bot at startup. Everything that goes wrong
//! afterwards is logged and retried on the next poll.

mod config;
mod error;
mod scheduler;
mod service;
mod telemetry;

use anyhow::{Context, Result};
use homework_client::{PracticumClient, TelegramClient};
use homework_core::domain::Watermark;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::scheduler::StatusPoller;
use crate::service::Notifier;

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init(&config::log_file_path());

    info!("Starting homework status bot");

    let (config, start) = match load_config() {
        Ok(loaded) => loaded,
        Err(e) => {
            error!(severity = "critical", "Cannot start without configuration: {:#}", e);
            return Err(e);
        }
    };
    info!(
        "Loaded configuration: endpoint={}, chat_id={}",
        config.endpoint, config.telegram_chat_id
    );

    // One HTTP client shared by both services
    let http = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let source = Arc::new(PracticumClient::with_client(
        config.endpoint.clone(),
        config.practicum_token.clone(),
        http.clone(),
    ));
    let telegram = Arc::new(TelegramClient::with_client(
        config.telegram_api_url.clone(),
        config.telegram_token.clone(),
        http,
    ));
    let notifier = Notifier::new(telegram, config.telegram_chat_id.clone());

    info!("Clients initialized");

    let shutdown = CancellationToken::new();
    spawn_shutdown_listener(shutdown.clone());

    let mut poller = StatusPoller::new(start, config.retry_interval, source, notifier);
    poller.run(shutdown).await;

    info!("Homework status bot stopped");
    Ok(())
}

/// Loads and validates configuration from the environment, along with the
/// watermark of the first poll
fn load_config() -> Result<(Config, Watermark)> {
    let config = Config::from_env()?;
    config.validate()?;
    let start = config.start_watermark()?;
    Ok((config, start))
}

/// Cancels `shutdown` on Ctrl-C or SIGTERM
fn spawn_shutdown_listener(shutdown: CancellationToken) {
    tokio::spawn(async move {
        wait_for_signal().await;
        info!("Shutdown signal received");
        shutdown.cancel();
    });
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{SignalKind, signal};

    let mut terminate = match signal(SignalKind::terminate()) {
        Ok(stream) => stream,
        Err(e) => {
            warn!("Failed to install SIGTERM handler: {}", e);
            let _ = tokio::signal::ctrl_c().await;
            return;
        }
    };

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {}
        _ = terminate.recv() => {}
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
    }
}
