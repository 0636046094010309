//! Status poller
//!
//! Polls the review service for homework status changes and forwards each
//! change to the chat. One cycle runs at a time; a failed cycle is logged and
//! retried after the regular interval with the same watermark.

use homework_client::StatusSource;
use homework_core::domain::Watermark;
use homework_core::{PayloadError, check_response, current_date, parse_status};
use std::sync::Arc;
use tokio::time::{self, Duration};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use crate::error::CycleError;
use crate::service::{DeliveryOutcome, Notifier};

/// How a successful cycle ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A status change was found and delivered
    Notified,

    /// The review service reported no changes
    NoChanges,
}

/// Poller that continuously checks for status changes
pub struct StatusPoller {
    source: Arc<dyn StatusSource>,
    notifier: Notifier,
    watermark: Watermark,
    retry_interval: Duration,
}

impl StatusPoller {
    /// Creates a poller whose first request uses `watermark` as `from_date`
    pub fn new(
        watermark: Watermark,
        retry_interval: Duration,
        source: Arc<dyn StatusSource>,
        notifier: Notifier,
    ) -> Self {
        Self {
            source,
            notifier,
            watermark,
            retry_interval,
        }
    }

    pub fn watermark(&self) -> Watermark {
        self.watermark
    }

    /// Runs the polling loop until `shutdown` is cancelled
    ///
    /// Cycle failures never end the loop. The wait between cycles is cut
    /// short by cancellation; a cycle already in flight is allowed to finish.
    pub async fn run(&mut self, shutdown: CancellationToken) {
        info!(
            "Starting status poller (interval: {:?}, from_date: {}, chat: {})",
            self.retry_interval,
            self.watermark,
            self.notifier.chat_id()
        );

        loop {
            debug!("Polling for homework status changes");

            match self.run_cycle().await {
                Ok(CycleOutcome::Notified) => {
                    info!("Status change delivered, watermark now {}", self.watermark);
                }
                Ok(CycleOutcome::NoChanges) => {}
                Err(e) => {
                    error!("Failure in program cycle: {}", e);
                }
            }

            tokio::select! {
                _ = shutdown.cancelled() => {
                    info!("Shutdown requested, stopping status poller");
                    break;
                }
                _ = time::sleep(self.retry_interval) => {}
            }
        }
    }

    /// Performs a single fetch, validate, translate, notify pass
    ///
    /// The watermark advances to the payload's `current_date` only when the
    /// whole pass succeeds, so a change whose notification failed is fetched
    /// again next time. An empty homework list is a successful pass.
    pub async fn run_cycle(&mut self) -> Result<CycleOutcome, CycleError> {
        let payload = self
            .source
            .fetch(self.watermark.timestamp())
            .await
            .map_err(CycleError::Fetch)?;

        let outcome = match check_response(&payload) {
            Ok(record) => {
                let message = parse_status(record)?;
                let DeliveryOutcome::Delivered { chat_id } = self.notifier.notify(&message).await?;
                debug!("Status change for chat {} handed over", chat_id);
                CycleOutcome::Notified
            }
            Err(PayloadError::EmptyResult) => {
                debug!("No homework status changes since {}", self.watermark);
                CycleOutcome::NoChanges
            }
            Err(e) => return Err(e.into()),
        };

        if let Some(date) = current_date(&payload) {
            if self.watermark.advance_to(date) {
                debug!("Watermark advanced to {}", self.watermark);
            }
        }

        Ok(outcome)
    }
}
