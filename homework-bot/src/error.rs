//! Errors that end a poll cycle early

use homework_client::ClientError;
use homework_core::PayloadError;
use thiserror::Error;

use crate::service::DeliveryError;

/// Why a poll cycle did not complete
///
/// None of these stop the bot; the poller logs them and tries again after
/// the regular interval.
#[derive(Debug, Error)]
pub enum CycleError {
    /// The status endpoint could not be queried
    #[error("failed to fetch homework statuses: {0}")]
    Fetch(#[source] ClientError),

    /// The status payload or the homework record is not usable
    #[error("invalid status response: {0}")]
    Payload(#[from] PayloadError),

    /// The notification did not reach the chat
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}
