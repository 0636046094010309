//! Service layer
//!
//! Services wrap the remote clients with the bot's own behaviour. The
//! notifier binds the messaging capability to the configured chat and
//! records every delivery.

mod notifier;

pub use notifier::{DeliveryError, DeliveryOutcome, Notifier};
