//! Scheduler layer for the bot
//!
//! This layer owns the polling loop: it asks the review service for status
//! changes on a fixed interval and turns each change into a notification.

pub mod poller;

pub use poller::{CycleOutcome, StatusPoller};
