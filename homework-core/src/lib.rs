//! Homework Core
//!
//! Core types and pure logic for the homework status watcher.
//!
//! This crate contains:
//! - Domain types: review statuses and the polling watermark
//! - DTOs: wire structures exchanged with the messaging API
//! - Payload handling: validation of status responses and translation
//!   of homework records into notification text
//!
//! Nothing here performs I/O; the client and bot crates own the network.

pub mod domain;
pub mod dto;
pub mod error;
pub mod translate;
pub mod validate;

pub use error::{PayloadError, Result};
pub use translate::parse_status;
pub use validate::{check_response, current_date};
