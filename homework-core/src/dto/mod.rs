//! Data Transfer Objects for the messaging API
//!
//! Request and response bodies of the Telegram Bot API `sendMessage` method.

pub mod telegram;
