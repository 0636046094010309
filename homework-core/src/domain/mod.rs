//! Core domain types
//!
//! Review statuses with their verdicts, and the watermark the poller uses
//! to request only changes it has not seen yet.

pub mod status;
pub mod watermark;

pub use status::HomeworkStatus;
pub use watermark::Watermark;
