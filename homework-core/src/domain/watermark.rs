//! Polling watermark
//!
//! The timestamp boundary sent as `from_date`: only homework changed after
//! it is returned by the review service.

use chrono::{Duration, Utc};

/// Unix timestamp (seconds) of the last fully processed poll
///
/// Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Watermark(i64);

impl Watermark {
    pub fn new(timestamp: i64) -> Self {
        Self(timestamp)
    }

    /// Watermark positioned `lookback` before the current wall-clock time
    ///
    /// Returns `None` when that instant is outside the representable range.
    pub fn lookback_from_now(lookback: Duration) -> Option<Self> {
        Utc::now()
            .checked_sub_signed(lookback)
            .map(|start| Self(start.timestamp()))
    }

    pub fn timestamp(&self) -> i64 {
        self.0
    }

    /// Moves the watermark to `timestamp` unless that would rewind it.
    ///
    /// Returns true if the value changed.
    pub fn advance_to(&mut self, timestamp: i64) -> bool {
        if timestamp > self.0 {
            self.0 = timestamp;
            true
        } else {
            false
        }
    }
}

impl std::fmt::Display for Watermark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_moves_forward() {
        let mut watermark = Watermark::new(100);
        assert!(watermark.advance_to(1000));
        assert_eq!(watermark.timestamp(), 1000);
    }

    #[test]
    fn test_advance_never_rewinds() {
        let mut watermark = Watermark::new(1000);
        assert!(!watermark.advance_to(999));
        assert!(!watermark.advance_to(1000));
        assert_eq!(watermark.timestamp(), 1000);
    }

    #[test]
    fn test_lookback_from_now() {
        let now = Utc::now().timestamp();
        let watermark = Watermark::lookback_from_now(Duration::days(30)).unwrap();
        let expected = now - 30 * 24 * 60 * 60;

        // allow for the clock ticking between the two reads
        assert!((watermark.timestamp() - expected).abs() <= 1);
    }

    #[test]
    fn test_lookback_out_of_range() {
        assert_eq!(Watermark::lookback_from_now(Duration::MAX), None);
        assert_eq!(Watermark::lookback_from_now(Duration::days(1_000_000_000)), None);
    }
}
