//! crates/core/src/record.rs
//! Structured log records pairing severity, timestamp, and message text.

use std::borrow::Cow;
use std::fmt;

use crate::severity::Severity;
use crate::timestamp::Timestamp;

/// Structured representation of one log line.
///
/// A record pairs a [`Severity`] with the [`Timestamp`] captured at creation
/// and the message text. Records are transient: they are built, rendered, and
/// dropped within a single emission. [`Display`](fmt::Display) produces the
/// uncolored line body `[<timestamp>] <tag> <message>` without a trailing
/// newline; sinks own the newline and any color escapes around the tag.
///
/// # Examples
///
/// ```
/// use linelog_core::{Record, Timestamp};
/// use time::macros::datetime;
///
/// let record = Record::warning("disk nearly full")
///     .with_timestamp(Timestamp::from_datetime(datetime!(2024-03-07 09:05:00)));
///
/// assert_eq!(record.to_string(), "[2024-03-07T09:05:00] [WRN] disk nearly full");
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    severity: Severity,
    timestamp: Timestamp,
    text: Cow<'static, str>,
}

impl Record {
    /// Creates a record with the current wall-clock timestamp.
    #[must_use]
    pub fn new<T: Into<Cow<'static, str>>>(severity: Severity, text: T) -> Self {
        Self {
            severity,
            timestamp: Timestamp::now(),
            text: text.into(),
        }
    }

    /// Creates a debug record.
    #[must_use]
    pub fn debug<T: Into<Cow<'static, str>>>(text: T) -> Self {
        Self::new(Severity::Debug, text)
    }

    /// Creates an informational record.
    #[must_use]
    pub fn info<T: Into<Cow<'static, str>>>(text: T) -> Self {
        Self::new(Severity::Info, text)
    }

    /// Creates a warning record.
    #[must_use]
    pub fn warning<T: Into<Cow<'static, str>>>(text: T) -> Self {
        Self::new(Severity::Warning, text)
    }

    /// Creates an error record.
    #[must_use]
    pub fn error<T: Into<Cow<'static, str>>>(text: T) -> Self {
        Self::new(Severity::Error, text)
    }

    /// Replaces the capture timestamp.
    ///
    /// Useful for replaying stored records and for tests that need
    /// deterministic output.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: Timestamp) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Returns the record severity.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the timestamp captured when the record was created.
    #[must_use]
    pub const fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Returns the message text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {}",
            self.timestamp,
            self.severity.tag(),
            self.text
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn fixed_timestamp() -> Timestamp {
        Timestamp::from_datetime(datetime!(2024-03-07 09:05:00))
    }

    #[test]
    fn renders_timestamp_tag_and_text() {
        let record = Record::info("transfer complete").with_timestamp(fixed_timestamp());
        assert_eq!(
            record.to_string(),
            "[2024-03-07T09:05:00] [INF] transfer complete"
        );
    }

    #[test]
    fn shorthand_constructors_assign_severities() {
        assert_eq!(Record::debug("d").severity(), Severity::Debug);
        assert_eq!(Record::info("i").severity(), Severity::Info);
        assert_eq!(Record::warning("w").severity(), Severity::Warning);
        assert_eq!(Record::error("e").severity(), Severity::Error);
    }

    #[test]
    fn with_timestamp_replaces_the_capture_time() {
        let record = Record::debug("probe").with_timestamp(fixed_timestamp());
        assert_eq!(record.timestamp(), fixed_timestamp());
    }

    #[test]
    fn text_is_preserved_verbatim() {
        let record = Record::warning("  padded text  ");
        assert_eq!(record.text(), "  padded text  ");
    }

    #[test]
    fn accepts_owned_and_borrowed_text() {
        let borrowed = Record::info("static text");
        let owned = Record::info(String::from("owned text"));

        assert_eq!(borrowed.text(), "static text");
        assert_eq!(owned.text(), "owned text");
    }

    #[test]
    fn empty_text_renders_with_trailing_space() {
        let record = Record::error("").with_timestamp(fixed_timestamp());
        assert_eq!(record.to_string(), "[2024-03-07T09:05:00] [ERR] ");
    }
}
