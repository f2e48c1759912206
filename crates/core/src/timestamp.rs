//! crates/core/src/timestamp.rs
//! Wall-clock timestamp capture and fixed-width rendering.

use std::fmt;

use time::{
    OffsetDateTime, PrimitiveDateTime, format_description::FormatItem, macros::format_description,
};

/// Number of characters in a rendered timestamp.
pub const RENDERED_LEN: usize = 19;

/// Format shared by every emitted log line: `YYYY-MM-DDTHH:MM:SS`.
const RENDER_FORMAT: &[FormatItem<'static>] = format_description!(
    "[year]-[month padding:zero]-[day padding:zero]T[hour padding:zero]:[minute padding:zero]:[second padding:zero]"
);

/// Rendering used if formatting ever fails for a stored value.
const FALLBACK_RENDERING: &str = "1970-01-01T00:00:00";

/// Wall-clock capture with second resolution.
///
/// A timestamp records the local date and time at the moment a log record is
/// created and renders as `YYYY-MM-DDTHH:MM:SS`: exactly [`RENDERED_LEN`]
/// characters, zero padded, without offset or fractional seconds. When the
/// platform cannot determine the local UTC offset (the `time` crate refuses
/// the lookup in some multi-threaded environments) capture falls back to UTC.
///
/// # Examples
///
/// ```
/// use linelog_core::timestamp::{RENDERED_LEN, Timestamp};
/// use time::macros::datetime;
///
/// let fixed = Timestamp::from_datetime(datetime!(2024-03-07 09:05:00));
/// assert_eq!(fixed.to_string(), "2024-03-07T09:05:00");
/// assert_eq!(Timestamp::now().to_string().len(), RENDERED_LEN);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Timestamp(PrimitiveDateTime);

impl Timestamp {
    /// Captures the current wall-clock time.
    #[must_use]
    pub fn now() -> Self {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        Self(PrimitiveDateTime::new(now.date(), now.time()))
    }

    /// Wraps an explicit date and time, for replay and for tests that need
    /// deterministic rendering.
    #[must_use]
    pub const fn from_datetime(datetime: PrimitiveDateTime) -> Self {
        Self(datetime)
    }

    /// Returns the wrapped date and time.
    #[must_use]
    pub const fn datetime(self) -> PrimitiveDateTime {
        self.0
    }

    /// Renders the timestamp into its fixed 19-character form.
    #[must_use]
    pub fn render(self) -> String {
        self.0
            .format(RENDER_FORMAT)
            .unwrap_or_else(|_| FALLBACK_RENDERING.to_string())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<PrimitiveDateTime> for Timestamp {
    fn from(datetime: PrimitiveDateTime) -> Self {
        Self::from_datetime(datetime)
    }
}
