//! crates/core/src/severity.rs
//! Ordered severity levels, their tags, and name parsing.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Severity of a log record.
///
/// The four levels form a total order by rank, from [`Debug`](Self::Debug)
/// (most verbose) up to [`Error`](Self::Error) (most severe). Threshold
/// filtering compares severities directly, so `Severity` derives [`Ord`] and
/// the discriminants double as the numeric ranks.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    /// Diagnostic detail intended for developers.
    Debug = 0,
    /// Routine operational messages.
    Info = 1,
    /// Unexpected conditions the program recovered from.
    Warning = 2,
    /// Failures surfaced to the user.
    Error = 3,
}

/// Error returned when parsing a severity from an unrecognised name.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unrecognised severity name: \"{invalid_name}\"")]
pub struct ParseSeverityError {
    invalid_name: String,
}

impl ParseSeverityError {
    /// Creates a parse error that records the invalid severity name.
    #[must_use]
    pub fn new(invalid_name: &str) -> Self {
        Self {
            invalid_name: invalid_name.to_owned(),
        }
    }

    /// Returns the name that failed to parse.
    #[must_use]
    pub fn invalid_name(&self) -> &str {
        &self.invalid_name
    }
}

impl Severity {
    /// Every severity in ascending rank order.
    pub const ALL: [Severity; 4] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
    ];

    /// Returns the numeric rank used for threshold comparisons.
    #[must_use]
    #[inline]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Attempts to construct a [`Severity`] from its numeric rank.
    ///
    /// Returns `None` for ranks outside `0..=3`.
    #[must_use]
    pub const fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            0 => Some(Self::Debug),
            1 => Some(Self::Info),
            2 => Some(Self::Warning),
            3 => Some(Self::Error),
            _ => None,
        }
    }

    /// Returns the bracketed tag rendered ahead of the message text.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Debug => "[DBG]",
            Self::Info => "[INF]",
            Self::Warning => "[WRN]",
            Self::Error => "[ERR]",
        }
    }

    /// Returns the lowercase name used by [`Display`](fmt::Display) and
    /// [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    /// Parses a severity from its lowercase name, ignoring ASCII case and
    /// surrounding whitespace.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let token = name.trim();
        for severity in Self::ALL {
            if token.eq_ignore_ascii_case(severity.name()) {
                return Ok(severity);
            }
        }
        Err(ParseSeverityError::new(token))
    }
}

impl From<Severity> for u8 {
    fn from(value: Severity) -> Self {
        value.rank()
    }
}
