//! crates/logging/src/style.rs
//! Severity tag rendering and the ANSI colorization policy.

use linelog_core::Severity;

/// Tag rendered for numeric ranks outside the known severity range.
pub const UNKNOWN_TAG: &str = "[UKN]";

/// Colorization policy for severity tags.
///
/// Colors wrap the tag text only; timestamps and message text are never
/// colored. [`Auto`](Self::Auto) enables color exactly when the destination
/// stream is a terminal, so piped or captured output stays byte-plain.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorMode {
    /// Color when the destination stream is a terminal.
    #[default]
    Auto,
    /// Always color, regardless of the destination.
    Always,
    /// Never color.
    Never,
}

impl ColorMode {
    /// Resolves the policy for one destination stream.
    #[must_use]
    pub const fn enabled_for(self, destination_is_terminal: bool) -> bool {
        match self {
            Self::Auto => destination_is_terminal,
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// Returns the tag for `severity`, wrapped in its ANSI color when `colored`
/// is set.
///
/// Informational tags carry no color in either mode.
#[must_use]
pub const fn severity_tag(severity: Severity, colored: bool) -> &'static str {
    if colored {
        match severity {
            Severity::Debug => "\x1b[34m[DBG]\x1b[0m",
            Severity::Info => "[INF]",
            Severity::Warning => "\x1b[33m[WRN]\x1b[0m",
            Severity::Error => "\x1b[31m[ERR]\x1b[0m",
        }
    } else {
        severity.tag()
    }
}

/// Returns the tag for a raw numeric rank.
///
/// Ranks outside `0..=3` render [`UNKNOWN_TAG`], uncolored in every mode.
#[must_use]
pub const fn rank_tag(rank: u8, colored: bool) -> &'static str {
    match Severity::from_rank(rank) {
        Some(severity) => severity_tag(severity, colored),
        None => UNKNOWN_TAG,
    }
}
