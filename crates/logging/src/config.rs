//! crates/logging/src/config.rs
//! Startup configuration for a [`Logger`](crate::Logger).

use linelog_core::Severity;

use crate::gate::SeverityGate;
use crate::style::ColorMode;

/// Initial settings applied when a logger is constructed.
///
/// The threshold seeds the logger's severity gate and can be adjusted later
/// through the logger itself; the color mode is fixed for the logger's
/// lifetime.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoggerConfig {
    /// Minimum severity a record needs to be emitted.
    pub threshold: Severity,
    /// How tag colorization is decided for the output destinations.
    pub color: ColorMode,
}

impl LoggerConfig {
    /// Configuration used when none is supplied: an
    /// [`Info`](Severity::Info) threshold with automatic colorization.
    pub const DEFAULT: Self = Self {
        threshold: SeverityGate::DEFAULT_THRESHOLD,
        color: ColorMode::Auto,
    };

    /// Creates a configuration with the given threshold and automatic
    /// colorization.
    #[must_use]
    pub const fn with_threshold(threshold: Severity) -> Self {
        Self {
            threshold,
            color: ColorMode::Auto,
        }
    }

    /// Replaces the color mode.
    #[must_use]
    pub const fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_threshold_is_info_with_auto_color() {
        let config = LoggerConfig::default();
        assert_eq!(config.threshold, Severity::Info);
        assert_eq!(config.color, ColorMode::Auto);
    }

    #[test]
    fn with_threshold_keeps_auto_color() {
        let config = LoggerConfig::with_threshold(Severity::Debug);
        assert_eq!(config.threshold, Severity::Debug);
        assert_eq!(config.color, ColorMode::Auto);
    }

    #[test]
    fn with_color_replaces_only_the_color() {
        let config =
            LoggerConfig::with_threshold(Severity::Error).with_color(ColorMode::Never);
        assert_eq!(config.threshold, Severity::Error);
        assert_eq!(config.color, ColorMode::Never);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip_preserves_fields() {
        let config =
            LoggerConfig::with_threshold(Severity::Warning).with_color(ColorMode::Always);
        let encoded = serde_json::to_string(&config).unwrap();
        assert_eq!(encoded, r#"{"threshold":"warning","color":"always"}"#);
        let decoded: LoggerConfig = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, config);
    }
}
