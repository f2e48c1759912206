//! crates/logging/src/bridge.rs
//! Bridge between the tracing ecosystem and the process-wide logger.
//!
//! This module provides a tracing-subscriber layer that forwards tracing
//! events into the console logger, so code instrumented with the standard
//! tracing macros (`error!`, `warn!`, `info!`, `debug!`, `trace!`) shares
//! one output format and one severity gate with direct `log_*!` callers.
//!
//! Tracing's five levels collapse onto the four severities: `DEBUG` and
//! `TRACE` both map to [`Severity::Debug`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use linelog::{init_tracing, LoggerConfig, Severity};
//!
//! init_tracing(LoggerConfig::with_threshold(Severity::Debug));
//!
//! tracing::info!("copying file");
//! tracing::debug!("computing delta");
//! ```

use linelog_core::Severity;
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::config::LoggerConfig;
use crate::logger::{global, try_init};

/// A tracing layer that forwards events into the process-wide logger.
///
/// The layer consults the logger's severity gate before visiting event
/// fields, so suppressed events are dropped without rendering. Only the
/// conventional `message` field is forwarded; structured fields are ignored.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(docsrs, doc(cfg(feature = "tracing")))]
pub struct LinelogLayer;

impl LinelogLayer {
    /// Creates a new bridge layer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Maps a tracing level to a severity.
    const fn severity_for(level: &Level) -> Severity {
        match *level {
            Level::ERROR => Severity::Error,
            Level::WARN => Severity::Warning,
            Level::INFO => Severity::Info,
            // DEBUG and TRACE both collapse onto the debug severity.
            _ => Severity::Debug,
        }
    }
}

impl<S> Layer<S> for LinelogLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let severity = Self::severity_for(event.metadata().level());
        let logger = global();
        if !logger.enabled(severity) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        if let Some(message) = visitor.message {
            logger.log(severity, message);
        }
    }
}

/// Visitor that extracts the `message` field from a tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Installs a tracing subscriber that forwards events into the process-wide
/// logger.
///
/// The configuration is applied to the global logger through
/// [`try_init`](crate::try_init); if the logger already exists its running
/// configuration is kept. Panics if a global tracing subscriber is already
/// set, like any `tracing_subscriber` `init`.
///
/// # Example
///
/// ```rust,ignore
/// use linelog::{init_tracing, LoggerConfig, Severity};
///
/// init_tracing(LoggerConfig::with_threshold(Severity::Debug));
/// tracing::warn!("low disk space");
/// ```
#[cfg_attr(docsrs, doc(cfg(feature = "tracing")))]
pub fn init_tracing(config: LoggerConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let _ = try_init(config);

    tracing_subscriber::registry().with(LinelogLayer::new()).init();
}

/// Installs the bridge together with an additional tracing filter layer.
///
/// Lets callers combine the severity gate with standard tracing filters such
/// as `EnvFilter` for per-target control.
///
/// # Example
///
/// ```rust,ignore
/// use linelog::{init_tracing_with_filter, LoggerConfig};
/// use tracing_subscriber::EnvFilter;
///
/// init_tracing_with_filter(LoggerConfig::default(), EnvFilter::from_default_env());
/// ```
#[cfg_attr(docsrs, doc(cfg(feature = "tracing")))]
pub fn init_tracing_with_filter<F>(config: LoggerConfig, filter: F)
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let _ = try_init(config);

    tracing_subscriber::registry()
        .with(filter)
        .with(LinelogLayer::new())
        .init();
}
