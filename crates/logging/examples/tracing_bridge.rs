//! Forwards tracing events into the console logger.
//!
//! Installs the bridge layer with a debug threshold, then emits through the
//! standard tracing macros; each event comes out as a linelog line.
//!
//! Run with: cargo run --example tracing_bridge --features tracing

use linelog::{LoggerConfig, Severity, init_tracing};

fn main() {
    init_tracing(LoggerConfig::with_threshold(Severity::Debug));

    tracing::debug!("resolving targets");
    tracing::info!("transfer started");
    tracing::warn!("bandwidth limited");
    tracing::error!("remote closed the connection");
    tracing::trace!("collapsed onto the debug level");
}
