#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Overview
//!
//! `linelog` provides leveled, timestamped console logging behind a single
//! process-wide severity threshold. Programs emit human-readable diagnostic
//! lines of the form `[<timestamp>] <tag> <message>`, where the tag names
//! the severity (`[DBG]`, `[INF]`, `[WRN]`, `[ERR]`) and may be wrapped in
//! ANSI colors on terminals. Error lines go to standard error; everything
//! else goes to standard output.
//!
//! # Design
//!
//! The crate exposes [`Logger`], a pair of [`RecordSink`] writers behind a
//! [`SeverityGate`]. The gate is consulted before any timestamp capture or
//! formatting, so a suppressed call costs one atomic load. Three call
//! styles cover the common shapes:
//!
//! - the `log_*!` macros, which target the process-wide [`global`] logger
//!   and evaluate their format arguments lazily;
//! - direct [`Logger::log`] calls and severity shorthands on an owned
//!   logger with injected writers;
//! - [`LogStream`], a scope-flushed accumulator that collects pushed values
//!   and emits them as one record when it is dropped.
//!
//! The record model (severity, timestamp, message text) lives in the
//! `linelog-core` crate and is re-exported here.
//!
//! # Invariants
//!
//! - Severities are totally ordered, `Debug < Info < Warning < Error`; a
//!   record is emitted iff its severity is at or above the threshold at
//!   check time.
//! - Threshold changes take effect immediately and are never retroactive.
//! - Every emitted line ends with exactly one newline and reaches its
//!   destination writer in a single write, so concurrent emissions never
//!   interleave mid-line.
//! - A [`LogStream`] flushes at most once, with the enablement decision
//!   taken at creation time.
//!
//! # Errors
//!
//! Emission is fire-and-forget: write failures are discarded and [`Logger`]
//! methods return `()`. The fallible edges are explicit instead:
//! [`RecordSink`] surfaces [`std::io::Error`], severity parsing returns
//! [`ParseSeverityError`], and [`try_init`] returns [`GlobalInitError`]
//! when the process-wide logger already exists.
//!
//! # Examples
//!
//! Gate, emit, and inspect against in-memory writers:
//!
//! ```
//! use linelog::{Logger, LoggerConfig, Severity};
//!
//! let logger = Logger::new(
//!     LoggerConfig::with_threshold(Severity::Warning),
//!     Vec::new(),
//!     Vec::new(),
//! );
//!
//! logger.info("suppressed, never formatted");
//! logger.warning("disk nearly full");
//! {
//!     let mut line = logger.error_stream();
//!     line.push("failed after ").push(3).push(" retries");
//! }
//!
//! let (out, err) = logger.into_writers();
//! assert!(String::from_utf8(out).unwrap().contains("[WRN] disk nearly full"));
//! assert!(String::from_utf8(err).unwrap().contains("[ERR] failed after 3 retries"));
//! ```
//!
//! Or go through the process-wide logger with the macros:
//!
//! ```
//! use linelog::Severity;
//!
//! linelog::global().set_level(Severity::Debug);
//! linelog::log_debug!("handshake took {} ms", 3);
//! linelog::global().reset_level();
//! ```
//!
//! # See also
//!
//! - [`linelog_core`] for the record model shared with other frontends.
//! - The `tracing` feature for bridging `tracing` events into the same
//!   pipeline.

#[cfg(feature = "tracing")]
mod bridge;
mod config;
mod gate;
mod logger;
mod macros;
mod sink;
mod stream;
mod style;

#[cfg(feature = "tracing")]
pub use bridge::{LinelogLayer, init_tracing, init_tracing_with_filter};
pub use config::LoggerConfig;
pub use gate::SeverityGate;
pub use linelog_core::{ParseSeverityError, RENDERED_LEN, Record, Severity, Timestamp};
pub use logger::{ConsoleLogger, GlobalInitError, Logger, global, try_init};
pub use sink::RecordSink;
pub use stream::LogStream;
pub use style::{ColorMode, UNKNOWN_TAG, rank_tag, severity_tag};
