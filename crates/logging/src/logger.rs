//! crates/logging/src/logger.rs
//! Threshold-gated logger plus the lazily created process-wide instance.

use std::borrow::Cow;
use std::fmt;
use std::io;
use std::sync::{Mutex, OnceLock, PoisonError};

use is_terminal::IsTerminal;
use linelog_core::{Record, Severity};
use thiserror::Error;

use crate::config::LoggerConfig;
use crate::gate::SeverityGate;
use crate::sink::RecordSink;
use crate::stream::LogStream;

/// Leveled logger over a pair of destination writers.
///
/// Records at [`Severity::Error`] are routed to the error writer; every other
/// severity goes to the output writer. Emission is gated by a shared
/// [`SeverityGate`]: a record below the current threshold is dropped before a
/// timestamp is captured or any rendering happens.
///
/// The logger takes `&self` everywhere, so one instance can be shared freely;
/// each sink is guarded by a mutex and writes a whole line at a time. Write
/// failures are discarded, as diagnostics must never turn into errors of
/// their own.
///
/// # Examples
///
/// ```
/// use linelog::{Logger, LoggerConfig, Severity};
///
/// let logger = Logger::new(
///     LoggerConfig::with_threshold(Severity::Warning),
///     Vec::new(),
///     Vec::new(),
/// );
/// logger.info("below the threshold");
/// logger.warning("disk nearly full");
/// logger.error("giving up");
///
/// let (out, err) = logger.into_writers();
/// let out = String::from_utf8(out).unwrap();
/// let err = String::from_utf8(err).unwrap();
/// assert!(out.contains("[WRN] disk nearly full"));
/// assert!(err.contains("[ERR] giving up"));
/// assert!(!out.contains("below the threshold"));
/// ```
#[derive(Debug)]
pub struct Logger<O, E>
where
    O: io::Write,
    E: io::Write,
{
    gate: SeverityGate,
    out: Mutex<RecordSink<O>>,
    err: Mutex<RecordSink<E>>,
}

/// Logger over the process's standard output and standard error streams.
pub type ConsoleLogger = Logger<io::Stdout, io::Stderr>;

impl ConsoleLogger {
    /// Creates a logger over stdout and stderr.
    ///
    /// [`ColorMode::Auto`](crate::ColorMode::Auto) is resolved per stream, so
    /// a piped stdout stays plain while an interactive stderr keeps its
    /// colors.
    #[must_use]
    pub fn console(config: LoggerConfig) -> Self {
        let stdout_is_terminal = io::stdout().is_terminal();
        let stderr_is_terminal = io::stderr().is_terminal();
        Self {
            gate: SeverityGate::new(config.threshold),
            out: Mutex::new(RecordSink::with_color(
                io::stdout(),
                config.color,
                stdout_is_terminal,
            )),
            err: Mutex::new(RecordSink::with_color(
                io::stderr(),
                config.color,
                stderr_is_terminal,
            )),
        }
    }
}

impl<O, E> Logger<O, E>
where
    O: io::Write,
    E: io::Write,
{
    /// Creates a logger over explicit writers.
    ///
    /// The writers are treated as non-terminals, so
    /// [`ColorMode::Auto`](crate::ColorMode::Auto) resolves to plain output;
    /// use [`ColorMode::Always`](crate::ColorMode::Always) to force escapes.
    #[must_use]
    pub fn new(config: LoggerConfig, out: O, err: E) -> Self {
        Self {
            gate: SeverityGate::new(config.threshold),
            out: Mutex::new(RecordSink::with_color(out, config.color, false)),
            err: Mutex::new(RecordSink::with_color(err, config.color, false)),
        }
    }

    /// Returns the current severity threshold.
    #[must_use]
    pub fn level(&self) -> Severity {
        self.gate.threshold()
    }

    /// Replaces the severity threshold.
    ///
    /// Takes effect immediately for subsequent emissions; records already
    /// past the gate are unaffected. Setting the current value again is a
    /// no-op.
    pub fn set_level(&self, severity: Severity) {
        self.gate.set_threshold(severity);
    }

    /// Restores the default threshold, [`Severity::Info`].
    ///
    /// Lets tests that adjust a shared logger put it back afterwards.
    pub fn reset_level(&self) {
        self.gate.reset();
    }

    /// Reports whether a record at `severity` would currently be emitted.
    #[must_use]
    pub fn enabled(&self, severity: Severity) -> bool {
        self.gate.permits(severity)
    }

    /// Emits `text` at `severity` if the gate permits it.
    ///
    /// Suppressed calls return before a timestamp is captured or a sink is
    /// touched.
    pub fn log(&self, severity: Severity, text: impl Into<Cow<'static, str>>) {
        if !self.gate.permits(severity) {
            return;
        }
        self.emit(&Record::new(severity, text));
    }

    /// Deferred-formatting variant of [`log`](Self::log).
    ///
    /// The gate is consulted before the arguments are rendered, so
    /// suppressed calls never pay for formatting. Plain literals are passed
    /// through without allocating.
    pub fn log_args(&self, severity: Severity, args: fmt::Arguments<'_>) {
        if !self.gate.permits(severity) {
            return;
        }
        let text: Cow<'static, str> = match args.as_str() {
            Some(literal) => Cow::Borrowed(literal),
            None => Cow::Owned(args.to_string()),
        };
        self.emit(&Record::new(severity, text));
    }

    /// Emits a debug-level message.
    pub fn debug(&self, text: impl Into<Cow<'static, str>>) {
        self.log(Severity::Debug, text);
    }

    /// Emits an info-level message.
    pub fn info(&self, text: impl Into<Cow<'static, str>>) {
        self.log(Severity::Info, text);
    }

    /// Emits a warning-level message.
    pub fn warning(&self, text: impl Into<Cow<'static, str>>) {
        self.log(Severity::Warning, text);
    }

    /// Emits an error-level message.
    pub fn error(&self, text: impl Into<Cow<'static, str>>) {
        self.log(Severity::Error, text);
    }

    /// Opens a streaming accumulation that flushes one record at `severity`
    /// when it goes out of scope.
    ///
    /// Whether the stream emits is decided here, once; see [`LogStream`] for
    /// the scope semantics.
    pub fn stream(&self, severity: Severity) -> LogStream<'_, O, E> {
        LogStream::new(self, severity)
    }

    /// Opens a debug-level stream.
    pub fn debug_stream(&self) -> LogStream<'_, O, E> {
        self.stream(Severity::Debug)
    }

    /// Opens an info-level stream.
    pub fn info_stream(&self) -> LogStream<'_, O, E> {
        self.stream(Severity::Info)
    }

    /// Opens a warning-level stream.
    pub fn warning_stream(&self) -> LogStream<'_, O, E> {
        self.stream(Severity::Warning)
    }

    /// Opens an error-level stream.
    pub fn error_stream(&self) -> LogStream<'_, O, E> {
        self.stream(Severity::Error)
    }

    /// Consumes the logger and returns the output and error writers.
    ///
    /// Tests capture emissions by constructing the logger over `Vec<u8>`
    /// writers and inspecting the buffers afterwards.
    #[must_use]
    pub fn into_writers(self) -> (O, E) {
        let out = self
            .out
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        let err = self
            .err
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        (out.into_inner(), err.into_inner())
    }

    /// Renders and routes one record without consulting the gate.
    ///
    /// Streams that were enabled at creation flush through here even if the
    /// threshold has been raised since. A poisoned sink suppresses the
    /// emission rather than propagating the panic.
    pub(crate) fn emit(&self, record: &Record) {
        if record.severity() == Severity::Error {
            if let Ok(mut sink) = self.err.lock() {
                let _ = sink.write(record);
            }
        } else if let Ok(mut sink) = self.out.lock() {
            let _ = sink.write(record);
        }
    }
}

static GLOBAL: OnceLock<ConsoleLogger> = OnceLock::new();

/// Returns the process-wide console logger.
///
/// The first access creates it with [`LoggerConfig::DEFAULT`]: an
/// [`Info`](Severity::Info) threshold and automatic colorization. The
/// instance lives for the rest of the process; the `log_*!` macros and the
/// tracing bridge all route through it.
#[must_use]
pub fn global() -> &'static ConsoleLogger {
    GLOBAL.get_or_init(|| ConsoleLogger::console(LoggerConfig::DEFAULT))
}

/// Installs the process-wide logger with an explicit configuration.
///
/// Fails with [`GlobalInitError`] when the logger already exists, whether
/// from an earlier `try_init` or from a lazy [`global`] access; the running
/// configuration is left untouched in that case. Call this before anything
/// else logs.
pub fn try_init(config: LoggerConfig) -> Result<(), GlobalInitError> {
    let mut installed = false;
    GLOBAL.get_or_init(|| {
        installed = true;
        ConsoleLogger::console(config)
    });
    if installed {
        Ok(())
    } else {
        Err(GlobalInitError::new(config))
    }
}

/// Error returned by [`try_init`] when the process-wide logger already
/// exists.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("global logger is already initialised")]
pub struct GlobalInitError {
    rejected: LoggerConfig,
}

impl GlobalInitError {
    /// Creates an error recording the configuration that was not applied.
    #[must_use]
    pub const fn new(rejected: LoggerConfig) -> Self {
        Self { rejected }
    }

    /// Returns the configuration that was not applied.
    #[must_use]
    pub const fn rejected(&self) -> LoggerConfig {
        self.rejected
    }
}
