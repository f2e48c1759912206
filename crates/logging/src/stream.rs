//! crates/logging/src/stream.rs
//! Scope-flushed accumulation of one log message from multiple pushes.

use std::fmt::{self, Write as _};
use std::io;
use std::mem;

use linelog_core::{Record, Severity};

use crate::logger::Logger;

/// Accumulates message text and emits it as one record at scope exit.
///
/// Whether the stream emits is decided once, when it is created: a stream
/// that starts enabled flushes on drop even if the threshold is raised in
/// the meantime, and a stream that starts disabled stays silent even if the
/// threshold is lowered. Disabled streams skip rendering entirely, so pushed
/// values are never converted to text.
///
/// The stream borrows its logger and is move-only, which makes the flush
/// happen at most once; the record's timestamp is captured at flush time.
/// There is no manual flush call. To emit mid-scope, end the binding early
/// with [`drop`].
///
/// # Examples
///
/// ```
/// use linelog::{Logger, LoggerConfig, Severity};
///
/// let logger = Logger::new(LoggerConfig::default(), Vec::new(), Vec::new());
/// {
///     let mut stream = logger.info_stream();
///     stream.push("copied ").push(3).push(" files");
/// } // flushes here
///
/// let (out, _err) = logger.into_writers();
/// let out = String::from_utf8(out).unwrap();
/// assert!(out.contains("[INF] copied 3 files"));
/// ```
#[derive(Debug)]
pub struct LogStream<'a, O, E>
where
    O: io::Write,
    E: io::Write,
{
    logger: &'a Logger<O, E>,
    severity: Severity,
    enabled: bool,
    buffer: String,
}

impl<'a, O, E> LogStream<'a, O, E>
where
    O: io::Write,
    E: io::Write,
{
    pub(crate) fn new(logger: &'a Logger<O, E>, severity: Severity) -> Self {
        Self {
            logger,
            severity,
            enabled: logger.enabled(severity),
            buffer: String::new(),
        }
    }

    /// Returns the severity this stream flushes at.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Reports whether the stream was enabled when it was created.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns the text accumulated so far.
    ///
    /// Always empty for disabled streams.
    #[must_use]
    pub fn buffered(&self) -> &str {
        &self.buffer
    }

    /// Appends the rendered form of `value`.
    ///
    /// Disabled streams return immediately without rendering.
    pub fn push(&mut self, value: impl fmt::Display) -> &mut Self {
        if self.enabled {
            let _ = write!(self.buffer, "{value}");
        }
        self
    }

    /// Appends preformatted arguments.
    ///
    /// Covers formatting directives that [`push`](Self::push) cannot
    /// express, such as width or precision:
    ///
    /// ```
    /// use linelog::{Logger, LoggerConfig};
    ///
    /// let logger = Logger::new(LoggerConfig::default(), Vec::new(), Vec::new());
    /// logger
    ///     .info_stream()
    ///     .push("progress ")
    ///     .push_fmt(format_args!("{:.1}%", 87.5));
    ///
    /// let (out, _err) = logger.into_writers();
    /// assert!(String::from_utf8(out).unwrap().contains("progress 87.5%"));
    /// ```
    pub fn push_fmt(&mut self, args: fmt::Arguments<'_>) -> &mut Self {
        if self.enabled {
            let _ = self.buffer.write_fmt(args);
        }
        self
    }
}

impl<O, E> Drop for LogStream<'_, O, E>
where
    O: io::Write,
    E: io::Write,
{
    fn drop(&mut self) {
        if self.enabled {
            let text = mem::take(&mut self.buffer);
            self.logger.emit(&Record::new(self.severity, text));
        }
    }
}
