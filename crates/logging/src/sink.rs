//! crates/logging/src/sink.rs
//! Streaming sink that renders [`Record`] values into an [`io::Write`] target.

use std::borrow::Borrow;
use std::fmt::Write as _;
use std::io::{self, Write};

use linelog_core::Record;

use crate::style::{self, ColorMode};

/// Renders records as single log lines into an owned writer.
///
/// The sink owns the underlying writer together with a reusable render
/// buffer, so repeated writes avoid fresh allocations once the buffer has
/// grown to the longest line seen. Each call to [`write`](Self::write)
/// produces `[<timestamp>] <tag> <message>` followed by exactly one newline
/// and hands the whole line to the writer in a single `write_all` call.
///
/// Whether severity tags are wrapped in ANSI color escapes is decided once,
/// at construction, from a [`ColorMode`] and the destination's terminal
/// status.
///
/// # Examples
///
/// Collect two records into a [`Vec<u8>`] and inspect the output:
///
/// ```
/// use linelog::{Record, RecordSink};
///
/// let mut sink = RecordSink::new(Vec::new());
/// sink.write(&Record::warning("some files vanished"))?;
/// sink.write(&Record::error("partial transfer"))?;
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(output.lines().count(), 2);
/// assert!(output.ends_with('\n'));
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct RecordSink<W> {
    writer: W,
    colored: bool,
    scratch: String,
}

impl<W> RecordSink<W> {
    /// Creates a sink that renders plain, uncolored lines.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_color(writer, ColorMode::Never, false)
    }

    /// Creates a sink whose colorization is resolved from `mode` once, at
    /// construction time.
    ///
    /// `destination_is_terminal` feeds the [`ColorMode::Auto`] decision; pass
    /// `false` for writers that are not interactive terminals.
    #[must_use]
    pub fn with_color(writer: W, mode: ColorMode, destination_is_terminal: bool) -> Self {
        Self {
            writer,
            colored: mode.enabled_for(destination_is_terminal),
            scratch: String::new(),
        }
    }

    /// Reports whether severity tags are wrapped in ANSI color escapes.
    #[must_use]
    pub const fn is_colored(&self) -> bool {
        self.colored
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> Default for RecordSink<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}

impl<W> RecordSink<W>
where
    W: Write,
{
    /// Writes a single record to the underlying writer.
    ///
    /// The rendered line always ends with exactly one newline and reaches
    /// the writer in one `write_all` call, so lines from different sinks
    /// never interleave mid-line.
    pub fn write(&mut self, record: &Record) -> io::Result<()> {
        self.scratch.clear();
        let tag = style::severity_tag(record.severity(), self.colored);
        // Rendering into a String cannot fail; the fields are plain text and
        // the timestamp formatter has an infallible fallback.
        let _ = write!(
            self.scratch,
            "[{}] {} {}",
            record.timestamp(),
            tag,
            record.text()
        );
        self.scratch.push('\n');
        self.writer.write_all(self.scratch.as_bytes())
    }

    /// Writes each record from the iterator to the underlying writer.
    ///
    /// The iterator may yield borrowed or owned [`Record`] values, so both
    /// `records.iter()` and owned collections are accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use linelog::{Record, RecordSink};
    ///
    /// let mut sink = RecordSink::new(Vec::new());
    /// let records = [
    ///     Record::info("phase one"),
    ///     Record::warning("phase two"),
    /// ];
    ///
    /// sink.write_all(records.iter())?;
    /// let output = String::from_utf8(sink.into_inner()).unwrap();
    /// assert_eq!(output.lines().count(), 2);
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn write_all<I, R>(&mut self, records: I) -> io::Result<()>
    where
        I: IntoIterator<Item = R>,
        R: Borrow<Record>,
    {
        for record in records {
            self.write(record.borrow())?;
        }
        Ok(())
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
