#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Shared record model for the linelog workspace.
//!
//! This crate defines the data that flows through the logging pipeline: the
//! ordered [`Severity`] levels with their rendering tags, the wall-clock
//! [`Timestamp`] captured per emission, and the [`Record`] combining both
//! with the message text. Policy lives elsewhere; everything here is plain
//! data plus its canonical textual form, so sinks and loggers in the
//! `linelog` crate can render lines without re-deriving formats.

pub mod record;
pub mod severity;
pub mod timestamp;

pub use record::Record;
pub use severity::{ParseSeverityError, Severity};
pub use timestamp::{RENDERED_LEN, Timestamp};
