//! crates/logging/src/macros.rs
//! Gating macros over the process-wide logger.
//!
//! Each macro accepts `format!`-style arguments and consults the severity
//! gate before touching them, so a suppressed call costs a single atomic
//! load and its arguments are never evaluated.

/// Emits a debug-level message through the process-wide logger.
///
/// The format arguments are evaluated only while the debug level is
/// enabled.
///
/// # Examples
///
/// ```
/// linelog::log_debug!("checksum pass took {} ms", 12);
/// ```
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        let logger = $crate::global();
        if logger.enabled($crate::Severity::Debug) {
            logger.log_args($crate::Severity::Debug, ::core::format_args!($($arg)*));
        }
    }};
}

/// Emits an info-level message through the process-wide logger.
///
/// The format arguments are evaluated only while the info level is enabled.
///
/// # Examples
///
/// ```
/// linelog::log_info!("session established");
/// ```
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        let logger = $crate::global();
        if logger.enabled($crate::Severity::Info) {
            logger.log_args($crate::Severity::Info, ::core::format_args!($($arg)*));
        }
    }};
}

/// Emits a warning-level message through the process-wide logger.
///
/// The format arguments are evaluated only while the warning level is
/// enabled.
///
/// # Examples
///
/// ```
/// linelog::log_warning!("retrying after {} failures", 2);
/// ```
#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)*) => {{
        let logger = $crate::global();
        if logger.enabled($crate::Severity::Warning) {
            logger.log_args($crate::Severity::Warning, ::core::format_args!($($arg)*));
        }
    }};
}

/// Emits an error-level message through the process-wide logger.
///
/// Error lines go to standard error. The format arguments are evaluated
/// only while the error level is enabled, which it is under every default
/// threshold.
///
/// # Examples
///
/// ```
/// linelog::log_error!("transfer aborted: {}", "connection reset");
/// ```
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        let logger = $crate::global();
        if logger.enabled($crate::Severity::Error) {
            logger.log_args($crate::Severity::Error, ::core::format_args!($($arg)*));
        }
    }};
}
