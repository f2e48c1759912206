//! Demonstrates threshold parsing, fallible helpers, and the stream facade.
//!
//! Raises the process-wide threshold to warning (parsed from its name), so
//! info lines vanish while error lines still reach stderr, then composes
//! one warning line from several pushes.
//!
//! Run with: cargo run --example advanced

use linelog::{Severity, global, log_error, log_info};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("division by zero")]
struct DivisionByZero;

fn divide(dividend: i64, divisor: i64) -> Result<i64, DivisionByZero> {
    if divisor == 0 {
        return Err(DivisionByZero);
    }
    Ok(dividend / divisor)
}

fn report(dividend: i64, divisor: i64) {
    match divide(dividend, divisor) {
        Ok(result) => log_info!("division result: {result}"),
        Err(error) => log_error!("error during division: {error}"),
    }
}

fn main() {
    let threshold: Severity = "warning".parse().expect("known severity name");
    global().set_level(threshold);

    log_info!("start"); // suppressed under the warning threshold

    report(10, 2); // succeeds, but the info line is suppressed
    report(10, 0); // fails, the error line reaches stderr

    log_info!("end"); // suppressed

    // One warning line composed from several pushes; the stream flushes at
    // the end of the statement.
    global()
        .warning_stream()
        .push("finished with ")
        .push(1)
        .push(" failed division");
}
