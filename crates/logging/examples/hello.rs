//! Demonstrates the four severity levels and message composition.
//!
//! Lowers the process-wide threshold to debug so every level is visible,
//! emits one line per level, then composes messages in a loop.
//!
//! Run with: cargo run --example hello

use linelog::{Severity, global, log_debug, log_error, log_info, log_warning};

fn main() {
    // Every level from debug upwards is visible.
    global().set_level(Severity::Debug);

    log_debug!("this is a debug level message");
    log_info!("this is an info level message");
    log_warning!("this is a warning level message");
    log_error!("this is an error level message");

    for i in 0..3 {
        log_info!("loop iteration: {i}");
    }
}
