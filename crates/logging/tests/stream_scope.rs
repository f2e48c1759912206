//! Integration tests for the scope-flushed streaming facade.
//!
//! These tests verify the creation-time enablement snapshot, the
//! exactly-once flush at scope exit, and the equivalence between a pushed
//! composition and a single direct log call.

use linelog::{Logger, LoggerConfig, Severity};

fn capture(threshold: Severity) -> Logger<Vec<u8>, Vec<u8>> {
    Logger::new(
        LoggerConfig::with_threshold(threshold),
        Vec::new(),
        Vec::new(),
    )
}

fn stdout_of(logger: Logger<Vec<u8>, Vec<u8>>) -> String {
    let (out, _err) = logger.into_writers();
    String::from_utf8(out).expect("stdout utf-8")
}

/// Strips the leading `[<timestamp>] ` so lines from different seconds
/// compare equal.
fn without_timestamp(line: &str) -> &str {
    let (_, rest) = line.split_once("] ").expect("timestamp field");
    rest
}

// ============================================================================
// Composition Equivalence Tests
// ============================================================================

/// Verifies a pushed composition emits the same line as one direct call.
#[test]
fn composition_matches_a_direct_call() {
    let streamed = capture(Severity::Info);
    {
        let mut stream = streamed.info_stream();
        stream.push("copied ").push(42).push(" files in ").push(7).push("s");
    }

    let direct = capture(Severity::Info);
    direct.info("copied 42 files in 7s");

    let streamed_out = stdout_of(streamed);
    let direct_out = stdout_of(direct);
    assert_eq!(
        without_timestamp(streamed_out.lines().next().expect("streamed line")),
        without_timestamp(direct_out.lines().next().expect("direct line")),
    );
}

/// Verifies push_fmt covers formatting directives inside a composition.
#[test]
fn push_fmt_applies_format_directives() {
    let logger = capture(Severity::Info);
    logger
        .info_stream()
        .push("progress ")
        .push_fmt(format_args!("{:>5.1}%", 87.5));

    let out = stdout_of(logger);
    assert!(out.contains("[INF] progress  87.5%"));
}

/// Verifies multiple sequential streams emit one line each, in order.
#[test]
fn sequential_streams_emit_in_order() {
    let logger = capture(Severity::Debug);
    logger.debug_stream().push("first");
    logger.info_stream().push("second");
    logger.warning_stream().push("third");

    let out = stdout_of(logger);
    let rendered: Vec<&str> = out.lines().map(without_timestamp).collect();
    assert_eq!(
        rendered,
        ["[DBG] first", "[INF] second", "[WRN] third"]
    );
}

// ============================================================================
// Enablement Snapshot Tests
// ============================================================================

/// Verifies a suppressed composition leaves no trace anywhere.
#[test]
fn suppressed_composition_has_no_side_effect() {
    let logger = capture(Severity::Warning);
    {
        let mut stream = logger.info_stream();
        assert!(!stream.is_enabled());
        stream.push("invisible ").push(1);
        assert!(stream.buffered().is_empty());
    }

    let (out, err) = logger.into_writers();
    assert!(out.is_empty());
    assert!(err.is_empty());
}

/// Verifies an enabled stream still flushes after the threshold is raised.
#[test]
fn enabled_stream_survives_a_raised_threshold() {
    let logger = capture(Severity::Debug);
    {
        let mut stream = logger.debug_stream();
        stream.push("created before the raise");
        logger.set_level(Severity::Error);
    }

    let out = stdout_of(logger);
    assert!(out.contains("[DBG] created before the raise"));
}

/// Verifies a disabled stream stays silent after the threshold is lowered.
#[test]
fn disabled_stream_ignores_a_lowered_threshold() {
    let logger = capture(Severity::Error);
    {
        let mut stream = logger.info_stream();
        logger.set_level(Severity::Debug);
        stream.push("still invisible");
    }

    let (out, err) = logger.into_writers();
    assert!(out.is_empty());
    assert!(err.is_empty());
}

// ============================================================================
// Scope Exit Tests
// ============================================================================

/// Verifies the flush happens exactly once even when the stream moves.
#[test]
fn flush_happens_exactly_once() {
    fn finish(mut stream: linelog::LogStream<'_, Vec<u8>, Vec<u8>>) {
        stream.push(" and the tail");
    }

    let logger = capture(Severity::Info);
    let mut stream = logger.info_stream();
    stream.push("the head");
    finish(stream);

    let out = stdout_of(logger);
    assert_eq!(out.lines().count(), 1);
    assert!(out.contains("[INF] the head and the tail"));
}

/// Verifies an enabled stream with no pushes flushes an empty message.
#[test]
fn empty_enabled_stream_flushes_an_empty_message() {
    let logger = capture(Severity::Debug);
    drop(logger.info_stream());

    let out = stdout_of(logger);
    assert_eq!(out.lines().count(), 1);
    assert!(out.ends_with("[INF] \n"));
}

/// Verifies dropping early emits mid-scope.
#[test]
fn explicit_drop_flushes_early() {
    let logger = capture(Severity::Info);
    let mut stream = logger.warning_stream();
    stream.push("eager");
    drop(stream);
    logger.info("after the flush");

    let out = stdout_of(logger);
    let rendered: Vec<&str> = out.lines().map(without_timestamp).collect();
    assert_eq!(rendered, ["[WRN] eager", "[INF] after the flush"]);
}

/// Verifies the named entry points carry their severity.
#[test]
fn named_streams_carry_their_severity() {
    let logger = capture(Severity::Debug);
    assert_eq!(logger.debug_stream().severity(), Severity::Debug);
    assert_eq!(logger.info_stream().severity(), Severity::Info);
    assert_eq!(logger.warning_stream().severity(), Severity::Warning);
    assert_eq!(logger.error_stream().severity(), Severity::Error);
    assert_eq!(
        logger.stream(Severity::Warning).severity(),
        Severity::Warning
    );
}
