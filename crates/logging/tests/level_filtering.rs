//! Integration tests for severity ordering and threshold filtering.
//!
//! These tests verify that the severity gate admits exactly the records at
//! or above the configured threshold, that threshold changes affect only
//! subsequent emissions, and that severity names parse back into levels.

use linelog::{Logger, LoggerConfig, Severity};

fn capture(threshold: Severity) -> Logger<Vec<u8>, Vec<u8>> {
    Logger::new(
        LoggerConfig::with_threshold(threshold),
        Vec::new(),
        Vec::new(),
    )
}

fn line_counts(logger: Logger<Vec<u8>, Vec<u8>>) -> (usize, usize) {
    let (out, err) = logger.into_writers();
    let out = String::from_utf8(out).expect("stdout utf-8");
    let err = String::from_utf8(err).expect("stderr utf-8");
    (out.lines().count(), err.lines().count())
}

// ============================================================================
// Severity Ordering Tests
// ============================================================================

/// Verifies the four severities are totally ordered by urgency.
#[test]
fn severities_are_totally_ordered() {
    assert!(Severity::Debug < Severity::Info);
    assert!(Severity::Info < Severity::Warning);
    assert!(Severity::Warning < Severity::Error);
}

/// Verifies ranks are stable and round-trip through from_rank.
#[test]
fn ranks_round_trip() {
    for (expected, severity) in Severity::ALL.into_iter().enumerate() {
        let rank = severity.rank();
        assert_eq!(usize::from(rank), expected);
        assert_eq!(Severity::from_rank(rank), Some(severity));
    }
    assert_eq!(Severity::from_rank(4), None);
}

// ============================================================================
// Threshold Gate Tests
// ============================================================================

/// Verifies every threshold admits exactly the severities at or above it.
#[test]
fn each_threshold_admits_the_tail() {
    for threshold in Severity::ALL {
        let logger = capture(threshold);
        for severity in Severity::ALL {
            logger.log(severity, severity.name());
        }

        let expected = Severity::ALL
            .into_iter()
            .filter(|severity| *severity >= threshold)
            .count();
        let (out, err) = line_counts(logger);
        assert_eq!(out + err, expected, "threshold {threshold}");
    }
}

/// Verifies enabled() agrees with what log() actually emits.
#[test]
fn enabled_matches_emission() {
    for threshold in Severity::ALL {
        let logger = capture(threshold);
        let mut expected_total = 0;
        for severity in Severity::ALL {
            assert_eq!(logger.enabled(severity), severity >= threshold);
            logger.log(severity, "probe");
            if severity >= threshold {
                expected_total += 1;
            }
        }

        let (out, err) = line_counts(logger);
        assert_eq!(out + err, expected_total);
    }
}

/// Verifies a suppressed call leaves both writers untouched.
#[test]
fn suppressed_calls_write_nothing() {
    let logger = capture(Severity::Error);
    logger.debug("hidden");
    logger.info("hidden");
    logger.warning("hidden");

    let (out, err) = logger.into_writers();
    assert!(out.is_empty());
    assert!(err.is_empty());
}

// ============================================================================
// Threshold Mutation Tests
// ============================================================================

/// Verifies a threshold change never reaches back to earlier emissions.
#[test]
fn threshold_changes_are_not_retroactive() {
    let logger = capture(Severity::Info);
    logger.info("before the change");
    logger.set_level(Severity::Error);
    logger.info("after the change");

    let (out, _err) = logger.into_writers();
    let out = String::from_utf8(out).expect("stdout utf-8");
    assert!(out.contains("before the change"));
    assert!(!out.contains("after the change"));
}

/// Verifies setting the same threshold twice behaves like setting it once.
#[test]
fn setting_the_same_threshold_is_idempotent() {
    let logger = capture(Severity::Info);
    logger.set_level(Severity::Warning);
    logger.set_level(Severity::Warning);

    assert_eq!(logger.level(), Severity::Warning);
    logger.info("still suppressed");
    logger.warning("still emitted");

    let (out, _err) = line_counts(logger);
    assert_eq!(out, 1);
}

/// Verifies reset_level restores the info default.
#[test]
fn reset_level_restores_the_default() {
    let logger = capture(Severity::Error);
    logger.reset_level();
    assert_eq!(logger.level(), Severity::Info);
}

/// Verifies the default configuration starts at the info threshold.
#[test]
fn default_configuration_threshold_is_info() {
    let logger = Logger::new(LoggerConfig::default(), Vec::new(), Vec::new());
    assert_eq!(logger.level(), Severity::Info);
    assert!(logger.enabled(Severity::Info));
    assert!(!logger.enabled(Severity::Debug));
}

// ============================================================================
// Severity Name Tests
// ============================================================================

/// Verifies severity names round-trip through Display and FromStr.
#[test]
fn severity_names_round_trip() {
    for severity in Severity::ALL {
        let name = severity.to_string();
        let parsed: Severity = name.parse().expect("rendered name parses");
        assert_eq!(parsed, severity);
    }
}

/// Verifies parsing ignores ASCII case and surrounding whitespace.
#[test]
fn severity_parsing_is_case_insensitive() {
    assert_eq!("WARNING".parse::<Severity>(), Ok(Severity::Warning));
    assert_eq!("Debug".parse::<Severity>(), Ok(Severity::Debug));
    assert_eq!(" error ".parse::<Severity>(), Ok(Severity::Error));
}

/// Verifies unknown names are rejected and reported back.
#[test]
fn unknown_severity_names_are_rejected() {
    let error = "verbose".parse::<Severity>().expect_err("must not parse");
    assert_eq!(error.invalid_name(), "verbose");
    assert!(error.to_string().contains("verbose"));
}
