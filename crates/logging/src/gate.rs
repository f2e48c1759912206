//! crates/logging/src/gate.rs
//! Process-wide severity threshold with atomic load and store semantics.

use std::sync::atomic::{AtomicU8, Ordering};

use linelog_core::Severity;

/// Shared severity threshold consulted before any formatting work.
///
/// A record passes the gate when its severity ranks at or above the threshold
/// at the moment of the check. The rank is stored atomically so the gate can
/// be read from any thread; ordering is relaxed because a threshold change is
/// allowed to race with in-flight emissions and affects only subsequent
/// checks.
#[derive(Debug)]
pub struct SeverityGate {
    threshold: AtomicU8,
}

impl SeverityGate {
    /// Threshold installed at startup and restored by [`reset`](Self::reset).
    pub const DEFAULT_THRESHOLD: Severity = Severity::Info;

    /// Creates a gate with the given threshold.
    #[must_use]
    pub const fn new(threshold: Severity) -> Self {
        Self {
            threshold: AtomicU8::new(threshold.rank()),
        }
    }

    /// Returns the current threshold.
    #[must_use]
    pub fn threshold(&self) -> Severity {
        // Ranks only enter the gate through set_threshold, so the lookup
        // cannot miss; the fallback keeps the read infallible.
        Severity::from_rank(self.threshold.load(Ordering::Relaxed))
            .unwrap_or(Self::DEFAULT_THRESHOLD)
    }

    /// Replaces the threshold.
    ///
    /// Takes effect immediately for subsequent checks; emissions already past
    /// the gate are unaffected.
    pub fn set_threshold(&self, threshold: Severity) {
        self.threshold.store(threshold.rank(), Ordering::Relaxed);
    }

    /// Restores [`DEFAULT_THRESHOLD`](Self::DEFAULT_THRESHOLD), isolating
    /// tests that adjust shared state.
    pub fn reset(&self) {
        self.set_threshold(Self::DEFAULT_THRESHOLD);
    }

    /// Reports whether a record at `severity` passes the gate right now.
    #[must_use]
    pub fn permits(&self, severity: Severity) -> bool {
        severity.rank() >= self.threshold.load(Ordering::Relaxed)
    }
}

impl Default for SeverityGate {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD)
    }
}
