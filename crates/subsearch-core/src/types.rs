//! Core data types for probe outcomes.

use chrono::{DateTime, Local};

/// Classification of a single probe.
///
/// Any HTTP response - regardless of status class - carries its numeric
/// code. Connection, DNS, timeout, and protocol failures all collapse into
/// [`Unreachable`](Self::Unreachable).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStatus {
    /// The target answered with an HTTP response.
    Status(u16),
    /// The target could not be reached (network, DNS, or timeout failure).
    Unreachable,
}

impl ProbeStatus {
    /// Sentinel code used for unreachable targets in machine-readable output.
    pub const UNREACHABLE_CODE: i32 = -1;

    /// Numeric status code, or [`Self::UNREACHABLE_CODE`] for unreachable
    /// targets.
    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            Self::Status(code) => i32::from(code),
            Self::Unreachable => Self::UNREACHABLE_CODE,
        }
    }

    /// Whether this status counts as a discovered subdomain.
    ///
    /// Only an exact 200 qualifies; redirects and other 2xx codes are
    /// intentionally not treated as valid.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Status(200))
    }
}

/// The outcome of one probe, produced exactly once per candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    /// The fully qualified URL that was checked.
    pub target: String,
    /// Classified result of the check.
    pub status: ProbeStatus,
    /// Local time at which the check completed.
    pub timestamp: DateTime<Local>,
}

impl ProbeOutcome {
    /// Whether the target answered with exactly HTTP 200.
    #[must_use]
    pub const fn valid(&self) -> bool {
        self.status.is_valid()
    }
}

/// Aggregate counters for one probe run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProbeRun {
    /// Number of candidates that produced an outcome.
    pub probed: usize,
    /// Number of targets that answered with HTTP 200.
    pub valid: usize,
    /// Number of targets that could not be reached at all.
    pub unreachable: usize,
    /// Whether the run was cut short by cancellation.
    pub cancelled: bool,
}

impl ProbeRun {
    /// Fold one outcome into the run counters.
    pub fn record(&mut self, outcome: &ProbeOutcome) {
        self.probed += 1;
        if outcome.valid() {
            self.valid += 1;
        }
        if outcome.status == ProbeStatus::Unreachable {
            self.unreachable += 1;
        }
    }
}
