//! Outcome reporting.
//!
//! Three modes, selected with `--report`:
//!
//! - **quiet** (default): one line per valid target, matching the historical
//!   `<timestamp> VALID <url>` format; failures stay silent.
//! - **all**: every outcome with its numeric status, `UNREACHABLE` for
//!   targets that never answered.
//! - **json**: newline-delimited JSON objects for machine consumption, with
//!   `-1` as the unreachable sentinel.
//!
//! The reporter is driven from the prober's single consumer loop, so each
//! line is written whole - concurrent probes cannot interleave characters.

use clap::ValueEnum;
use colored::Colorize;
use subsearch_core::{ProbeOutcome, ProbeStatus};

/// Timestamp layout used on every reported line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Per-outcome verbosity selected with `--report`.
#[derive(ValueEnum, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    /// Only valid targets, in the historical line format.
    #[default]
    Quiet,
    /// Every outcome with its status code.
    All,
    /// Newline-delimited JSON, one object per outcome.
    Json,
}

/// Writes one line per reported outcome to standard output.
pub struct Reporter {
    mode: ReportMode,
}

impl Reporter {
    /// Create a reporter for the given mode.
    #[must_use]
    pub const fn new(mode: ReportMode) -> Self {
        Self { mode }
    }

    /// Emit one outcome according to the configured mode.
    pub fn emit(&self, outcome: &ProbeOutcome) {
        let timestamp = outcome.timestamp.format(TIMESTAMP_FORMAT).to_string();
        match self.mode {
            ReportMode::Quiet => {
                if outcome.valid() {
                    print_valid(&timestamp, outcome);
                }
            },
            ReportMode::All => {
                if outcome.valid() {
                    print_valid(&timestamp, outcome);
                } else {
                    let status = match outcome.status {
                        ProbeStatus::Status(code) => code.to_string(),
                        ProbeStatus::Unreachable => "UNREACHABLE".to_string(),
                    };
                    println!(
                        "{}  {}  {}",
                        timestamp.as_str().bold(),
                        status.as_str().dimmed(),
                        outcome.target
                    );
                }
            },
            ReportMode::Json => {
                let line = serde_json::json!({
                    "timestamp": timestamp,
                    "target": outcome.target,
                    "status": outcome.status.code(),
                    "valid": outcome.valid(),
                });
                println!("{line}");
            },
        }
    }
}

fn print_valid(timestamp: &str, outcome: &ProbeOutcome) {
    println!(
        "{}  {}  {}",
        timestamp.bold(),
        "VALID".bright_red().bold(),
        outcome.target.as_str().bold()
    );
}
