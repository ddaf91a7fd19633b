//! Error types and handling for subsearch-core operations.
//!
//! Only configuration- and input-level failures are represented here; they
//! are fatal to a run. Per-candidate network failures are deliberately *not*
//! errors - they are recorded as
//! [`ProbeStatus::Unreachable`](crate::types::ProbeStatus::Unreachable) so a
//! single failing host can never abort the rest of the run.

use thiserror::Error;

/// The main error type for subsearch-core operations.
///
/// All public fallible functions in subsearch-core return
/// `Result<T, Error>`. The error chain is preserved through `source()` for
/// the underlying I/O and HTTP errors.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed.
    ///
    /// Covers opening and reading the wordlist file. Fatal: without a
    /// readable wordlist there is nothing to probe.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP client could not be constructed.
    ///
    /// Per-request failures do not use this variant; they are absorbed into
    /// probe outcomes instead.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Base domain is empty or malformed.
    ///
    /// Raised before any probing starts so a bad `--domain` argument fails
    /// fast rather than producing a wordlist worth of garbage targets.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Prober configuration is invalid (e.g. a zero concurrency limit).
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenient result alias used throughout subsearch-core.
pub type Result<T> = std::result::Result<T, Error>;
