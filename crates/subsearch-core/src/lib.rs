//! # subsearch-core
//!
//! Core functionality for subsearch - a bounded, cancellable concurrent
//! subdomain prober.
//!
//! Given a base domain and a stream of candidate labels, the prober builds a
//! target URL per label, issues a lightweight HTTP existence check against
//! each one under a global concurrency bound, and yields exactly one outcome
//! per candidate.
//!
//! ## Architecture
//!
//! The crate is organized around a small set of components:
//!
//! - **Target building**: deterministic URL construction from a base domain
//!   and a candidate label ([`TargetBuilder`])
//! - **Wordlist streaming**: lazy, line-by-line candidate production so large
//!   wordlists are never fully buffered ([`wordlist`])
//! - **Transport**: the HTTP existence check behind a trait seam so tests can
//!   substitute instrumented fakes ([`ProbeTransport`], [`HttpTransport`])
//! - **Probing**: the bounded fan-out with cancellation ([`Prober`])
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use futures::stream;
//! use subsearch_core::{Prober, ProberConfig, TargetBuilder};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() -> subsearch_core::Result<()> {
//! let targets = TargetBuilder::new("https://example.com/")?;
//! let prober = Prober::new(ProberConfig::default())?;
//! let candidates = stream::iter(vec!["www".to_string(), "api".to_string()]);
//!
//! let run = prober
//!     .run(&targets, candidates, CancellationToken::new(), |outcome| {
//!         if outcome.valid() {
//!             println!("{}", outcome.target);
//!         }
//!     })
//!     .await;
//!
//! println!("{} of {} candidates answered 200", run.valid, run.probed);
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency model
//!
//! At most `concurrency` probes are in flight at any time; candidates are
//! pulled from the input stream on demand. Cancelling the
//! [`CancellationToken`](tokio_util::sync::CancellationToken) passed to
//! [`Prober::run`] stops new probes from starting while in-flight probes
//! drain, each bounded by its own request timeout.
//!
//! ## Error Handling
//!
//! Only input-level failures (unreadable wordlist, malformed base domain,
//! client construction) surface as [`Error`]. Per-candidate network failures
//! never abort a run; they are absorbed into
//! [`ProbeStatus::Unreachable`](types::ProbeStatus::Unreachable).

/// Error types and result aliases
pub mod error;
/// Bounded concurrent probe orchestration
pub mod prober;
/// Deterministic target URL construction
pub mod target;
/// HTTP existence checks behind a trait seam
pub mod transport;
/// Core data types for probe outcomes
pub mod types;
/// Streaming wordlist reader
pub mod wordlist;

pub use error::{Error, Result};
pub use prober::{Prober, ProberConfig};
pub use target::TargetBuilder;
pub use transport::{HttpTransport, ProbeTransport};
pub use types::{ProbeOutcome, ProbeRun, ProbeStatus};
