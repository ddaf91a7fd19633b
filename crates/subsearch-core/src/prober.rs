//! Bounded, cancellable concurrent probe orchestration.
//!
//! The prober pulls candidate labels from a stream, builds a target per
//! label, and issues existence checks through a [`ProbeTransport`] with at
//! most [`ProberConfig::concurrency`] probes in flight at once. This is the
//! fixed-size worker pool that replaces spawning one task per wordlist line,
//! which on large wordlists exhausts sockets and file descriptors.
//!
//! Cancellation is cooperative: cancelling the token stops new probes from
//! starting while in-flight probes drain, each bounded by its own request
//! timeout, so the run terminates promptly without dropping outcomes for
//! work already started.

use crate::target::TargetBuilder;
use crate::transport::{HttpTransport, ProbeTransport};
use crate::types::{ProbeOutcome, ProbeRun};
use crate::{Error, Result};
use chrono::Local;
use futures::{Stream, StreamExt};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Default maximum number of in-flight probes.
pub const DEFAULT_CONCURRENCY: usize = 20;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Tuning knobs for a probe run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProberConfig {
    /// Global bound on concurrently in-flight probes. Must be at least 1.
    pub concurrency: usize,
    /// Timeout applied independently to every probe.
    pub timeout: Duration,
}

impl Default for ProberConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Orchestrates the bounded fan-out of existence checks.
pub struct Prober<T: ProbeTransport> {
    transport: Arc<T>,
    config: ProberConfig,
}

impl Prober<HttpTransport> {
    /// Create a prober backed by the production HTTP transport.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Network`] if the HTTP client cannot be constructed,
    /// or [`Error::Config`] for an invalid configuration.
    pub fn new(config: ProberConfig) -> Result<Self> {
        let transport = HttpTransport::new(config.timeout)?;
        Self::with_transport(transport, config)
    }
}

impl<T: ProbeTransport + 'static> Prober<T> {
    /// Create a prober over an arbitrary transport (tests use this to
    /// substitute instrumented fakes).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the concurrency limit is zero.
    pub fn with_transport(transport: T, config: ProberConfig) -> Result<Self> {
        if config.concurrency == 0 {
            return Err(Error::Config(
                "concurrency limit must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            transport: Arc::new(transport),
            config,
        })
    }

    /// Stream one [`ProbeOutcome`] per candidate.
    ///
    /// Outcomes arrive in completion order, not candidate order. Cancelling
    /// `cancel` stops pulling new candidates; probes already in flight still
    /// complete and yield their outcome.
    pub fn outcomes<S>(
        &self,
        targets: &TargetBuilder,
        candidates: S,
        cancel: CancellationToken,
    ) -> impl Stream<Item = ProbeOutcome>
    where
        S: Stream<Item = String> + Send,
    {
        let transport = Arc::clone(&self.transport);
        candidates
            .take_until(cancel.cancelled_owned())
            .map(move |label| {
                let url = targets.build(&label);
                let transport = Arc::clone(&transport);
                async move {
                    let status = transport.probe(&url).await;
                    ProbeOutcome {
                        target: url,
                        status,
                        timestamp: Local::now(),
                    }
                }
            })
            .buffer_unordered(self.config.concurrency)
    }

    /// Drive a full run, invoking `report` once per outcome.
    ///
    /// `report` is called from a single consumer loop, so anything it writes
    /// is naturally serialized - concurrent probes can never tear each
    /// other's output lines.
    ///
    /// Returns only after every non-cancelled candidate has produced an
    /// outcome.
    pub async fn run<S, F>(
        &self,
        targets: &TargetBuilder,
        candidates: S,
        cancel: CancellationToken,
        mut report: F,
    ) -> ProbeRun
    where
        S: Stream<Item = String> + Send,
        F: FnMut(&ProbeOutcome),
    {
        let outcomes = self.outcomes(targets, candidates, cancel.clone());
        futures::pin_mut!(outcomes);

        let mut run = ProbeRun::default();
        while let Some(outcome) = outcomes.next().await {
            debug!(url = %outcome.target, code = outcome.status.code(), "probe completed");
            run.record(&outcome);
            report(&outcome);
        }
        run.cancelled = cancel.is_cancelled();
        run
    }
}
