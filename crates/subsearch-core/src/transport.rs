//! HTTP existence checks behind a trait seam.
//!
//! The prober never talks to the network directly; it goes through
//! [`ProbeTransport`] so tests can substitute instrumented fakes (for
//! example, to verify the concurrency bound).

use crate::types::ProbeStatus;
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, redirect};
use std::time::Duration;
use tracing::debug;

/// A single lightweight existence check against a target URL.
///
/// Implementations must be infallible at the signature level: any failure to
/// reach the target is reported as [`ProbeStatus::Unreachable`], never as an
/// error, so one dead host cannot abort a run.
#[async_trait]
pub trait ProbeTransport: Send + Sync {
    /// Check whether `url` answers, returning the classified result.
    async fn probe(&self, url: &str) -> ProbeStatus;
}

/// Production transport: HEAD request with a GET fallback.
///
/// Issues a HEAD request against the target. Servers that reject HEAD
/// outright (405 or 501) are retried once with GET, discarding the body, so
/// a reachable host is not misreported just because of its method support.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport with the given per-request timeout.
    ///
    /// The timeout covers the whole request (connect through headers), so
    /// every probe terminates in bounded time regardless of the target.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Network`] if the HTTP client cannot be constructed.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("subsearch/", env!("CARGO_PKG_VERSION")))
            // Report the server's own status: a redirect is not a hit.
            .redirect(redirect::Policy::none())
            .build()
            .map_err(Error::Network)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ProbeTransport for HttpTransport {
    async fn probe(&self, url: &str) -> ProbeStatus {
        let status = match self.client.head(url).send().await {
            Ok(response) => response.status(),
            Err(err) => {
                debug!(%url, error = %err, "HEAD request failed");
                return ProbeStatus::Unreachable;
            },
        };

        if status == StatusCode::METHOD_NOT_ALLOWED || status == StatusCode::NOT_IMPLEMENTED {
            debug!(%url, "HEAD unsupported, falling back to GET");
            return match self.client.get(url).send().await {
                Ok(response) => ProbeStatus::Status(response.status().as_u16()),
                Err(err) => {
                    debug!(%url, error = %err, "GET fallback failed");
                    ProbeStatus::Unreachable
                },
            };
        }

        ProbeStatus::Status(status.as_u16())
    }
}
