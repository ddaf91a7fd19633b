//! Deterministic target URL construction.
//!
//! A target is built by inserting a candidate label as a subdomain of the
//! base domain: `scheme://label.host`. Construction is a pure string
//! operation - no network access, and the same `(domain, label)` pair always
//! yields the same target.
//!
//! ## Normalization
//!
//! An explicit `http://` or `https://` prefix on the base domain is reused;
//! without one the secure scheme is assumed. Trailing `/` characters are
//! stripped from the host part in both cases, so `example.com/` and
//! `https://example.com/` both produce well-formed hostnames. Nothing from
//! the original string is re-appended after the host.

use crate::{Error, Result};
use url::Url;

/// Builds fully qualified target URLs from a normalized base domain.
///
/// The base domain is validated once at construction; building a target per
/// label is then infallible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetBuilder {
    scheme: String,
    host: String,
}

impl TargetBuilder {
    /// Normalize and validate a base domain.
    ///
    /// Accepts a bare domain (`example.com`), a domain with trailing slash,
    /// or a full URL with an explicit `http://`/`https://` scheme.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if the domain is empty, scheme-only, or
    /// does not parse as a URL host.
    pub fn new(domain: &str) -> Result<Self> {
        let (scheme, rest) = if let Some(rest) = domain.strip_prefix("https://") {
            ("https", rest)
        } else if let Some(rest) = domain.strip_prefix("http://") {
            ("http", rest)
        } else {
            ("https", domain)
        };

        let host = rest.trim().trim_end_matches('/');
        if host.is_empty() {
            return Err(Error::InvalidUrl(format!(
                "base domain '{domain}' has no host"
            )));
        }

        // One up-front parse so an unusable domain fails before any probing.
        let check = format!("{scheme}://{host}/");
        Url::parse(&check).map_err(|e| Error::InvalidUrl(format!("'{domain}': {e}")))?;

        Ok(Self {
            scheme: scheme.to_string(),
            host: host.to_string(),
        })
    }

    /// Build the target URL for one candidate label.
    #[must_use]
    pub fn build(&self, label: &str) -> String {
        format!("{}://{}.{}", self.scheme, label, self.host)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn explicit_https_scheme_with_trailing_slash() {
        let targets = TargetBuilder::new("https://example.com/").unwrap();
        assert_eq!(targets.build("www"), "https://www.example.com");
    }

    #[test]
    fn explicit_http_scheme_is_reused() {
        let targets = TargetBuilder::new("http://example.com").unwrap();
        assert_eq!(targets.build("staging"), "http://staging.example.com");
    }

    #[test]
    fn bare_domain_defaults_to_https() {
        let targets = TargetBuilder::new("example.com").unwrap();
        assert_eq!(targets.build("api"), "https://api.example.com");
    }

    #[test]
    fn bare_domain_trailing_slash_is_stripped() {
        let targets = TargetBuilder::new("example.com/").unwrap();
        assert_eq!(targets.build("api"), "https://api.example.com");
    }

    #[test]
    fn port_is_preserved() {
        let targets = TargetBuilder::new("http://example.com:8080/").unwrap();
        assert_eq!(targets.build("dev"), "http://dev.example.com:8080");
    }

    #[test]
    fn building_is_deterministic() {
        let targets = TargetBuilder::new("https://example.com/").unwrap();
        assert_eq!(targets.build("mail"), targets.build("mail"));
    }

    #[test]
    fn empty_domain_is_rejected() {
        assert!(matches!(
            TargetBuilder::new(""),
            Err(Error::InvalidUrl(_))
        ));
    }

    #[test]
    fn scheme_only_domain_is_rejected() {
        assert!(matches!(
            TargetBuilder::new("https://"),
            Err(Error::InvalidUrl(_))
        ));
        assert!(matches!(
            TargetBuilder::new("https:///"),
            Err(Error::InvalidUrl(_))
        ));
    }
}
