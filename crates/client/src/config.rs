//! Client configuration.
//!
//! Resolved once by the caller (typically from `SITE_API_URL` at startup) and handed to the
//! clients; nothing in this crate reads the process environment.

use crate::{ClientError, ClientResult};
use std::time::Duration;
use url::{ParseError, Url};

/// Default per-request timeout, covering connect through to the end of the body.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where the site content API lives and how long to wait for it.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    base_url: Url,
    timeout: Duration,
}

impl ClientConfig {
    /// Create a new `ClientConfig` with the default timeout.
    ///
    /// `base_url` may carry a path prefix (for example `https://example.com/site`); API routes
    /// are appended to it.
    ///
    /// # Errors
    /// Returns [`ClientError::InvalidUrl`] if `base_url` does not parse, is not `http(s)`, or
    /// carries a query or fragment.
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let input = base_url.trim();
        let mut base_url = parse_http_url(input)?;
        if base_url.query().is_some() || base_url.fragment().is_some() {
            return Err(ClientError::InvalidUrl(format!(
                "base URL must not carry a query or fragment: {}",
                input
            )));
        }
        // Routes are joined onto the base, so its path must end in a slash to be kept.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Replaces the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Resolves `endpoint` against the base URL.
    ///
    /// Absolute URLs are returned unchanged and must be `http(s)`. Anything else is treated as a
    /// route (optionally with its own query) and appended to the base URL, keeping any path
    /// prefix.
    ///
    /// # Errors
    /// Returns [`ClientError::InvalidUrl`] if the result is not a valid `http(s)` URL.
    pub fn endpoint(&self, endpoint: &str) -> ClientResult<Url> {
        let endpoint = endpoint.trim();
        match Url::parse(endpoint) {
            Ok(_) => parse_http_url(endpoint),
            Err(ParseError::RelativeUrlWithoutBase) => {
                let route = endpoint.trim_start_matches('/');
                let url = self
                    .base_url
                    .join(route)
                    .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", endpoint, e)))?;
                parse_http_url(url.as_str())
            }
            Err(e) => Err(ClientError::InvalidUrl(format!("{}: {}", endpoint, e))),
        }
    }
}

fn parse_http_url(input: &str) -> ClientResult<Url> {
    let url = Url::parse(input).map_err(|e| ClientError::InvalidUrl(format!("{}: {}", input, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ClientError::InvalidUrl(format!(
            "unsupported scheme '{}' in {}",
            other, input
        ))),
    }
}
