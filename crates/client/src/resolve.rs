//! Page content resolution.
//!
//! [`ContentClient::resolve`] is a graceful-degradation boundary, not a retry boundary. It makes
//! exactly one attempt against the page content API and turns every failure (connect error,
//! timeout, non-success status, unparseable body) into [`ContentSource::Legacy`]. The legacy
//! result is a signal for the caller to render its own fallback path; no second fetch happens
//! here.

use api_shared::PAGE_ROUTE;
use reqwest::{StatusCode, Url};
use site_core::{ContentSource, PageBody, ResolvedContent, Section};

use crate::{ClientConfig, ClientError, ClientResult};

/// Why master content could not be used. Only ever logged.
#[derive(Debug, thiserror::Error)]
enum FetchFailure {
    #[error("request failed: {0}")]
    Transport(reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error("failed to read body: {0}")]
    Body(reqwest::Error),
    #[error("unparseable body: {0}")]
    Parse(serde_json::Error),
}

/// Resolves page slugs against the page content API.
#[derive(Clone, Debug)]
pub struct ContentClient {
    http: reqwest::Client,
    page_url: Url,
}

impl ContentClient {
    /// Creates a client for the API at the configured base URL.
    ///
    /// # Errors
    /// Returns [`ClientError::Build`] if the HTTP client cannot be initialised, or
    /// [`ClientError::InvalidUrl`] if the page route cannot be joined onto the base URL.
    pub fn new(cfg: &ClientConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(cfg.timeout())
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self {
            http,
            page_url: cfg.endpoint(PAGE_ROUTE)?,
        })
    }

    /// Resolves `slug` to its content, never failing.
    ///
    /// # Returns
    /// - `source = master` with the document's sections (empty when the document has none) if
    ///   the API answered with a success status and a parseable body.
    /// - `source = legacy` with no sections otherwise.
    pub async fn resolve(&self, slug: &str) -> ResolvedContent {
        match self.fetch_sections(slug).await {
            Ok(sections) => {
                tracing::info!(
                    slug,
                    source = %ContentSource::Master,
                    sections = sections.len(),
                    "resolved page content"
                );
                ResolvedContent::master(slug, sections)
            }
            Err(reason) => {
                tracing::warn!(
                    slug,
                    source = %ContentSource::Legacy,
                    %reason,
                    "resolved page content"
                );
                ResolvedContent::legacy(slug)
            }
        }
    }

    async fn fetch_sections(&self, slug: &str) -> Result<Vec<Section>, FetchFailure> {
        let response = self
            .http
            .get(self.page_url.clone())
            .query(&[("slug", slug)])
            .send()
            .await
            .map_err(FetchFailure::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchFailure::Status(status));
        }

        let body = response.bytes().await.map_err(FetchFailure::Body)?;
        let page = PageBody::from_slice(&body).map_err(FetchFailure::Parse)?;
        Ok(page.sections)
    }
}
