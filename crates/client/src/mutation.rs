//! Idempotent form submissions.
//!
//! [`MutationClient::submit`] sends one logical submission as a JSON `POST` carrying a freshly
//! generated `Idempotency-Key` header. The client never retries; the key exists so that if a
//! lower layer (proxy, load balancer, HTTP stack) re-delivers the same request, the receiver can
//! apply it once.
//!
//! Unlike page resolution, nothing is absorbed here: a failed submission must be shown to the
//! user, so every failure is returned as a [`MutationError`].

use api_shared::IDEMPOTENCY_KEY_HEADER;
use serde::{de::DeserializeOwned, Serialize};

use crate::{ClientConfig, ClientError, ClientResult, IdempotencyKey, MutationError, MutationResult};

/// Sends state-changing requests, one idempotency key per call.
#[derive(Clone, Debug)]
pub struct MutationClient {
    http: reqwest::Client,
    cfg: ClientConfig,
}

impl MutationClient {
    /// Creates a client; relative endpoints are resolved against the configured base URL.
    ///
    /// # Errors
    /// Returns [`ClientError::Build`] if the HTTP client cannot be initialised.
    pub fn new(cfg: &ClientConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(cfg.timeout())
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self {
            http,
            cfg: cfg.clone(),
        })
    }

    /// Submits `payload` to `endpoint` exactly once.
    ///
    /// `endpoint` is either an absolute `http(s)` URL or a route relative to the configured base
    /// URL.
    ///
    /// # Returns
    /// The decoded response body on a `2xx` response.
    ///
    /// # Errors
    /// - [`MutationError::InvalidEndpoint`] if `endpoint` does not resolve to an `http(s)` URL.
    /// - [`MutationError::Transport`] if no response was received.
    /// - [`MutationError::Failed`] carrying the status if the response is not `2xx`.
    /// - [`MutationError::Decode`] if a `2xx` body cannot be decoded as `R`.
    pub async fn submit<P, R>(&self, endpoint: &str, payload: &P) -> MutationResult<R>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.cfg.endpoint(endpoint)?;
        let key = IdempotencyKey::new();

        tracing::debug!("submitting mutation to {}", url);

        let response = self
            .http
            .post(url)
            .header(IDEMPOTENCY_KEY_HEADER, key.to_string())
            .json(payload)
            .send()
            .await
            .map_err(MutationError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("mutation to {} failed with status {}", endpoint, status);
            return Err(MutationError::Failed { status });
        }

        response.json::<R>().await.map_err(MutationError::Decode)
    }
}
