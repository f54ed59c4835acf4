use reqwest::StatusCode;

/// Errors constructing a client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("failed to build HTTP client: {0}")]
    Build(reqwest::Error),
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// Errors from an idempotent submission.
///
/// Every variant means the caller must treat the submission as not having succeeded.
#[derive(Debug, thiserror::Error)]
pub enum MutationError {
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(#[from] ClientError),
    /// The endpoint answered with a non-success status.
    #[error("mutation failed with status {status}")]
    Failed { status: StatusCode },
    /// No response was received (connect failure, timeout, reset).
    #[error("mutation request failed: {0}")]
    Transport(#[source] reqwest::Error),
    /// The endpoint answered with success but the body could not be decoded.
    #[error("failed to decode mutation response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl MutationError {
    /// The response status, when the endpoint answered.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Failed { status } => Some(*status),
            _ => None,
        }
    }
}

pub type MutationResult<T> = std::result::Result<T, MutationError>;
