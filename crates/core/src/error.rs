#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("slug is required")]
    MissingSlug,
    #[error("invalid slug: {0}")]
    InvalidSlug(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("page not found: {0}")]
    NotFound(String),
    #[error("failed to read page document {path}: {source}", path = path.display())]
    Read {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("page document {path} is not valid JSON: {source}", path = path.display())]
    Malformed {
        path: std::path::PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ContentError {
    /// Returns true for failures of the storage medium or the stored document itself.
    ///
    /// These are the store's read errors, as opposed to lookups that simply found nothing.
    pub fn is_read_error(&self) -> bool {
        matches!(self, Self::Read { .. } | Self::Malformed { .. })
    }
}

pub type ContentResult<T> = std::result::Result<T, ContentError>;
