//! Mapping of content lookup failures onto HTTP responses.
//!
//! Internal failures are logged here and answered with a fixed message; the caller never sees
//! paths, I/O errors or parser output.

use api_shared::{ErrorRes, INTERNAL_ERROR_MESSAGE, MISSING_SLUG_MESSAGE, PAGE_NOT_FOUND_MESSAGE};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use site_core::ContentError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("slug parameter is missing")]
    MissingParameter,
    #[error("page not found")]
    NotFound,
    #[error("internal error")]
    InternalError,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingParameter => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingParameter => MISSING_SLUG_MESSAGE,
            Self::NotFound => PAGE_NOT_FOUND_MESSAGE,
            Self::InternalError => INTERNAL_ERROR_MESSAGE,
        }
    }
}

impl From<ContentError> for ApiError {
    fn from(e: ContentError) -> Self {
        match e {
            ContentError::MissingSlug => Self::MissingParameter,
            // No document can exist under a slug that fails validation.
            ContentError::InvalidSlug(reason) => {
                tracing::debug!("rejected slug: {}", reason);
                Self::NotFound
            }
            ContentError::NotFound(_) => Self::NotFound,
            e if e.is_read_error() => {
                tracing::error!("Read page error: {:?}", e);
                Self::InternalError
            }
            e => {
                tracing::error!("Content store error: {:?}", e);
                Self::InternalError
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorRes::new(self.message()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_content_errors_map_to_kinds() {
        assert!(matches!(
            ApiError::from(ContentError::MissingSlug),
            ApiError::MissingParameter
        ));
        assert!(matches!(
            ApiError::from(ContentError::NotFound("home".into())),
            ApiError::NotFound
        ));
        assert!(matches!(
            ApiError::from(ContentError::InvalidSlug("../x".into())),
            ApiError::NotFound
        ));
        assert!(matches!(
            ApiError::from(ContentError::Read {
                path: PathBuf::from("/secret/home.json"),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            }),
            ApiError::InternalError
        ));
        assert!(matches!(
            ApiError::from(ContentError::InvalidConfig("content root is empty".into())),
            ApiError::InternalError
        ));
    }

    #[test]
    fn test_statuses() {
        assert_eq!(ApiError::MissingParameter.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::InternalError.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
