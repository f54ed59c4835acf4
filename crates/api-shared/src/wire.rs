//! Wire types for the site content API.
//!
//! Field names are part of the HTTP contract; change them only together with every client.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Body of `400` responses when the `slug` query parameter is absent or empty.
pub const MISSING_SLUG_MESSAGE: &str = "Slug parameter is required";

/// Body of `404` responses when no document exists for the slug.
pub const PAGE_NOT_FOUND_MESSAGE: &str = "Page not found";

/// Body of `500` responses. Never carries internal detail.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Minimal error body returned by every failing API route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub error: String,
}

impl ErrorRes {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Query string of the page content route.
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Page identifier; maps to `{slug}.json` in the content store.
    pub slug: Option<String>,
}
