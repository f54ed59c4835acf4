//! Page content endpoint.
//!
//! A pure lookup-and-translate layer over [`site_core::ContentStore`]: no caching, no mutation,
//! no interpretation of the stored document.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use site_core::PageSlug;

use crate::{ApiError, AppState};
use api_shared::PageQuery;

#[utoipa::path(
    get,
    path = "/api/v1/site/page",
    params(PageQuery),
    responses(
        (status = 200, description = "Stored page document, unmodified"),
        (status = 400, description = "Slug parameter is required", body = api_shared::ErrorRes),
        (status = 404, description = "Page not found", body = api_shared::ErrorRes),
        (status = 500, description = "Internal server error", body = api_shared::ErrorRes)
    )
)]
/// Fetch the content document of one page
///
/// Looks up `{slug}.json` in the content store and returns it byte for byte.
///
/// # Errors
/// - `400 Bad Request` if the `slug` query parameter is absent, empty or unparseable.
/// - `404 Not Found` if no document exists for the slug.
/// - `500 Internal Server Error` if the document cannot be read or is not valid JSON.
#[axum::debug_handler]
pub async fn get_page(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query.map_err(|e| {
        tracing::debug!("invalid page query: {}", e);
        ApiError::MissingParameter
    })?;

    let slug = PageSlug::parse(query.slug.unwrap_or_default())?;
    let document = state.store().read(&slug)?;

    Ok((
        [(header::CONTENT_TYPE, "application/json")],
        document.into_raw(),
    )
        .into_response())
}
