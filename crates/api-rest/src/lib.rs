//! # API REST
//!
//! REST API implementation of the site's page content service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI documentation
//! - REST-specific concerns (status mapping, JSON error bodies, CORS, request tracing)
//!
//! Uses `site-core` for content lookup and `api-shared` for wire types.

#![warn(rust_2018_idioms)]

pub mod error;
pub mod pages;

use axum::{response::Json, routing::get, Router};
use site_core::{ContentStore, CoreConfig};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

use api_shared::{ErrorRes, HealthRes, HealthService, HEALTH_ROUTE, OPENAPI_ROUTE, PAGE_ROUTE};

pub use error::ApiError;

/// Application state shared across REST API handlers
#[derive(Clone)]
pub struct AppState {
    store: ContentStore,
}

impl AppState {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self {
            store: ContentStore::new(cfg),
        }
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(health, pages::get_page),
    components(schemas(HealthRes, ErrorRes))
)]
pub struct ApiDoc;

/// Builds the REST router over the given configuration.
///
/// Routes:
/// - `GET /health`
/// - `GET /api/v1/site/page?slug={slug}`
/// - `GET /api-docs/openapi.json`
pub fn router(cfg: Arc<CoreConfig>) -> Router {
    Router::new()
        .route(HEALTH_ROUTE, get(health))
        .route(PAGE_ROUTE, get(pages::get_page))
        .route(OPENAPI_ROUTE, get(openapi))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(AppState::new(cfg))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health() -> Json<HealthRes> {
    Json(HealthService::check_health())
}

/// Serves the generated OpenAPI document.
async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
