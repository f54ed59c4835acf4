//! # API Shared
//!
//! Shared definitions for the site content API.
//!
//! Contains:
//! - Wire types exchanged over HTTP (`wire` module)
//! - Route paths and header names the server and the clients must agree on
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` (server side) and `site-client` (client side).

pub mod health;
pub mod wire;

/// Page content lookup: `GET {PAGE_ROUTE}?slug={slug}`.
pub const PAGE_ROUTE: &str = "/api/v1/site/page";

/// Liveness check.
pub const HEALTH_ROUTE: &str = "/health";

/// Generated OpenAPI document.
pub const OPENAPI_ROUTE: &str = "/api-docs/openapi.json";

/// Header carrying the per-submission idempotency token on state-changing requests.
pub const IDEMPOTENCY_KEY_HEADER: &str = "Idempotency-Key";

pub use health::HealthService;
pub use wire::*;
