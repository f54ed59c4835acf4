use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use site_core::{config::content_dir_from_env_value, CoreConfig};

/// Main entry point for the site content API
///
/// Resolves configuration once, then serves the REST API:
/// - `GET /api/v1/site/page?slug={slug}`
/// - `GET /health`
/// - `GET /api-docs/openapi.json`
///
/// # Environment Variables
/// - `SITE_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `SITE_CONTENT_DIR`: Directory holding `{slug}.json` page documents (default: "content/pages")
/// - `RUST_LOG`: Log filter (defaults: `site_run` and `api_rest` at info, `tower_http` at debug)
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the server address is invalid or cannot be bound,
/// - the content directory does not exist, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("site_run=info".parse()?)
                .add_directive("api_rest=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr: SocketAddr = std::env::var("SITE_REST_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:3000".into())
        .parse()?;

    let content_dir = content_dir_from_env_value(std::env::var("SITE_CONTENT_DIR").ok());
    if !content_dir.is_dir() {
        anyhow::bail!(
            "Content directory does not exist: {}",
            content_dir.display()
        );
    }

    let cfg = Arc::new(CoreConfig::new(content_dir)?);

    tracing::info!("++ Serving pages from {}", cfg.content_dir().display());
    tracing::info!("++ Starting site content API on {}", rest_addr);

    let app = api_rest::router(cfg);
    let listener = tokio::net::TcpListener::bind(rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
