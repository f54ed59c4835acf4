//! Resolution against the real REST router served on an ephemeral port.

use serde_json::json;
use site_client::{ClientConfig, ContentClient, ContentSource, ResolvedContent};
use site_core::CoreConfig;
use std::fs;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

const HOME: &str = r#"{"sections":[{"sectionId":"hero","component":"Hero","props":{}}]}"#;

struct TestServer {
    base_url: String,
    // Keeps the content directory alive for the server's lifetime.
    _content: TempDir,
}

async fn serve(content: TempDir) -> TestServer {
    let cfg = Arc::new(CoreConfig::new(content.path().to_path_buf()).unwrap());
    let app = api_rest::router(cfg);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestServer {
        base_url: format!("http://{}", addr),
        _content: content,
    }
}

fn content_with_home() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("home.json"), HOME).unwrap();
    temp
}

fn client(server: &TestServer) -> ContentClient {
    let cfg = ClientConfig::new(&server.base_url)
        .unwrap()
        .with_timeout(Duration::from_secs(2));
    ContentClient::new(&cfg).unwrap()
}

#[tokio::test]
async fn home_resolves_from_master() {
    let server = serve(content_with_home()).await;

    let resolved = client(&server).resolve("home").await;

    assert_eq!(resolved.source, ContentSource::Master);
    assert_eq!(
        serde_json::to_value(&resolved).unwrap(),
        json!({
            "slug": "home",
            "sections": [{"sectionId": "hero", "component": "Hero", "props": {}}],
            "source": "master"
        })
    );
}

#[tokio::test]
async fn missing_page_falls_back_to_legacy() {
    let server = serve(content_with_home()).await;

    let resolved = client(&server).resolve("missing-page").await;

    assert_eq!(resolved, ResolvedContent::legacy("missing-page"));
}

#[tokio::test]
async fn malformed_document_falls_back_to_legacy() {
    let content = content_with_home();
    fs::write(content.path().join("broken.json"), "{\"sections\": [").unwrap();
    let server = serve(content).await;

    let resolved = client(&server).resolve("broken").await;

    assert_eq!(resolved, ResolvedContent::legacy("broken"));
}

#[tokio::test]
async fn empty_slug_falls_back_to_legacy() {
    let server = serve(content_with_home()).await;

    let resolved = client(&server).resolve("").await;

    assert_eq!(resolved, ResolvedContent::legacy(""));
}

#[tokio::test]
async fn concurrent_resolutions_are_independent() {
    let content = content_with_home();
    fs::write(
        content.path().join("pricing.json"),
        r#"{"sections":[{"sectionId":"plans","component":"PricingTable","props":{"tiers":3}}]}"#,
    )
    .unwrap();
    let server = serve(content).await;
    let client = client(&server);

    let (home, pricing, missing) = tokio::join!(
        client.resolve("home"),
        client.resolve("pricing"),
        client.resolve("nowhere"),
    );

    assert!(home.is_master());
    assert_eq!(pricing.sections[0].props, json!({"tiers": 3}));
    assert_eq!(missing.source, ContentSource::Legacy);
}

#[tokio::test]
async fn edits_are_visible_without_restart() {
    let content = content_with_home();
    let home_path = content.path().join("home.json");
    let server = serve(content).await;
    let client = client(&server);

    assert_eq!(client.resolve("home").await.sections.len(), 1);

    fs::write(&home_path, r#"{"sections":[]}"#).unwrap();

    let resolved = client.resolve("home").await;
    assert!(resolved.is_master());
    assert!(resolved.sections.is_empty());
}
