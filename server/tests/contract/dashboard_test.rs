//! Contract Test: dashboard assets and unknown routes

use crate::support::pingboard::{spawn_in_memory, StubProber};
use pingboard::common::types::ProbeStatus;
use reqwest::{header, Client, StatusCode};

#[tokio::test]
async fn root_serves_dashboard_page() {
    let server = spawn_in_memory(StubProber::returning(ProbeStatus::Code(200))).await;

    let res = Client::new()
        .get(format!("{}/", server.base_url()))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let content_type = res.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));
    let html = res.text().await.unwrap();
    assert!(html.contains("<script src=\"/app.js\">"));
    server.stop().await;
}

#[tokio::test]
async fn unknown_routes_are_not_found() {
    let server = spawn_in_memory(StubProber::returning(ProbeStatus::Code(200))).await;
    let client = Client::new();

    for path in ["/api/ping", "/api/pings/1", "/missing.js"] {
        let res = client
            .get(format!("{}{}", server.base_url(), path))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "path: {path}");
    }
    server.stop().await;
}
