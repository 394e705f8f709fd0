//! Contract Test: GET /api/pings

use crate::support::pingboard::{spawn_with_file, StubProber};
use pingboard::common::types::{PingRecord, ProbeStatus};
use reqwest::{Client, StatusCode};
use serde_json::json;

#[tokio::test]
async fn list_on_fresh_environment_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("pings.json");
    let server = spawn_with_file(&path, StubProber::returning(ProbeStatus::Code(200))).await;

    let res = Client::new()
        .get(format!("{}/api/pings", server.base_url()))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<serde_json::Value>().await.unwrap(), json!([]));
    assert!(!path.exists());
    server.stop().await;
}

#[tokio::test]
async fn created_record_is_listed_first() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pings.json");
    let server = spawn_with_file(&path, StubProber::returning(ProbeStatus::Code(200))).await;
    let client = Client::new();
    let url = format!("{}/api/pings", server.base_url());

    let mut created = Vec::new();
    for target in ["http://one.example", "http://two.example", "http://three.example"] {
        let record: PingRecord = client
            .post(&url)
            .json(&json!({ "url": target }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        created.push(record);
    }

    let list: Vec<PingRecord> = client.get(&url).send().await.unwrap().json().await.unwrap();
    created.reverse();
    assert_eq!(list, created);
    server.stop().await;
}

#[tokio::test]
async fn history_file_matches_listing_and_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pings.json");
    let client = Client::new();

    let server = spawn_with_file(&path, StubProber::returning(ProbeStatus::Unreachable)).await;
    let created: PingRecord = client
        .post(format!("{}/api/pings", server.base_url()))
        .json(&json!({ "url": "http://down.example" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    server.stop().await;

    let on_disk: Vec<PingRecord> =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk, vec![created.clone()]);

    let server = spawn_with_file(&path, StubProber::returning(ProbeStatus::Code(200))).await;
    let list: Vec<PingRecord> = client
        .get(format!("{}/api/pings", server.base_url()))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list, vec![created]);
    server.stop().await;
}

#[tokio::test]
async fn corrupt_history_file_is_server_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pings.json");
    std::fs::write(&path, "[{\"url\":").unwrap();
    let server = spawn_with_file(&path, StubProber::returning(ProbeStatus::Code(200))).await;

    let res = Client::new()
        .get(format!("{}/api/pings", server.base_url()))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Storage error" }));
    server.stop().await;
}
