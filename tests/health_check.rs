//! Integration tests for the status and health endpoints.

mod common;

use common::TestApp;
use reqwest::Client;

#[tokio::test]
async fn root_status_returns_ok() {
    let app = TestApp::spawn_default().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/", app.address))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "Crack Bank API is running");
}

#[tokio::test]
async fn health_check_reports_dataset_size() {
    let app = TestApp::spawn_default().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "breach-service");
    assert_eq!(body["dataset_entries"], 2);
}
