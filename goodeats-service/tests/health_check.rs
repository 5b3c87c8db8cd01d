//! End-to-end tests against a server bound on a random port.

mod common;

use axum::http::StatusCode;
use common::{get_json, router_with, TestApp};
use goodeats_service::services::providers::mock::MockTextProvider;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;

#[tokio::test]
async fn health_check_returns_ok() {
    let app = TestApp::spawn(MockTextProvider::replying("hi")).await;
    let client = Client::new();

    let response = client
        .get(format!("{}/health", app.address))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    assert!(response.headers().contains_key("x-request-id"));

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "goodeats-service");
}

#[tokio::test]
async fn readiness_follows_provider_configuration() {
    let (ready, _) = router_with(MockTextProvider::replying("hi"));
    let (status, _) = get_json(&ready, "/ready").await;
    assert_eq!(status, StatusCode::OK);

    let (unready, _) = router_with(MockTextProvider::disabled());
    let (status, _) = get_json(&unready, "/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn caller_request_id_is_echoed() {
    let app = TestApp::spawn(MockTextProvider::replying("hi")).await;

    let response = Client::new()
        .get(format!("{}/list_pending", app.address))
        .header("x-request-id", "req-42")
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.headers()["x-request-id"], "req-42");
}

#[tokio::test]
async fn cors_preflight_allows_any_origin() {
    let app = TestApp::spawn(MockTextProvider::replying("hi")).await;

    let response = Client::new()
        .request(reqwest::Method::OPTIONS, format!("{}/chat", app.address))
        .header("Origin", "http://localhost:3000")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn cors_preflight_echoes_incoming_request_id() {
    let app = TestApp::spawn(MockTextProvider::replying("hi")).await;

    let response = Client::new()
        .request(reqwest::Method::OPTIONS, format!("{}/add_restaurant", app.address))
        .header("Origin", "http://localhost:3000")
        .header("Access-Control-Request-Method", "POST")
        .header("x-request-id", "preflight-42")
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    assert_eq!(response.headers()["x-request-id"], "preflight-42");
}

#[tokio::test]
async fn full_moderation_and_chat_flow_over_http() {
    let app = TestApp::spawn(MockTextProvider::replying("Try Joe's.")).await;
    let client = Client::new();

    let response = client
        .post(format!("{}/add_restaurant", app.address))
        .json(&json!({"name": "Joe's", "cuisine": "Italian", "rating": 5}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let response = client
        .post(format!("{}/approve_restaurant", app.address))
        .json(&json!({"name": "Joe's"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let approved: serde_json::Value = client
        .get(format!("{}/list_restaurants", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        approved,
        json!({"restaurants": [{"name": "Joe's", "cuisine": "Italian", "rating": 5}]})
    );

    let reply: serde_json::Value = client
        .post(format!("{}/chat", app.address))
        .json(&json!({"message": "Where should I eat?"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(reply, json!({"reply": "Try Joe's."}));
}
