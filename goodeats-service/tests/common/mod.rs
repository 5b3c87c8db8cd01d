#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use goodeats_service::config::{ChatConfig, GoodeatsConfig, GoogleConfig, ModelConfig};
use goodeats_service::services::providers::mock::MockTextProvider;
use goodeats_service::services::TextProvider;
use goodeats_service::startup::{build_router, AppState, Application};
use secrecy::Secret;
use serde_json::Value;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;
use tower::ServiceExt;

pub const TEST_SYSTEM_PROMPT: &str = "You are a test assistant for GoodEats.";

pub fn test_config() -> GoodeatsConfig {
    GoodeatsConfig {
        common: CoreConfig {
            port: 0,
            log_level: "debug".to_string(),
        },
        google: GoogleConfig {
            api_key: Secret::new("test-api-key".to_string()),
        },
        models: ModelConfig {
            text_model: "gemini-1.5-flash".to_string(),
            api_base: "http://127.0.0.1:9".to_string(),
            request_timeout_secs: 5,
        },
        chat: ChatConfig::new(TEST_SYSTEM_PROMPT, 200),
        otlp_endpoint: None,
    }
}

/// Router wired to the given mock provider, plus the provider for assertions.
pub fn router_with(provider: MockTextProvider) -> (Router, Arc<MockTextProvider>) {
    let provider = Arc::new(provider);
    let text_provider: Arc<dyn TextProvider> = provider.clone();
    let state = AppState::new(ChatConfig::new(TEST_SYSTEM_PROMPT, 200), text_provider);
    (build_router(state), provider)
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Router failed to respond");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Response body is not JSON")
    };

    (status, body)
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    /// Bind the real application on a random port with a mock provider.
    pub async fn spawn(provider: MockTextProvider) -> Self {
        let app = Application::build_with_provider(test_config(), Arc::new(provider))
            .await
            .expect("Failed to build test application");

        let port = app.http_port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address, port }
    }
}
