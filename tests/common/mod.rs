#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::Value;
use tower::ServiceExt;

use video_backend::app::create_app;
use video_backend::config::settings::AppConfig;
use video_backend::infrastructure::store::{JobStore, MemoryStore, StoreError};
use video_backend::state::AppState;

pub const FALLBACK_URL: &str = "https://samplelib.com/lib/preview/mp4/sample-5s.mp4";

pub fn config_without_credential() -> AppConfig {
    AppConfig::default()
}

pub fn config_with_pika(endpoint: String, timeout: Duration) -> AppConfig {
    AppConfig {
        pika_api_key: Some("test-api-key".to_string()),
        pika_api_url: endpoint,
        pika_timeout: timeout,
        ..AppConfig::default()
    }
}

pub fn build_app(config: AppConfig, store: Arc<dyn JobStore>) -> Router {
    let state = AppState::new(config, store).unwrap();
    create_app(state)
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
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

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

/// A store whose every operation fails, standing in for an unreachable Redis.
pub struct UnavailableStore;

#[async_trait]
impl JobStore for UnavailableStore {
    async fn set(&self, _key: &str, _value: &str, _ttl: Duration) -> Result<(), StoreError> {
        Err(unavailable())
    }

    async fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(unavailable())
    }
}

fn unavailable() -> StoreError {
    StoreError::Redis(redis::RedisError::from((
        redis::ErrorKind::IoError,
        "connection refused",
    )))
}

pub fn memory_store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::new())
}

/// Records every write before delegating to an in-memory store.
#[derive(Default)]
pub struct RecordingStore {
    inner: MemoryStore,
    writes: Mutex<Vec<(String, String, Duration)>>,
}

impl RecordingStore {
    pub fn writes(&self) -> Vec<(String, String, Duration)> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl JobStore for RecordingStore {
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), StoreError> {
        self.writes
            .lock()
            .unwrap()
            .push((key.to_string(), value.to_string(), ttl));
        self.inner.set(key, value, ttl).await
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get(key).await
    }
}
