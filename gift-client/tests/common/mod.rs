// gift-client/tests/common/mod.rs
// Mock storefront API and test doubles shared by the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    routing::{get, post},
};
use gift_client::{ApiReply, ClientConfig, ClientError, ClientResult, FailureReporter, HttpClient};
use serde::Serialize;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gift_client=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

// ============================================================================
// Mock Server
// ============================================================================

/// One request as the mock server saw it
#[derive(Debug, Clone)]
pub struct Captured {
    pub auth: Option<String>,
    pub body: Value,
}

pub type Seen = Arc<Mutex<Vec<Captured>>>;

fn bearer(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// Serve `router` on an ephemeral local port and return its base URL
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// A base URL nothing is listening on
pub async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// POST route answering every request with `status`, recording what it got
pub fn post_route(path: &str, status: StatusCode) -> (Router, Seen) {
    let seen: Seen = Arc::default();
    let router = Router::new()
        .route(
            path,
            post(
                move |State(seen): State<Seen>, headers: HeaderMap, Json(body): Json<Value>| async move {
                    seen.lock().unwrap().push(Captured {
                        auth: bearer(&headers),
                        body,
                    });
                    status
                },
            ),
        )
        .with_state(seen.clone());
    (router, seen)
}

/// GET route answering with `status` and a JSON body, recording the auth header
pub fn get_route(path: &str, status: StatusCode, body: Value) -> (Router, Seen) {
    let seen: Seen = Arc::default();
    let router = Router::new()
        .route(
            path,
            get(move |State(seen): State<Seen>, headers: HeaderMap| {
                let body = body.clone();
                async move {
                    seen.lock().unwrap().push(Captured {
                        auth: bearer(&headers),
                        body: Value::Null,
                    });
                    (status, Json(body))
                }
            }),
        )
        .with_state(seen.clone());
    (router, seen)
}

/// GET route that answers after `delay`
pub fn slow_get_route(path: &str, delay: Duration, body: Value) -> Router {
    Router::new().route(
        path,
        get(move || {
            let body = body.clone();
            async move {
                tokio::time::sleep(delay).await;
                Json(body)
            }
        }),
    )
}

pub fn config(base_url: &str) -> ClientConfig {
    ClientConfig::new(base_url)
}

// ============================================================================
// Test Doubles
// ============================================================================

/// Keeps every reported failure
#[derive(Debug, Default)]
pub struct RecordingReporter {
    reports: Mutex<Vec<(&'static str, String)>>,
}

impl RecordingReporter {
    pub fn reports(&self) -> Vec<(&'static str, String)> {
        self.reports.lock().unwrap().clone()
    }
}

impl FailureReporter for RecordingReporter {
    fn report(&self, operation: &'static str, error: &ClientError) {
        self.reports
            .lock()
            .unwrap()
            .push((operation, error.to_string()));
    }
}

/// HTTP client that never touches the network and counts calls
#[derive(Debug, Default)]
pub struct CountingHttp {
    calls: AtomicUsize,
}

impl CountingHttp {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HttpClient for CountingHttp {
    async fn get(&self, _path: &str, _token: Option<&str>) -> ClientResult<ApiReply> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(ApiReply::new(reqwest::StatusCode::OK, r#"{"point":0}"#))
    }

    async fn post<B: Serialize + Sync>(
        &self,
        _path: &str,
        _body: &B,
        _token: Option<&str>,
    ) -> ClientResult<ApiReply> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(ApiReply::new(reqwest::StatusCode::OK, ""))
    }

    fn base_url(&self) -> &str {
        "http://counting.invalid"
    }
}
