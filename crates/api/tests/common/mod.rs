//! Shared integration-test harness: stub classifiers, the production
//! middleware stack, and small request/response helpers.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use review_pulse_core::classifier::{ClassifierBackend, ClassifierError};
use review_pulse_core::demo::DEMO_REVIEWS;
use review_pulse_api::config::ServerConfig;
use review_pulse_api::routes;
use review_pulse_api::sessions::SessionStore;
use review_pulse_api::state::{AppState, ReachableClassifier};

/// The fixed per-row scores used by [`demo_scripted_stub`], in demo dataset
/// row order.
pub const DEMO_SCRIPT_SCORES: &[f64] = &[0.1, -0.6, 0.9, -0.8, 0.4];

// ── Stub classifiers ─────────────────────────────────────────────────

/// Deterministic classifier stub: scores are looked up by exact review
/// text (default `0.0`), emotion and aspects are constant.
pub struct StubClassifier {
    scores: HashMap<String, f64>,
    emotion: &'static str,
    reachable: bool,
}

impl StubClassifier {
    pub fn new(emotion: &'static str) -> Self {
        Self {
            scores: HashMap::new(),
            emotion,
            reachable: true,
        }
    }

    pub fn with_score(mut self, text: impl Into<String>, score: f64) -> Self {
        self.scores.insert(text.into(), score);
        self
    }

    pub fn unreachable(mut self) -> Self {
        self.reachable = false;
        self
    }
}

impl ClassifierBackend for StubClassifier {
    fn score_sentiment(&self, text: &str) -> Result<f64, ClassifierError> {
        Ok(self.scores.get(text).copied().unwrap_or(0.0))
    }

    fn classify_emotion(&self, _text: &str) -> Result<String, ClassifierError> {
        Ok(self.emotion.to_string())
    }

    fn extract_aspects(&self, _text: &str) -> Result<String, ClassifierError> {
        Ok("General".to_string())
    }
}

impl ReachableClassifier for StubClassifier {
    fn is_reachable(&self) -> bool {
        self.reachable
    }
}

/// Every capability fails on every call.
pub struct FailingClassifier;

impl ClassifierBackend for FailingClassifier {
    fn score_sentiment(&self, _text: &str) -> Result<f64, ClassifierError> {
        Err(ClassifierError::new("sidecar down"))
    }

    fn classify_emotion(&self, _text: &str) -> Result<String, ClassifierError> {
        Err(ClassifierError::new("sidecar down"))
    }

    fn extract_aspects(&self, _text: &str) -> Result<String, ClassifierError> {
        Err(ClassifierError::new("sidecar down"))
    }
}

impl ReachableClassifier for FailingClassifier {
    fn is_reachable(&self) -> bool {
        false
    }
}

/// A stub scoring the demo dataset's five rows with [`DEMO_SCRIPT_SCORES`].
pub fn demo_scripted_stub() -> StubClassifier {
    let mut stub = StubClassifier::new("joy");
    for ((text, _rating), score) in DEMO_REVIEWS.iter().zip(DEMO_SCRIPT_SCORES) {
        stub = stub.with_score(*text, *score);
    }
    stub
}

// ── App construction ─────────────────────────────────────────────────

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        max_upload_bytes: 10 * 1024 * 1024,
        classifier_url: "http://127.0.0.1:8000".to_string(),
        classifier_timeout_secs: 15,
    }
}

/// Build the full application router with all middleware layers, using the
/// given classifier stub.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(classifier: Arc<dyn ReachableClassifier>) -> Router {
    let config = test_config();

    let state = AppState {
        config: Arc::new(config),
        classifier,
        sessions: Arc::new(SessionStore::new()),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

// ── Request helpers ──────────────────────────────────────────────────

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    app.oneshot(request).await.expect("request should not fail")
}

pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    app.oneshot(request).await.expect("request should not fail")
}

/// Build a multipart/form-data request with a single file field.
pub fn multipart_csv_request(uri: &str, field_name: &str, filename: &str, csv: &str) -> Request<Body> {
    let boundary = "review-pulse-test-boundary";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"{field_name}\"; filename=\"{filename}\"\r\n\
         Content-Type: text/csv\r\n\r\n\
         {csv}\r\n\
         --{boundary}--\r\n"
    );

    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .expect("request should build")
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}
