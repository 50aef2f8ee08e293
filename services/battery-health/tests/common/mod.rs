//! Stub prediction service for integration tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

pub const HEALTHY_BODY: &str = r#"{
    "status": "Healthy ✅",
    "prediction": 0,
    "confidence": 91.4,
    "probabilities": {"healthy": 91.4, "weak": 6.1, "failed": 2.5},
    "risk_factors": [],
    "recommendations": ["Battery is in good condition", "Regular maintenance recommended"]
}"#;

pub const FAILED_BODY: &str = r#"{
    "status": "Failed 🔋",
    "prediction": 2,
    "confidence": 88.0,
    "probabilities": {"healthy": 2.0, "weak": 10.0, "failed": 88.0},
    "risk_factors": ["Low voltage", "High internal resistance", "Battery age over 3 years"],
    "recommendations": ["Replace battery immediately", "Check charging system"]
}"#;

pub const HEALTH_BODY: &str =
    r#"{"status": "healthy", "service": "battery-health-api", "version": "2.0.0", "model_loaded": true}"#;

#[derive(Clone)]
pub struct StubBehaviour {
    pub predict_status: StatusCode,
    pub predict_body: &'static str,
    pub predict_delay: Duration,
    pub health_status: StatusCode,
}

impl Default for StubBehaviour {
    fn default() -> Self {
        Self {
            predict_status: StatusCode::OK,
            predict_body: HEALTHY_BODY,
            predict_delay: Duration::ZERO,
            health_status: StatusCode::OK,
        }
    }
}

#[derive(Clone)]
struct StubState {
    behaviour: StubBehaviour,
    requests: Arc<Mutex<Vec<serde_json::Value>>>,
}

pub struct StubServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<serde_json::Value>>>,
}

impl StubServer {
    /// Bodies received on the prediction endpoint, in arrival order
    pub fn requests(&self) -> Vec<serde_json::Value> {
        self.requests.lock().unwrap().clone()
    }
}

async fn predict(
    State(state): State<StubState>,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    state.requests.lock().unwrap().push(body);
    tokio::time::sleep(state.behaviour.predict_delay).await;
    (
        state.behaviour.predict_status,
        [(header::CONTENT_TYPE, "application/json")],
        state.behaviour.predict_body,
    )
}

async fn health(State(state): State<StubState>) -> impl IntoResponse {
    (
        state.behaviour.health_status,
        [(header::CONTENT_TYPE, "application/json")],
        HEALTH_BODY,
    )
}

/// Serve the stub on an ephemeral localhost port
pub async fn start(behaviour: StubBehaviour) -> StubServer {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        behaviour,
        requests: Arc::clone(&requests),
    };
    let router = Router::new()
        .route("/api/predict", post(predict))
        .route("/api/health", get(health))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });

    StubServer {
        base_url: format!("http://{}", addr),
        requests,
    }
}
