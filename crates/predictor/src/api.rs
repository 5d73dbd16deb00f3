//! HTTP API for predictions, feedback, accuracy metrics and health checks
//!
//! Endpoint contract consumed by the task-manager backend:
//! `GET /` liveness banner, `POST /predict`, `POST /feedback`,
//! `GET /metrics` (model accuracy JSON). Health probes and the
//! Prometheus exposition live next to it on `/healthz`, `/readyz` and
//! `/metrics/prometheus`.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use predictor_lib::{
    health::{ComponentStatus, HealthRegistry},
    model::ModelManager,
    models::TaskFeatures,
    observability::PredictorMetrics,
};
use prometheus::{Encoder, TextEncoder};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tracing::info;

/// Fixed banner reported by the root endpoint
const SERVICE_BANNER: &str = "AI Service Running";

/// Fixed explanation attached to every prediction
const PREDICTION_REASON: &str = "Based on category and complexity";

/// Reported prediction confidence once the model is trained
const TRAINED_CONFIDENCE: f64 = 0.85;

/// Reported prediction confidence under the cold-start heuristic
const COLD_START_CONFIDENCE: f64 = 0.5;

/// Shared application state
///
/// The model manager sits behind one `RwLock`: predictions take the
/// read lock, feedback and training hold the write lock across the
/// whole read-modify-write, so the running-mean invariant cannot be
/// corrupted by concurrent requests.
#[derive(Clone)]
pub struct AppState {
    pub manager: Arc<RwLock<ModelManager>>,
    pub health_registry: HealthRegistry,
    pub metrics: PredictorMetrics,
}

impl AppState {
    pub fn new(
        manager: Arc<RwLock<ModelManager>>,
        health_registry: HealthRegistry,
        metrics: PredictorMetrics,
    ) -> Self {
        Self {
            manager,
            health_registry,
            metrics,
        }
    }
}

#[derive(Debug, Serialize)]
struct BannerResponse {
    status: &'static str,
}

/// Prediction returned for a submitted task
#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub predicted_duration: u32,
    pub priority_score: u8,
    pub confidence: f64,
    pub reason: &'static str,
}

/// Feedback pairing a completed task's actual duration with its prediction
#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub actual_duration: i64,
    pub predicted_duration: i64,
}

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub status: &'static str,
    pub new_mae: f64,
}

/// Liveness banner - confirms the service is up
async fn root() -> impl IntoResponse {
    Json(BannerResponse {
        status: SERVICE_BANNER,
    })
}

/// Predict duration and priority score for a task
async fn predict(
    State(state): State<Arc<AppState>>,
    Json(task): Json<TaskFeatures>,
) -> impl IntoResponse {
    let started = Instant::now();

    let manager = state.manager.read().await;
    let predicted_duration = manager.predict_duration(&task);
    let priority_score = manager.priority_score(&task);
    let is_trained = manager.is_trained();
    drop(manager);

    let confidence = if is_trained {
        TRAINED_CONFIDENCE
    } else {
        COLD_START_CONFIDENCE
    };

    state.metrics.inc_predictions();
    state
        .metrics
        .observe_prediction_latency(started.elapsed().as_secs_f64());

    info!(
        event = "prediction_generated",
        category = %task.category,
        subtask_count = task.subtask_count,
        predicted_duration = predicted_duration,
        priority_score = priority_score,
        confidence = confidence,
        "Generated task prediction"
    );

    Json(PredictionResponse {
        predicted_duration,
        priority_score,
        confidence,
        reason: PREDICTION_REASON,
    })
}

/// Fold an actual-vs-predicted pair into the running accuracy metric
async fn submit_feedback(
    State(state): State<Arc<AppState>>,
    Json(feedback): Json<FeedbackRequest>,
) -> impl IntoResponse {
    let (new_mae, snapshot) = {
        let mut manager = state.manager.write().await;
        let new_mae =
            manager.update_metrics(feedback.actual_duration, feedback.predicted_duration);
        (new_mae, manager.metrics())
    };

    state.metrics.inc_feedback();
    state
        .metrics
        .set_accuracy(snapshot.mae, snapshot.tasks_processed as i64);

    info!(
        event = "feedback_recorded",
        actual_duration = feedback.actual_duration,
        predicted_duration = feedback.predicted_duration,
        new_mae = new_mae,
        tasks_processed = snapshot.tasks_processed,
        "Recorded prediction feedback"
    );

    Json(FeedbackResponse {
        status: "success",
        new_mae,
    })
}

/// Model accuracy snapshot (JSON contract, not the Prometheus exposition)
async fn model_metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let manager = state.manager.read().await;
    Json(manager.metrics())
}

/// Health check response - returns 200 if healthy, 503 if degraded/unhealthy
async fn healthz(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let health = state.health_registry.health().await;

    let status_code = match health.status {
        ComponentStatus::Healthy => StatusCode::OK,
        ComponentStatus::Degraded => StatusCode::OK, // Still operational
        ComponentStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(health))
}

/// Readiness check response - returns 200 if ready, 503 if not ready
async fn readyz(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let readiness = state.health_registry.readiness().await;

    let status_code = if readiness.ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(readiness))
}

/// Prometheus metrics endpoint
///
/// Lives under `/metrics/prometheus` because `/metrics` is owned by the
/// model-accuracy JSON contract.
async fn prometheus_metrics() -> impl IntoResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();

    encoder.encode(&metric_families, &mut buffer).unwrap();

    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        buffer,
    )
}

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/predict", post(predict))
        .route("/feedback", post(submit_feedback))
        .route("/metrics", get(model_metrics))
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/metrics/prometheus", get(prometheus_metrics))
        .with_state(state)
}

/// Start the API server
pub async fn serve(port: u16, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = create_router(state);

    let addr = format!("0.0.0.0:{}", port);
    info!(addr = %addr, "Starting API server");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
