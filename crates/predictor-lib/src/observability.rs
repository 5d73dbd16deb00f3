//! Observability infrastructure for the prediction service
//!
//! Provides Prometheus metrics for prediction traffic, model accuracy,
//! and model state. Structured JSON logging is configured by the
//! service binary via tracing-subscriber; modules emit their own events.

use prometheus::{
    register_gauge, register_gauge_vec, register_histogram, register_int_counter,
    register_int_gauge, Gauge, GaugeVec, Histogram, IntCounter, IntGauge,
};
use std::sync::OnceLock;

/// Default histogram buckets for latency measurements (in seconds)
const LATENCY_BUCKETS: &[f64] = &[
    0.0001, 0.0005, 0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0,
];

/// Global metrics instance (registered once)
static GLOBAL_METRICS: OnceLock<PredictorMetricsInner> = OnceLock::new();

/// Inner metrics structure that holds the actual Prometheus metrics
struct PredictorMetricsInner {
    prediction_latency_seconds: Histogram,
    predictions_total: IntCounter,
    feedback_total: IntCounter,
    model_mae_minutes: Gauge,
    tasks_processed: IntGauge,
    model_trained: IntGauge,
    model_mode_info: GaugeVec,
}

impl PredictorMetricsInner {
    fn new() -> Self {
        Self {
            prediction_latency_seconds: register_histogram!(
                "task_predictor_prediction_latency_seconds",
                "Time spent computing a duration and priority prediction",
                LATENCY_BUCKETS.to_vec()
            )
            .expect("Failed to register prediction_latency_seconds"),

            predictions_total: register_int_counter!(
                "task_predictor_predictions_total",
                "Total number of predictions served"
            )
            .expect("Failed to register predictions_total"),

            feedback_total: register_int_counter!(
                "task_predictor_feedback_total",
                "Total number of feedback submissions received"
            )
            .expect("Failed to register feedback_total"),

            model_mae_minutes: register_gauge!(
                "task_predictor_model_mae_minutes",
                "Current mean absolute error of duration predictions in minutes"
            )
            .expect("Failed to register model_mae_minutes"),

            tasks_processed: register_int_gauge!(
                "task_predictor_tasks_processed",
                "Number of feedback submissions folded into the accuracy metric"
            )
            .expect("Failed to register tasks_processed"),

            model_trained: register_int_gauge!(
                "task_predictor_model_trained",
                "Whether the fitted duration model is active (1) or the cold-start heuristic (0)"
            )
            .expect("Failed to register model_trained"),

            model_mode_info: register_gauge_vec!(
                "task_predictor_model_mode_info",
                "Information about the active prediction mode",
                &["mode"]
            )
            .expect("Failed to register model_mode_info"),
        }
    }
}

/// Predictor metrics for Prometheus exposition
///
/// This is a lightweight handle to the global metrics instance.
/// Multiple clones share the same underlying metrics.
#[derive(Clone)]
pub struct PredictorMetrics {
    // This is just a marker - we use the global instance
    _private: (),
}

impl Default for PredictorMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl PredictorMetrics {
    /// Create a new metrics handle (initializes global metrics if needed)
    pub fn new() -> Self {
        GLOBAL_METRICS.get_or_init(PredictorMetricsInner::new);
        Self { _private: () }
    }

    fn inner(&self) -> &PredictorMetricsInner {
        GLOBAL_METRICS.get().expect("Metrics not initialized")
    }

    /// Record a prediction latency observation
    pub fn observe_prediction_latency(&self, duration_secs: f64) {
        self.inner().prediction_latency_seconds.observe(duration_secs);
    }

    /// Increment the served-predictions counter
    pub fn inc_predictions(&self) {
        self.inner().predictions_total.inc();
    }

    /// Increment the feedback-submissions counter
    pub fn inc_feedback(&self) {
        self.inner().feedback_total.inc();
    }

    /// Update the exported accuracy metrics
    pub fn set_accuracy(&self, mae: f64, tasks_processed: i64) {
        self.inner().model_mae_minutes.set(mae);
        self.inner().tasks_processed.set(tasks_processed);
    }

    /// Update the exported model mode
    pub fn set_model_mode(&self, trained: bool) {
        self.inner().model_trained.set(i64::from(trained));
        let mode = if trained { "regression" } else { "heuristic" };
        // Reset so only the active mode carries a value
        self.inner().model_mode_info.reset();
        self.inner()
            .model_mode_info
            .with_label_values(&[mode])
            .set(1.0);
    }
}
