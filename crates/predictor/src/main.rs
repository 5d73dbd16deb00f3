//! Task Predictor - duration and priority prediction service
//!
//! Serves task duration and priority predictions over HTTP, optionally
//! bootstrapping the duration model from a training file at startup.

use anyhow::Result;
use predictor_lib::{
    health::{components, HealthRegistry},
    model::ModelManager,
    observability::PredictorMetrics,
    training,
};
use std::sync::Arc;
use task_predictor::{api, config::ServiceConfig};
use tokio::sync::RwLock;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing with JSON output and env filter
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().json())
        .init();

    info!(
        event = "service_started",
        version = SERVICE_VERSION,
        "Starting task-predictor"
    );

    // Load configuration
    let config = ServiceConfig::load()?;
    info!(api_port = config.api_port, "Service configured");

    // Initialize health registry
    let health_registry = HealthRegistry::new();
    health_registry.register(components::MODEL).await;
    health_registry.register(components::TRAINER).await;

    // Initialize metrics and the shared model manager
    let metrics = PredictorMetrics::new();
    let manager = Arc::new(RwLock::new(ModelManager::new()));

    bootstrap_training(&config, &manager, &health_registry).await;

    // Export the post-bootstrap model state
    {
        let manager = manager.read().await;
        let snapshot = manager.metrics();
        metrics.set_accuracy(snapshot.mae, snapshot.tasks_processed as i64);
        metrics.set_model_mode(snapshot.is_trained);
    }

    // Create shared application state
    let app_state = Arc::new(api::AppState::new(
        manager,
        health_registry.clone(),
        metrics.clone(),
    ));

    // Mark service as ready after initialization
    health_registry.set_ready(true).await;

    // Start the API server
    let api_handle = tokio::spawn(api::serve(config.api_port, app_state));

    // Wait for shutdown signal
    tokio::signal::ctrl_c().await?;
    info!(
        event = "service_shutdown",
        reason = "SIGINT received",
        "Shutting down"
    );
    api_handle.abort();

    Ok(())
}

/// Fit the duration model from the configured training file, if any
///
/// Training is a one-shot batch operation; it never appears on the HTTP
/// surface. Any load failure leaves the service on the cold-start
/// heuristic with the trainer component marked degraded.
async fn bootstrap_training(
    config: &ServiceConfig,
    manager: &Arc<RwLock<ModelManager>>,
    health_registry: &HealthRegistry,
) {
    let Some(path) = &config.training_data_path else {
        info!(
            event = "training_skipped",
            "No training data configured, using cold-start heuristic"
        );
        return;
    };

    match training::load_training_file(path) {
        Ok(examples) if examples.is_empty() => {
            warn!(
                event = "training_skipped",
                path = %path.display(),
                "Training file contains no examples, using cold-start heuristic"
            );
            health_registry
                .set_degraded(components::TRAINER, "Training file contains no examples")
                .await;
        }
        Ok(examples) => {
            info!(
                event = "training_data_loaded",
                path = %path.display(),
                examples = examples.len(),
                "Loaded training data"
            );
            let mut manager = manager.write().await;
            manager.train(&examples);
        }
        Err(err) => {
            warn!(
                event = "training_failed",
                path = %path.display(),
                error = %err,
                "Failed to load training data, continuing untrained"
            );
            health_registry
                .set_degraded(components::TRAINER, err.to_string())
                .await;
        }
    }
}
