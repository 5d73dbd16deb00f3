//! Core library for the task prediction service
//!
//! This crate provides the core functionality for:
//! - Feature derivation from task attributes
//! - Cold-start duration heuristics and priority scoring
//! - Least-squares duration model fitting
//! - Running prediction-accuracy tracking
//! - Health checks and observability

pub mod health;
pub mod model;
pub mod models;
pub mod observability;
pub mod training;

pub use health::{
    ComponentHealth, ComponentStatus, HealthRegistry, HealthResponse, ReadinessResponse,
};
pub use model::ModelManager;
pub use models::*;
pub use observability::PredictorMetrics;
pub use training::{load_training_file, TrainingDataError};
