//! Core data models for the task predictor

use serde::{Deserialize, Serialize};

/// Task attributes submitted for prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskFeatures {
    pub category: String,
    #[serde(default)]
    pub priority: PriorityLabel,
    #[serde(default)]
    pub subtask_count: u32,
    #[serde(default)]
    pub days_until_deadline: Option<f64>,
}

/// Priority label attached to a task
///
/// Labels outside the known set fold into `Medium`, which contributes
/// no score adjustment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum PriorityLabel {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl From<String> for PriorityLabel {
    fn from(label: String) -> Self {
        match label.as_str() {
            "low" => PriorityLabel::Low,
            "medium" => PriorityLabel::Medium,
            "high" => PriorityLabel::High,
            "urgent" => PriorityLabel::Urgent,
            _ => PriorityLabel::Medium,
        }
    }
}

/// Numeric features consumed by the duration model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedFeatures {
    pub category_weight: f64,
    pub complexity: f64,
}

/// Completed task used to fit the duration model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingExample {
    pub category: String,
    #[serde(default)]
    pub subtask_count: u32,
    pub actual_duration: f64,
}

/// Accuracy snapshot for the model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetrics {
    pub mae: f64,
    pub tasks_processed: u64,
    pub is_trained: bool,
}
