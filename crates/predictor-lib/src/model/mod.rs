//! Duration and priority prediction engine

mod accuracy;
mod features;
mod heuristic;
mod regression;

pub use accuracy::AccuracyTracker;
pub use features::{category_weight, complexity, derive, derive_parts, DEFAULT_CATEGORY_WEIGHT};
pub use heuristic::{
    cold_start_duration, priority_score, BASE_DURATION_MINUTES, MIN_DURATION_MINUTES,
};
pub use regression::LinearModel;

use crate::models::{DerivedFeatures, ModelMetrics, TaskFeatures, TrainingExample};
use tracing::info;

/// Duration and priority prediction engine
///
/// Owns the optional fitted duration model and the running accuracy
/// state. Durations come from the cold-start heuristic until a training
/// batch produces a fitted model; once fitted, the engine never reverts
/// to the heuristic. Priority scores are heuristic in either state.
#[derive(Debug, Default)]
pub struct ModelManager {
    model: Option<LinearModel>,
    accuracy: AccuracyTracker,
}

impl ModelManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once a training batch has produced a fitted model
    pub fn is_trained(&self) -> bool {
        self.model.is_some()
    }

    /// Fit the duration model over a batch of completed tasks
    ///
    /// An empty batch is a no-op. Otherwise the fitted model replaces
    /// the heuristic, and the mean absolute error is recomputed as the
    /// mean residual over the batch. The feedback submission count is
    /// not touched.
    pub fn train(&mut self, examples: &[TrainingExample]) {
        let rows: Vec<(DerivedFeatures, f64)> = examples
            .iter()
            .map(|example| {
                (
                    features::derive_parts(&example.category, example.subtask_count),
                    example.actual_duration,
                )
            })
            .collect();

        let Some(model) = LinearModel::fit(&rows) else {
            return;
        };

        let residual_sum: f64 = rows
            .iter()
            .map(|(features, actual)| (model.predict(features) - actual).abs())
            .sum();
        let training_mae = residual_sum / rows.len() as f64;

        self.accuracy.replace_mean(training_mae);
        self.model = Some(model);

        info!(
            event = "model_trained",
            examples = rows.len(),
            training_mae = training_mae,
            "Fitted duration model"
        );
    }

    /// Predicted duration in whole minutes, never below the floor
    pub fn predict_duration(&self, task: &TaskFeatures) -> u32 {
        let derived = features::derive(task);
        let raw = match &self.model {
            Some(model) => model.predict(&derived),
            None => heuristic::cold_start_duration(&derived),
        };
        round_duration(raw)
    }

    /// Priority score in `[0, 100]`
    pub fn priority_score(&self, task: &TaskFeatures) -> u8 {
        heuristic::priority_score(task)
    }

    /// Fold a feedback pair into the accuracy state
    ///
    /// Returns the updated mean absolute error.
    pub fn update_metrics(&mut self, actual_duration: i64, predicted_duration: i64) -> f64 {
        self.accuracy.record(actual_duration, predicted_duration)
    }

    /// Snapshot of the accuracy state
    pub fn metrics(&self) -> ModelMetrics {
        ModelMetrics {
            mae: self.accuracy.mean_absolute_error(),
            tasks_processed: self.accuracy.tasks_processed(),
            is_trained: self.is_trained(),
        }
    }
}

/// Round to whole minutes and apply the minimum-duration floor
fn round_duration(raw: f64) -> u32 {
    raw.round().max(f64::from(MIN_DURATION_MINUTES)) as u32
}
