//! Training-batch loading
//!
//! Reads a JSON array of completed tasks from disk for the one-shot
//! batch training performed at startup. A missing or malformed file is
//! reported to the caller; the service can run untrained.

use crate::models::TrainingExample;
use std::path::Path;
use thiserror::Error;

/// Failure loading a training batch from disk
#[derive(Debug, Error)]
pub enum TrainingDataError {
    #[error("failed to read training data: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse training data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load a JSON array of training examples from a file
pub fn load_training_file(path: &Path) -> Result<Vec<TrainingExample>, TrainingDataError> {
    let contents = std::fs::read_to_string(path)?;
    let examples = serde_json::from_str(&contents)?;
    Ok(examples)
}
