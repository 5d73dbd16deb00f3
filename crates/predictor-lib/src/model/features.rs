//! Feature derivation for duration prediction
//!
//! Maps raw task attributes onto the two numeric features the duration
//! model consumes: a per-category weight and a subtask-driven complexity
//! scalar. Both the cold-start heuristic and the fitted model read the
//! same derived features, so a task always scores consistently across
//! model states.

use crate::models::{DerivedFeatures, TaskFeatures};

/// Weight applied per known task category
const CATEGORY_WEIGHTS: &[(&str, f64)] = &[
    ("Work", 1.2),
    ("Personal", 0.8),
    ("Learning", 1.5),
    ("Health", 1.0),
    ("Shopping", 0.5),
    ("Family", 0.9),
];

/// Weight for categories missing from the table
pub const DEFAULT_CATEGORY_WEIGHT: f64 = 1.0;

/// Per-subtask increment folded into the complexity scalar
const COMPLEXITY_PER_SUBTASK: f64 = 0.5;

/// Numeric weight for a category label, case-sensitive lookup
pub fn category_weight(category: &str) -> f64 {
    CATEGORY_WEIGHTS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, weight)| *weight)
        .unwrap_or(DEFAULT_CATEGORY_WEIGHT)
}

/// Complexity scalar derived from the subtask count
///
/// A task with no subtasks has complexity 1.0; every subtask adds 0.5.
pub fn complexity(subtask_count: u32) -> f64 {
    f64::from(subtask_count) * COMPLEXITY_PER_SUBTASK + 1.0
}

/// Derive the model features for a task
pub fn derive(task: &TaskFeatures) -> DerivedFeatures {
    derive_parts(&task.category, task.subtask_count)
}

/// Derive model features from the category and subtask count alone
///
/// Training examples carry only these two attributes, so the training
/// path shares this with [`derive`].
pub fn derive_parts(category: &str, subtask_count: u32) -> DerivedFeatures {
    DerivedFeatures {
        category_weight: category_weight(category),
        complexity: complexity(subtask_count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PriorityLabel;

    fn create_test_task(category: &str, subtask_count: u32) -> TaskFeatures {
        TaskFeatures {
            category: category.to_string(),
            priority: PriorityLabel::Medium,
            subtask_count,
            days_until_deadline: None,
        }
    }

    #[test]
    fn test_known_category_weights() {
        assert_eq!(category_weight("Work"), 1.2);
        assert_eq!(category_weight("Personal"), 0.8);
        assert_eq!(category_weight("Learning"), 1.5);
        assert_eq!(category_weight("Health"), 1.0);
        assert_eq!(category_weight("Shopping"), 0.5);
        assert_eq!(category_weight("Family"), 0.9);
    }

    #[test]
    fn test_unknown_category_uses_default_weight() {
        assert_eq!(category_weight("Gardening"), DEFAULT_CATEGORY_WEIGHT);
        assert_eq!(category_weight(""), DEFAULT_CATEGORY_WEIGHT);
        // Lookup is case-sensitive: lowercase "work" is not a known category
        assert_eq!(category_weight("work"), DEFAULT_CATEGORY_WEIGHT);
    }

    #[test]
    fn test_complexity_scaling() {
        assert_eq!(complexity(0), 1.0);
        assert_eq!(complexity(1), 1.5);
        assert_eq!(complexity(2), 2.0);
        assert_eq!(complexity(10), 6.0);
    }

    #[test]
    fn test_derive_combines_weight_and_complexity() {
        let features = derive(&create_test_task("Learning", 4));
        assert_eq!(features.category_weight, 1.5);
        assert_eq!(features.complexity, 3.0);
    }

    #[test]
    fn test_derive_parts_matches_full_derivation() {
        let task = create_test_task("Shopping", 3);
        assert_eq!(derive(&task), derive_parts("Shopping", 3));
    }
}
