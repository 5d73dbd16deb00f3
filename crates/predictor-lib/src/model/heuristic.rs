//! Cold-start duration heuristic and priority scoring
//!
//! Before any training data exists, durations come from a fixed
//! multiplier over the derived features. Priority scoring is always
//! heuristic: a neutral base adjusted by deadline proximity bands and
//! the task's priority label, clamped to the score range.

use crate::models::{DerivedFeatures, PriorityLabel, TaskFeatures};

/// Base duration in minutes scaled by the derived features
pub const BASE_DURATION_MINUTES: f64 = 30.0;

/// Hard floor applied to every duration prediction
pub const MIN_DURATION_MINUTES: u32 = 5;

/// Neutral starting point for priority scoring
const BASE_SCORE: i32 = 50;

/// Cold-start duration estimate in fractional minutes
pub fn cold_start_duration(features: &DerivedFeatures) -> f64 {
    BASE_DURATION_MINUTES * features.category_weight * features.complexity
}

/// Priority score in `[0, 100]` from deadline proximity and label
///
/// Tasks without a deadline take no urgency adjustment. An overdue
/// deadline (zero or negative days) lands in the most urgent band.
pub fn priority_score(task: &TaskFeatures) -> u8 {
    let mut score = BASE_SCORE;
    if let Some(days) = task.days_until_deadline {
        score += deadline_adjustment(days);
    }
    score += label_adjustment(task.priority);
    score.clamp(0, 100) as u8
}

/// Deadline urgency adjustment, first matching band wins
fn deadline_adjustment(days_until_deadline: f64) -> i32 {
    if days_until_deadline <= 0.0 {
        40
    } else if days_until_deadline <= 1.0 {
        30
    } else if days_until_deadline <= 3.0 {
        20
    } else if days_until_deadline <= 7.0 {
        10
    } else {
        0
    }
}

/// Adjustment contributed by the priority label
fn label_adjustment(priority: PriorityLabel) -> i32 {
    match priority {
        PriorityLabel::Low => -10,
        PriorityLabel::Medium => 0,
        PriorityLabel::High => 20,
        PriorityLabel::Urgent => 40,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_task(
        priority: PriorityLabel,
        days_until_deadline: Option<f64>,
    ) -> TaskFeatures {
        TaskFeatures {
            category: "Work".to_string(),
            priority,
            subtask_count: 0,
            days_until_deadline,
        }
    }

    #[test]
    fn test_cold_start_scales_with_features() {
        let features = DerivedFeatures {
            category_weight: 1.2,
            complexity: 1.0,
        };
        assert_eq!(cold_start_duration(&features), 36.0);

        let features = DerivedFeatures {
            category_weight: 1.0,
            complexity: 2.0,
        };
        assert_eq!(cold_start_duration(&features), 60.0);
    }

    #[test]
    fn test_no_deadline_keeps_base_score() {
        let task = create_test_task(PriorityLabel::Medium, None);
        assert_eq!(priority_score(&task), 50);
    }

    #[test]
    fn test_deadline_bands() {
        for (days, expected) in [
            (-2.0, 90),
            (0.0, 90),
            (0.5, 80),
            (1.0, 80),
            (2.0, 70),
            (3.0, 70),
            (5.0, 60),
            (7.0, 60),
            (10.0, 50),
        ] {
            let task = create_test_task(PriorityLabel::Medium, Some(days));
            assert_eq!(priority_score(&task), expected, "days = {}", days);
        }
    }

    #[test]
    fn test_label_adjustments() {
        assert_eq!(
            priority_score(&create_test_task(PriorityLabel::Low, None)),
            40
        );
        assert_eq!(
            priority_score(&create_test_task(PriorityLabel::High, None)),
            70
        );
        assert_eq!(
            priority_score(&create_test_task(PriorityLabel::Urgent, None)),
            90
        );
    }

    #[test]
    fn test_score_clamps_to_upper_bound() {
        // 50 + 40 (overdue) + 40 (urgent) = 130 before the clamp
        let task = create_test_task(PriorityLabel::Urgent, Some(0.0));
        assert_eq!(priority_score(&task), 100);
    }

    #[test]
    fn test_low_priority_far_deadline() {
        let task = create_test_task(PriorityLabel::Low, Some(10.0));
        assert_eq!(priority_score(&task), 40);
    }
}
