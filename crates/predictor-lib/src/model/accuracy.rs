//! Running prediction-accuracy tracking

/// Incrementally maintained mean absolute error over feedback submissions
///
/// `record` keeps the mean equal to the arithmetic mean of every error
/// submitted so far without storing the individual errors. Training
/// replaces the mean wholesale via `replace_mean` but leaves the
/// submission count alone, so `tasks_processed` always counts feedback
/// submissions only.
#[derive(Debug, Clone, Default)]
pub struct AccuracyTracker {
    mean_absolute_error: f64,
    tasks_processed: u64,
}

impl AccuracyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one `(actual, predicted)` pair into the running mean
    ///
    /// Returns the updated mean absolute error.
    pub fn record(&mut self, actual_minutes: i64, predicted_minutes: i64) -> f64 {
        let error = actual_minutes.abs_diff(predicted_minutes) as f64;
        let total_error = self.mean_absolute_error * self.tasks_processed as f64;
        self.tasks_processed += 1;
        self.mean_absolute_error = (total_error + error) / self.tasks_processed as f64;
        self.mean_absolute_error
    }

    /// Replace the running mean with a freshly computed value
    pub fn replace_mean(&mut self, mean_absolute_error: f64) {
        self.mean_absolute_error = mean_absolute_error;
    }

    pub fn mean_absolute_error(&self) -> f64 {
        self.mean_absolute_error
    }

    pub fn tasks_processed(&self) -> u64 {
        self.tasks_processed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let tracker = AccuracyTracker::new();
        assert_eq!(tracker.mean_absolute_error(), 0.0);
        assert_eq!(tracker.tasks_processed(), 0);
    }

    #[test]
    fn test_first_record_sets_mean_to_error() {
        let mut tracker = AccuracyTracker::new();
        assert_eq!(tracker.record(10, 5), 5.0);
        assert_eq!(tracker.tasks_processed(), 1);
    }

    #[test]
    fn test_running_mean_over_two_submissions() {
        let mut tracker = AccuracyTracker::new();
        tracker.record(10, 5);
        assert_eq!(tracker.record(20, 25), 5.0);
        assert_eq!(tracker.tasks_processed(), 2);
    }

    #[test]
    fn test_error_is_symmetric() {
        let mut over = AccuracyTracker::new();
        let mut under = AccuracyTracker::new();
        assert_eq!(over.record(30, 10), under.record(10, 30));
    }

    #[test]
    fn test_matches_direct_mean() {
        let pairs = [(30, 25), (60, 90), (5, 5), (120, 100), (15, 40)];
        let mut tracker = AccuracyTracker::new();
        let mut last = 0.0;
        for (actual, predicted) in pairs {
            last = tracker.record(actual, predicted);
        }
        let direct: f64 = pairs
            .iter()
            .map(|(a, p)| (a - p).abs() as f64)
            .sum::<f64>()
            / pairs.len() as f64;
        assert!((last - direct).abs() < 1e-9);
        assert_eq!(tracker.tasks_processed(), pairs.len() as u64);
    }

    #[test]
    fn test_replace_mean_keeps_count() {
        let mut tracker = AccuracyTracker::new();
        tracker.record(10, 5);
        tracker.record(20, 25);
        tracker.replace_mean(1.25);
        assert_eq!(tracker.mean_absolute_error(), 1.25);
        assert_eq!(tracker.tasks_processed(), 2);
        // The next submission blends into the replaced mean
        assert_eq!(tracker.record(8, 8), 2.5 / 3.0);
    }
}
