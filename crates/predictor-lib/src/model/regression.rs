//! Least-squares duration model
//!
//! Fits `duration = w0 * category_weight + w1 * complexity + bias` over
//! a batch of completed tasks by solving the normal equations directly.
//! The feature space is two-dimensional, so the closed-form solve stays
//! a 3x3 system and needs no iterative optimizer.

use crate::models::DerivedFeatures;

/// Diagonal damping added to the normal matrix
///
/// Keeps the system solvable for degenerate batches (a single example,
/// or every example sharing the same features) while perturbing
/// well-conditioned fits far below the minute-level rounding of the
/// final prediction.
const DAMPING: f64 = 1e-8;

/// Pivot magnitude below which elimination treats the system as singular
const PIVOT_TOLERANCE: f64 = 1e-12;

/// Linear duration model over the derived features
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    weights: [f64; 2],
    bias: f64,
}

impl LinearModel {
    /// Fit the model over `(features, actual_duration)` pairs
    ///
    /// Returns `None` only for an empty batch. A batch the normal
    /// equations cannot separate collapses to the mean duration, which
    /// is the least-squares answer for constant features.
    pub fn fit(samples: &[(DerivedFeatures, f64)]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        // Accumulate X^T X and X^T y over rows [weight, complexity, 1].
        let mut xtx = [[0.0f64; 3]; 3];
        let mut xty = [0.0f64; 3];
        for (features, duration) in samples {
            let row = [features.category_weight, features.complexity, 1.0];
            for i in 0..3 {
                for j in 0..3 {
                    xtx[i][j] += row[i] * row[j];
                }
                xty[i] += row[i] * duration;
            }
        }
        for (i, row) in xtx.iter_mut().enumerate() {
            row[i] += DAMPING;
        }

        let beta = match solve_3x3(xtx, xty) {
            Some(beta) => beta,
            None => {
                let mean =
                    samples.iter().map(|(_, duration)| *duration).sum::<f64>() / samples.len() as f64;
                return Some(Self {
                    weights: [0.0, 0.0],
                    bias: mean,
                });
            }
        };

        Some(Self {
            weights: [beta[0], beta[1]],
            bias: beta[2],
        })
    }

    /// Predicted duration in fractional minutes
    pub fn predict(&self, features: &DerivedFeatures) -> f64 {
        self.weights[0] * features.category_weight
            + self.weights[1] * features.complexity
            + self.bias
    }
}

/// Solve a 3x3 linear system by Gaussian elimination with partial pivoting
fn solve_3x3(mut a: [[f64; 3]; 3], mut b: [f64; 3]) -> Option<[f64; 3]> {
    for col in 0..3 {
        let pivot = (col..3).max_by(|&i, &j| {
            a[i][col]
                .abs()
                .partial_cmp(&a[j][col].abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })?;
        if a[pivot][col].abs() < PIVOT_TOLERANCE {
            return None;
        }
        a.swap(col, pivot);
        b.swap(col, pivot);
        for row in (col + 1)..3 {
            let factor = a[row][col] / a[col][col];
            for k in col..3 {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = [0.0f64; 3];
    for row in (0..3).rev() {
        let mut sum = b[row];
        for (k, value) in x.iter().enumerate().skip(row + 1) {
            sum -= a[row][k] * value;
        }
        x[row] = sum / a[row][row];
    }
    Some(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(category_weight: f64, complexity: f64) -> DerivedFeatures {
        DerivedFeatures {
            category_weight,
            complexity,
        }
    }

    #[test]
    fn test_empty_batch_fits_nothing() {
        assert!(LinearModel::fit(&[]).is_none());
    }

    #[test]
    fn test_single_example_reproduces_duration() {
        let model = LinearModel::fit(&[(features(1.2, 1.0), 45.0)]).unwrap();
        assert!((model.predict(&features(1.2, 1.0)) - 45.0).abs() < 1e-4);
    }

    #[test]
    fn test_recovers_exact_linear_relationship() {
        // duration = 10 * weight + 20 * complexity + 5
        let samples: Vec<(DerivedFeatures, f64)> = [
            (1.2, 1.0),
            (0.8, 2.0),
            (1.5, 1.5),
            (1.0, 3.0),
            (0.5, 2.5),
        ]
        .iter()
        .map(|&(w, c)| (features(w, c), 10.0 * w + 20.0 * c + 5.0))
        .collect();

        let model = LinearModel::fit(&samples).unwrap();
        let held_out = features(0.9, 4.0);
        let expected = 10.0 * 0.9 + 20.0 * 4.0 + 5.0;
        assert!((model.predict(&held_out) - expected).abs() < 1e-4);
    }

    #[test]
    fn test_constant_features_predict_mean() {
        let point = features(1.2, 2.0);
        let samples = vec![(point, 10.0), (point, 20.0), (point, 30.0)];
        let model = LinearModel::fit(&samples).unwrap();
        assert!((model.predict(&point) - 20.0).abs() < 1e-4);
    }

    #[test]
    fn test_noisy_fit_stays_close() {
        // Offsets cancel, so the least-squares plane matches the clean one
        let clean = |w: f64, c: f64| 8.0 * w + 15.0 * c + 12.0;
        let samples = vec![
            (features(1.2, 1.0), clean(1.2, 1.0) + 2.0),
            (features(1.2, 1.0), clean(1.2, 1.0) - 2.0),
            (features(0.8, 2.5), clean(0.8, 2.5) + 1.0),
            (features(0.8, 2.5), clean(0.8, 2.5) - 1.0),
            (features(1.5, 3.0), clean(1.5, 3.0) + 0.5),
            (features(1.5, 3.0), clean(1.5, 3.0) - 0.5),
        ];
        let model = LinearModel::fit(&samples).unwrap();
        assert!((model.predict(&features(1.0, 2.0)) - clean(1.0, 2.0)).abs() < 1e-3);
    }

    #[test]
    fn test_singular_system_is_rejected() {
        assert!(solve_3x3([[0.0; 3]; 3], [1.0, 2.0, 3.0]).is_none());
    }
}
