//! Multinomial naive Bayes classifier over weighted term features.
//!
//! Class-conditional likelihoods are estimated from summed feature weights
//! with additive (Laplace) smoothing, so a term unseen for a class gets a
//! small nonzero probability instead of zeroing out the class. Scores are
//! accumulated in log space to avoid floating-point underflow on long
//! inputs.

use crate::error::{Result, RetortError};

/// Additive smoothing factor for likelihood estimates.
const ALPHA: f64 = 1.0;

/// A fitted multinomial naive Bayes classifier.
///
/// Classes are identified by dense indices assigned by the caller; the
/// tie-break in [`predict`](MultinomialNb::predict) favors the lowest index,
/// so callers that assign indices in first-appearance order get
/// first-appearance tie-breaking.
#[derive(Debug, Clone)]
pub struct MultinomialNb {
    /// Log prior probability per class, from class frequency.
    class_log_prior: Vec<f64>,
    /// Smoothed log likelihood per class per feature.
    feature_log_prob: Vec<Vec<f64>>,
}

impl MultinomialNb {
    /// Fit the classifier on feature vectors `x` and class indices `y`.
    pub fn fit(x: &[Vec<f64>], y: &[usize], n_classes: usize) -> Result<Self> {
        if x.is_empty() || n_classes == 0 {
            return Err(RetortError::training("training set is empty"));
        }
        if x.len() != y.len() {
            return Err(RetortError::invalid_argument(format!(
                "feature/label length mismatch: {} vs {}",
                x.len(),
                y.len()
            )));
        }
        if let Some(&bad) = y.iter().find(|&&class| class >= n_classes) {
            return Err(RetortError::invalid_argument(format!(
                "class index {bad} out of range for {n_classes} classes"
            )));
        }

        let n_features = x[0].len();
        let mut class_count = vec![0usize; n_classes];
        let mut feature_count = vec![vec![0.0; n_features]; n_classes];

        for (features, &class) in x.iter().zip(y) {
            class_count[class] += 1;
            for (index, &value) in features.iter().enumerate() {
                feature_count[class][index] += value;
            }
        }

        let n_samples = x.len() as f64;
        let class_log_prior = class_count
            .iter()
            .map(|&count| (count as f64 / n_samples).ln())
            .collect();

        let feature_log_prob = feature_count
            .iter()
            .map(|counts| {
                let total: f64 = counts.iter().sum();
                let denominator = total + ALPHA * n_features as f64;
                counts
                    .iter()
                    .map(|&count| ((count + ALPHA) / denominator).ln())
                    .collect()
            })
            .collect();

        Ok(MultinomialNb {
            class_log_prior,
            feature_log_prob,
        })
    }

    /// Predict the class index with the highest posterior score.
    ///
    /// The score is log prior plus the feature-weighted sum of log
    /// likelihoods. A zero feature vector scores every class by its prior
    /// alone, so the most frequent class wins.
    pub fn predict(&self, features: &[f64]) -> usize {
        let mut best_class = 0;
        let mut best_score = f64::NEG_INFINITY;

        for (class, prior) in self.class_log_prior.iter().enumerate() {
            let likelihood: f64 = features
                .iter()
                .zip(&self.feature_log_prob[class])
                .map(|(&value, &log_prob)| value * log_prob)
                .sum();
            let score = prior + likelihood;

            // Strict comparison keeps the lowest class index on ties.
            if score > best_score {
                best_score = score;
                best_class = class;
            }
        }

        best_class
    }

    /// Number of classes this classifier was fitted on.
    pub fn n_classes(&self) -> usize {
        self.class_log_prior.len()
    }
}
