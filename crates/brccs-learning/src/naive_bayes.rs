//! Naive Bayes over string-keyed categorical features.
//!
//! Probabilities use the expected-likelihood estimate (add 0.5 to every
//! count). A feature absent from a training example counts as an implicit
//! "missing" value for that example's label, so examples with different
//! feature sets (sentences of different lengths) stay comparable.

use std::collections::HashMap;
use std::sync::Arc;

use brccs_core::errors::{BrccsError, BrccsResult};
use brccs_core::models::{FeatureValue, FeatureVector, Label, TrainingExample};
use brccs_core::traits::{IClassifier, ILearner};
use tracing::debug;

/// Additive smoothing constant of the expected-likelihood estimate.
const ELE_GAMMA: f64 = 0.5;

/// Trains [`NaiveBayesClassifier`]s.
#[derive(Debug, Default, Clone, Copy)]
pub struct NaiveBayesLearner;

impl NaiveBayesLearner {
    pub fn new() -> Self {
        Self
    }
}

impl ILearner for NaiveBayesLearner {
    fn train(&self, examples: &[TrainingExample]) -> BrccsResult<Arc<dyn IClassifier>> {
        Ok(Arc::new(NaiveBayesClassifier::train(examples)?))
    }

    fn name(&self) -> &str {
        "naive-bayes"
    }
}

/// Per-feature statistics.
#[derive(Debug, Clone)]
struct FeatureStats {
    /// `ln(label_count + gamma * bins)` per label index.
    log_denominators: Vec<f64>,
    /// Observed value → (label index, count) pairs.
    value_counts: HashMap<FeatureValue, Vec<(usize, u32)>>,
}

/// A trained naive Bayes model.
#[derive(Debug, Clone)]
pub struct NaiveBayesClassifier {
    /// Labels in first-seen order; ties resolve to the earliest.
    labels: Vec<Label>,
    log_priors: Vec<f64>,
    features: HashMap<String, FeatureStats>,
}

impl NaiveBayesClassifier {
    pub fn train(examples: &[TrainingExample]) -> BrccsResult<Self> {
        if examples.is_empty() {
            return Err(BrccsError::Classifier {
                reason: "cannot train on an empty example set".to_string(),
            });
        }

        let mut labels: Vec<Label> = Vec::new();
        let mut label_index: HashMap<&Label, usize> = HashMap::new();
        let mut label_counts: Vec<u32> = Vec::new();
        // feature name → value → label index → count
        let mut raw: HashMap<&str, HashMap<&FeatureValue, HashMap<usize, u32>>> = HashMap::new();
        let mut occurrences: HashMap<&str, usize> = HashMap::new();

        for example in examples {
            let idx = *label_index.entry(&example.label).or_insert_with(|| {
                labels.push(example.label.clone());
                label_counts.push(0);
                labels.len() - 1
            });
            label_counts[idx] += 1;

            for (name, value) in &example.features {
                *raw.entry(name.as_str())
                    .or_default()
                    .entry(value)
                    .or_default()
                    .entry(idx)
                    .or_default() += 1;
                *occurrences.entry(name.as_str()).or_default() += 1;
            }
        }

        let total = examples.len() as f64;
        let label_bins = labels.len() as f64;
        let log_priors = label_counts
            .iter()
            .map(|&c| ((c as f64 + ELE_GAMMA) / (total + ELE_GAMMA * label_bins)).ln())
            .collect();

        let features = raw
            .into_iter()
            .map(|(name, values)| {
                let has_missing = occurrences[name] < examples.len();
                let bins = (values.len() + usize::from(has_missing)) as f64;
                let log_denominators = label_counts
                    .iter()
                    .map(|&c| (c as f64 + ELE_GAMMA * bins).ln())
                    .collect();
                let value_counts = values
                    .into_iter()
                    .map(|(value, per_label)| {
                        let mut counts: Vec<(usize, u32)> = per_label.into_iter().collect();
                        counts.sort_unstable();
                        (value.clone(), counts)
                    })
                    .collect();
                (
                    name.to_string(),
                    FeatureStats {
                        log_denominators,
                        value_counts,
                    },
                )
            })
            .collect::<HashMap<_, _>>();

        debug!(
            examples = examples.len(),
            labels = labels.len(),
            features = features.len(),
            "naive bayes trained"
        );

        Ok(Self {
            labels,
            log_priors,
            features,
        })
    }

    /// Unnormalized log-probability of every label, in label order.
    /// Feature names never seen during training are ignored.
    pub fn log_scores(&self, features: &FeatureVector) -> Vec<f64> {
        let unseen = ELE_GAMMA.ln();
        let mut scores = self.log_priors.clone();

        for (name, value) in features {
            let Some(stats) = self.features.get(name) else {
                continue;
            };
            for (score, denominator) in scores.iter_mut().zip(&stats.log_denominators) {
                *score += unseen - denominator;
            }
            if let Some(counts) = stats.value_counts.get(value) {
                for &(label, count) in counts {
                    scores[label] += (count as f64 + ELE_GAMMA).ln() - unseen;
                }
            }
        }
        scores
    }

    /// Labels known to the model, in first-seen order.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Number of distinct feature names seen during training.
    pub fn feature_count(&self) -> usize {
        self.features.len()
    }
}

impl IClassifier for NaiveBayesClassifier {
    fn classify(&self, features: &FeatureVector) -> BrccsResult<Label> {
        let scores = self.log_scores(features);
        let mut best = 0;
        for (i, score) in scores.iter().enumerate().skip(1) {
            if *score > scores[best] {
                best = i;
            }
        }
        Ok(self.labels[best].clone())
    }
}
