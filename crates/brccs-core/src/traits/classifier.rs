use std::sync::Arc;

use crate::errors::BrccsResult;
use crate::models::{FeatureVector, Label, TrainingExample};

/// A trained model mapping a feature vector to a predicted label.
pub trait IClassifier: Send + Sync {
    fn classify(&self, features: &FeatureVector) -> BrccsResult<Label>;
}

/// Trains a classifier from a set of labeled examples.
pub trait ILearner: Send + Sync {
    fn train(&self, examples: &[TrainingExample]) -> BrccsResult<Arc<dyn IClassifier>>;

    /// Human-readable learner name.
    fn name(&self) -> &str;
}
