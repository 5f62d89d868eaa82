//! # brccs-learning
//!
//! Training-set synthesis: every sentence of a conversation becomes one
//! example per word of the following sentence, plus a run of terminator
//! examples. Also ships the default [`NaiveBayesLearner`].

pub mod examples;
pub mod naive_bayes;

pub use examples::build_training_set;
pub use naive_bayes::{NaiveBayesClassifier, NaiveBayesLearner};
