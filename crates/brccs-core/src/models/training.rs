use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{FeatureVector, Label};

/// One labeled training example: the features of a sentence at a response
/// position, and the word (or terminator) expected there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub features: FeatureVector,
    pub label: Label,
}

impl TrainingExample {
    pub fn new(features: FeatureVector, label: Label) -> Self {
        Self { features, label }
    }
}

/// Outcome of a finished training run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingReport {
    pub snapshot: String,
    pub examples: usize,
    pub labels: usize,
    pub elapsed: Duration,
    /// SnapIndex ordinal if the snapshot was written to storage.
    pub persisted_ordinal: Option<i64>,
}

/// Pollable training state of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrainingStatus {
    Pending,
    Ready,
    Failed(String),
}

/// Progress notification delivered to a training observer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrainingEvent {
    AlreadyExists { snapshot: String },
    Started { snapshot: String },
    NoTrainingData { snapshot: String },
    Completed { snapshot: String },
}

impl TrainingEvent {
    pub fn snapshot(&self) -> &str {
        match self {
            TrainingEvent::AlreadyExists { snapshot }
            | TrainingEvent::Started { snapshot }
            | TrainingEvent::NoTrainingData { snapshot }
            | TrainingEvent::Completed { snapshot } => snapshot,
        }
    }
}

impl fmt::Display for TrainingEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrainingEvent::AlreadyExists { snapshot } => {
                write!(f, "The snapshot '{snapshot}' already exists!")
            }
            TrainingEvent::Started { snapshot } => write!(f, "Training snapshot '{snapshot}'..."),
            TrainingEvent::NoTrainingData { snapshot } => {
                write!(f, "No training data from snapshot '{snapshot}'!")
            }
            TrainingEvent::Completed { snapshot } => {
                write!(f, "Snapshot '{snapshot}' created successfully!")
            }
        }
    }
}
