//! ClassifierRegistry — name-keyed trained classifiers.

use std::sync::Arc;

use dashmap::DashMap;

use brccs_core::errors::{BrccsError, BrccsResult};
use brccs_core::traits::IClassifier;

/// Classifiers by snapshot name. Entries are only ever added, by training.
#[derive(Default)]
pub struct ClassifierRegistry {
    classifiers: DashMap<String, Arc<dyn IClassifier>>,
}

impl ClassifierRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, name: &str, classifier: Arc<dyn IClassifier>) {
        self.classifiers.insert(name.to_string(), classifier);
    }

    /// The classifier trained for `name`.
    pub fn get(&self, name: &str) -> BrccsResult<Arc<dyn IClassifier>> {
        self.classifiers
            .get(name)
            .map(|c| Arc::clone(&c))
            .ok_or_else(|| BrccsError::NotFound {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classifiers.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.classifiers.iter().map(|r| r.key().clone()).collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.classifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classifiers.is_empty()
    }
}
