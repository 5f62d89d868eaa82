use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single feature value. Features are compared by exact identity, so the
/// variant matters: `Number(3)` and `Text("3")` are different values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureValue {
    Text(String),
    Number(i64),
    Pair(String, String),
}

impl From<String> for FeatureValue {
    fn from(value: String) -> Self {
        FeatureValue::Text(value)
    }
}

impl From<&str> for FeatureValue {
    fn from(value: &str) -> Self {
        FeatureValue::Text(value.to_string())
    }
}

impl From<char> for FeatureValue {
    fn from(value: char) -> Self {
        FeatureValue::Text(value.to_string())
    }
}

impl From<usize> for FeatureValue {
    fn from(value: usize) -> Self {
        FeatureValue::Number(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<i64> for FeatureValue {
    fn from(value: i64) -> Self {
        FeatureValue::Number(value)
    }
}

impl From<(String, String)> for FeatureValue {
    fn from((a, b): (String, String)) -> Self {
        FeatureValue::Pair(a, b)
    }
}

/// Feature key → value. Ordered so that iteration (and therefore training) is deterministic.
pub type FeatureVector = BTreeMap<String, FeatureValue>;
