//! # brccs-core
//!
//! Foundation crate for the Bayes-Rehermann conversational classification system.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::BrccsConfig;
pub use errors::{BrccsError, BrccsResult};
pub use models::{Conversation, FeatureValue, FeatureVector, Label, Snapshot, TrainingExample};
