//! # brccs-features
//!
//! Turns a sentence, its conversational history, and the response position
//! being predicted into a [`FeatureVector`](brccs_core::FeatureVector).

pub mod extractor;
pub mod keys;

pub use extractor::FeatureExtractor;
