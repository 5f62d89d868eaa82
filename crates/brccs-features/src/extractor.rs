//! FeatureExtractor — pure function from (sentence, history, flags) to features.

use std::sync::Arc;

use brccs_core::constants::RESPONSE_INDEX_FEATURE;
use brccs_core::errors::{BrccsError, BrccsResult};
use brccs_core::models::{FeatureValue, FeatureVector};
use brccs_core::traits::INlpToolkit;
use tracing::trace;

use crate::keys;

/// Builds feature vectors through an [`INlpToolkit`]. Holds no mutable state,
/// so the same inputs always produce the same vector.
#[derive(Clone)]
pub struct FeatureExtractor {
    toolkit: Arc<dyn INlpToolkit>,
}

impl FeatureExtractor {
    pub fn new(toolkit: Arc<dyn INlpToolkit>) -> Self {
        Self { toolkit }
    }

    /// Features for predicting the word at `response_index` of the reply to `sentence`.
    pub fn extract_at(
        &self,
        sentence: &str,
        history: &[String],
        response_index: usize,
    ) -> BrccsResult<FeatureVector> {
        let mut extra = FeatureVector::new();
        extra.insert(
            RESPONSE_INDEX_FEATURE.to_string(),
            FeatureValue::from(response_index),
        );
        self.extract(sentence, history, true, &extra)
    }

    /// Full extraction.
    ///
    /// The result is seeded with `extra_fields`, then the sentence's own
    /// features, then (when `use_context` is set) the features of every
    /// history entry, each namespaced by its offset as `"-{offset} {key}"`.
    /// History entries are extracted without context of their own, so
    /// context is exactly one level deep.
    pub fn extract(
        &self,
        sentence: &str,
        history: &[String],
        use_context: bool,
        extra_fields: &FeatureVector,
    ) -> BrccsResult<FeatureVector> {
        let mut data = extra_fields.clone();
        self.sentence_features(sentence, &mut data)?;

        if use_context {
            for (offset, entry) in history.iter().enumerate() {
                let mut context = FeatureVector::new();
                self.sentence_features(entry, &mut context)?;
                for (key, value) in context {
                    data.insert(keys::context(offset, &key), value);
                }
            }
        }

        trace!(features = data.len(), history = history.len(), "extracted features");
        Ok(data)
    }

    /// Scalar and per-token features of one sentence, written into `data`.
    fn sentence_features(&self, sentence: &str, data: &mut FeatureVector) -> BrccsResult<()> {
        let tokens = self.toolkit.tokenize(sentence);
        let tagged = self.toolkit.tag(&tokens);
        if tagged.len() != tokens.len() {
            return Err(BrccsError::ToolkitContract {
                reason: format!(
                    "tagger returned {} pairs for {} tokens",
                    tagged.len(),
                    tokens.len()
                ),
            });
        }
        let n = tagged.len();

        data.insert(
            keys::TOTAL_CHARS.to_string(),
            FeatureValue::from(sentence.chars().count()),
        );
        data.insert(
            keys::TOTAL_WORDS.to_string(),
            FeatureValue::from(sentence.split(' ').count()),
        );
        data.insert(keys::TOTAL_TOKENS.to_string(), FeatureValue::from(n));

        for (i, (word, tag)) in tagged.iter().enumerate() {
            let (Some(first), Some(last)) = (word.chars().next(), word.chars().last()) else {
                return Err(BrccsError::ToolkitContract {
                    reason: format!("empty token at position {i} of {sentence:?}"),
                });
            };

            let families = [
                (keys::TAG, FeatureValue::from(tag.as_str())),
                (keys::TOKEN, FeatureValue::from(word.as_str())),
                (keys::POS, FeatureValue::from((word.clone(), tag.clone()))),
                (keys::TOKEN_CHARS, FeatureValue::from(word.chars().count())),
                (keys::TAG_STEM, FeatureValue::Text(tag.chars().take(2).collect())),
                (keys::TAG_BRANCH, FeatureValue::Text(tag.chars().skip(2).collect())),
                (keys::TOKEN_STEM, FeatureValue::Text(self.toolkit.stem(word))),
                (keys::FIRST_LETTER, FeatureValue::from(first)),
                (keys::LAST_LETTER, FeatureValue::from(last)),
            ];

            for (family, value) in families {
                data.insert(keys::forward(family, i), value.clone());
                data.insert(keys::backward(family, n - i), value);
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for FeatureExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeatureExtractor").finish_non_exhaustive()
    }
}
