//! ResponseGenerator — word-by-word response assembly with repetition
//! suppression.

use brccs_core::config::GenerationConfig;
use brccs_core::constants::{DEFAULT_RECURSION_LIMIT, DEFAULT_RESPONSE_LIMIT};
use brccs_core::errors::BrccsResult;
use brccs_core::models::Label;
use brccs_core::traits::IClassifier;
use brccs_features::FeatureExtractor;
use tracing::trace;

/// Per-call generation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RespondOptions {
    /// Whose history to use as context and extend with this exchange.
    pub speaker: Option<String>,
    pub use_history: bool,
    /// Persist the exchange when storage is configured.
    pub commit_history: bool,
    /// Hard cap on response words.
    pub limit: usize,
    /// Maximum consecutive repeats of one word.
    pub recursion_limit: usize,
}

impl Default for RespondOptions {
    fn default() -> Self {
        Self {
            speaker: None,
            use_history: true,
            commit_history: true,
            limit: DEFAULT_RESPONSE_LIMIT,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }
}

impl RespondOptions {
    pub fn from_config(config: &GenerationConfig) -> Self {
        Self {
            limit: config.limit,
            recursion_limit: config.recursion_limit,
            ..Self::default()
        }
    }

    pub fn for_speaker(mut self, speaker: impl Into<String>) -> Self {
        self.speaker = Some(speaker.into());
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_recursion_limit(mut self, recursion_limit: usize) -> Self {
        self.recursion_limit = recursion_limit;
        self
    }
}

/// Asks a classifier for one word per response position until it answers
/// with a terminator or a limit is hit.
#[derive(Clone)]
pub struct ResponseGenerator {
    extractor: FeatureExtractor,
}

impl ResponseGenerator {
    pub fn new(extractor: FeatureExtractor) -> Self {
        Self { extractor }
    }

    /// Generate the words of a response to `sentence`.
    ///
    /// When one word repeats more than `recursion_limit` times in a row, the
    /// run is cut back to a single copy and generation stops. The repeat
    /// allowance shrinks as the response approaches `limit`.
    pub fn generate(
        &self,
        classifier: &dyn IClassifier,
        sentence: &str,
        history: &[String],
        limit: usize,
        recursion_limit: usize,
    ) -> BrccsResult<Vec<String>> {
        let mut response: Vec<String> = Vec::new();
        if limit == 0 {
            return Ok(response);
        }

        let mut recursion_limit = recursion_limit;
        let mut last: Option<String> = None;
        let mut recurse = 0usize;
        let mut index = 0usize;

        loop {
            let features = self.extractor.extract_at(sentence, history, index)?;
            let word = match classifier.classify(&features)? {
                Label::Terminator => break,
                Label::Word(word) => word,
            };

            if last.as_deref() == Some(word.as_str()) {
                recurse += 1;
            } else {
                recurse = 0;
            }

            if recurse > recursion_limit {
                let keep = response.len().saturating_sub(recurse - 1);
                response.truncate(keep);
                trace!(word = %word, repeats = recurse, "repetition cut");
                break;
            }

            response.push(word.clone());
            last = Some(word);
            index += 1;

            if response.len() >= limit {
                break;
            }
            recursion_limit = recursion_limit.min(limit - response.len());
        }

        Ok(response)
    }
}
