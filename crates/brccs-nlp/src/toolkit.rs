//! [`DefaultToolkit`] — bundles tokenizer, tagger, and stemmer behind `INlpToolkit`.

use brccs_core::config::NlpConfig;
use brccs_core::traits::INlpToolkit;

use crate::stemmer::CachedStemmer;
use crate::tagger::HeuristicTagger;
use crate::tokenizer::Tokenizer;

/// The toolkit used unless the caller supplies its own.
#[derive(Debug)]
pub struct DefaultToolkit {
    tokenizer: Tokenizer,
    tagger: HeuristicTagger,
    stemmer: CachedStemmer,
}

impl DefaultToolkit {
    pub fn new(config: &NlpConfig) -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            tagger: HeuristicTagger::new(),
            stemmer: CachedStemmer::new(config.stem_cache_capacity),
        }
    }
}

impl Default for DefaultToolkit {
    fn default() -> Self {
        Self::new(&NlpConfig::default())
    }
}

impl INlpToolkit for DefaultToolkit {
    fn tokenize(&self, text: &str) -> Vec<String> {
        self.tokenizer.tokenize(text)
    }

    fn tag(&self, tokens: &[String]) -> Vec<(String, String)> {
        self.tagger.tag(tokens)
    }

    fn stem(&self, token: &str) -> String {
        self.stemmer.stem(token)
    }
}
