//! Porter2 (Snowball English) stemmer with an in-memory moka cache.
//!
//! Feature extraction stems every token of every sentence at every response
//! position, so the same handful of words are stemmed over and over.

use moka::sync::Cache;
use rust_stemmers::{Algorithm, Stemmer};

/// Stemmer that memoizes results keyed by the lowercased token.
pub struct CachedStemmer {
    stemmer: Stemmer,
    cache: Cache<String, String>,
}

impl CachedStemmer {
    /// Create a stemmer whose cache holds at most `max_entries` stems.
    pub fn new(max_entries: u64) -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
            cache: Cache::builder().max_capacity(max_entries).build(),
        }
    }

    pub fn stem(&self, token: &str) -> String {
        let lower = token.to_lowercase();
        if let Some(hit) = self.cache.get(&lower) {
            return hit;
        }
        let stem = self.stemmer.stem(&lower).into_owned();
        self.cache.insert(lower, stem.clone());
        stem
    }

    /// Number of cached stems.
    pub fn cached(&self) -> u64 {
        self.cache.entry_count()
    }
}

impl std::fmt::Debug for CachedStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedStemmer")
            .field("cached", &self.cached())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stems_inflections_to_common_root() {
        let stemmer = CachedStemmer::new(100);
        assert_eq!(stemmer.stem("running"), stemmer.stem("runs"));
        assert_eq!(stemmer.stem("Connected"), "connect");
    }

    #[test]
    fn cached_equals_uncached() {
        let stemmer = CachedStemmer::new(100);
        let first = stemmer.stem("generously");
        let second = stemmer.stem("generously");
        assert_eq!(first, second);
    }
}
