//! # brccs-nlp
//!
//! Pure-Rust implementation of [`INlpToolkit`](brccs_core::traits::INlpToolkit):
//! tokenization, part-of-speech tagging, and stemming.

pub mod stemmer;
pub mod tagger;
pub mod tokenizer;
pub mod toolkit;

pub use stemmer::CachedStemmer;
pub use tagger::HeuristicTagger;
pub use tokenizer::Tokenizer;
pub use toolkit::DefaultToolkit;
