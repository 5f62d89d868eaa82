//! Treebank-style tokenizer: words, split contractions, punctuation as separate tokens.

use std::sync::LazyLock;

use regex::Regex;

static RE_TOKEN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\w+(?:['’\-]\w+)*|\.\.\.|[^\w\s]").ok());

/// Clitics split off the end of a word, lowercase, without the apostrophe.
const CLITICS: &[&str] = &["s", "re", "ve", "ll", "d", "m"];

/// Stateless tokenizer. Never produces empty tokens.
#[derive(Debug, Default, Clone, Copy)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let Some(re) = RE_TOKEN.as_ref() else {
            return text.split_whitespace().map(str::to_string).collect();
        };

        let mut tokens = Vec::new();
        for m in re.find_iter(text) {
            split_contraction(m.as_str(), &mut tokens);
        }
        tokens
    }
}

/// "don't" → "do" "n't", "it's" → "it" "'s". Anything else passes through.
fn split_contraction(word: &str, out: &mut Vec<String>) {
    let lower = word.to_lowercase();
    if lower.len() == word.len() && word.len() > 3 && lower.ends_with("n't") {
        let cut = word.len() - 3;
        out.push(word[..cut].to_string());
        out.push(word[cut..].to_string());
        return;
    }

    if let Some(pos) = word.rfind(['\'', '’']) {
        let apostrophe_len = word[pos..].chars().next().map_or(1, char::len_utf8);
        let suffix = &word[pos + apostrophe_len..];
        if pos > 0 && CLITICS.contains(&suffix.to_lowercase().as_str()) {
            out.push(word[..pos].to_string());
            out.push(word[pos..].to_string());
            return;
        }
    }

    out.push(word.to_string());
}
