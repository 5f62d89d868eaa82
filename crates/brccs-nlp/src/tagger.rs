//! Lexicon + suffix-rule part-of-speech tagger producing Penn Treebank tags.

use std::collections::HashMap;

/// Closed-class words and a few frequent open-class ones.
const LEXICON: &[(&str, &str)] = &[
    // Determiners
    ("the", "DT"), ("a", "DT"), ("an", "DT"), ("this", "DT"), ("that", "DT"),
    ("these", "DT"), ("those", "DT"), ("every", "DT"), ("each", "DT"), ("some", "DT"),
    ("any", "DT"), ("no", "DT"), ("another", "DT"), ("all", "DT"), ("both", "DT"),
    // Pronouns
    ("i", "PRP"), ("you", "PRP"), ("he", "PRP"), ("she", "PRP"), ("it", "PRP"),
    ("we", "PRP"), ("they", "PRP"), ("me", "PRP"), ("him", "PRP"), ("her", "PRP"),
    ("us", "PRP"), ("them", "PRP"), ("myself", "PRP"), ("yourself", "PRP"),
    ("my", "PRP$"), ("your", "PRP$"), ("his", "PRP$"), ("its", "PRP$"),
    ("our", "PRP$"), ("their", "PRP$"),
    // Wh-words
    ("what", "WP"), ("who", "WP"), ("whom", "WP"), ("whose", "WP$"), ("which", "WDT"),
    ("how", "WRB"), ("when", "WRB"), ("where", "WRB"), ("why", "WRB"),
    // Prepositions
    ("in", "IN"), ("on", "IN"), ("at", "IN"), ("by", "IN"), ("for", "IN"),
    ("with", "IN"), ("about", "IN"), ("against", "IN"), ("between", "IN"),
    ("into", "IN"), ("through", "IN"), ("during", "IN"), ("before", "IN"),
    ("after", "IN"), ("above", "IN"), ("below", "IN"), ("from", "IN"), ("of", "IN"),
    ("off", "IN"), ("over", "IN"), ("under", "IN"), ("like", "IN"), ("if", "IN"),
    ("because", "IN"), ("than", "IN"), ("to", "TO"),
    // Conjunctions
    ("and", "CC"), ("or", "CC"), ("but", "CC"), ("nor", "CC"), ("yet", "CC"),
    // Modals
    ("can", "MD"), ("could", "MD"), ("may", "MD"), ("might", "MD"), ("must", "MD"),
    ("shall", "MD"), ("should", "MD"), ("will", "MD"), ("would", "MD"),
    // Auxiliaries
    ("am", "VBP"), ("are", "VBP"), ("is", "VBZ"), ("was", "VBD"), ("were", "VBD"),
    ("be", "VB"), ("been", "VBN"), ("being", "VBG"), ("have", "VBP"), ("has", "VBZ"),
    ("had", "VBD"), ("do", "VBP"), ("does", "VBZ"), ("did", "VBD"),
    // Adverbs
    ("not", "RB"), ("never", "RB"), ("very", "RB"), ("too", "RB"), ("also", "RB"),
    ("just", "RB"), ("only", "RB"), ("here", "RB"), ("now", "RB"), ("then", "RB"),
    ("so", "RB"), ("again", "RB"), ("up", "RP"), ("down", "RP"), ("out", "RP"),
    ("there", "EX"),
    // Interjections
    ("hi", "UH"), ("hello", "UH"), ("hey", "UH"), ("bye", "UH"), ("goodbye", "UH"),
    ("thanks", "UH"), ("please", "UH"), ("ok", "UH"), ("okay", "UH"), ("yes", "UH"),
    ("oh", "UH"), ("wow", "UH"),
    // Frequent adjectives
    ("good", "JJ"), ("fine", "JJ"), ("great", "JJ"), ("bad", "JJ"), ("new", "JJ"),
    ("old", "JJ"), ("nice", "JJ"), ("sure", "JJ"),
];

/// Suffix → tag, checked in order against words longer than the suffix.
const SUFFIX_RULES: &[(&str, &str)] = &[
    ("ing", "VBG"),
    ("ness", "NN"),
    ("ment", "NN"),
    ("tion", "NN"),
    ("sion", "NN"),
    ("ity", "NN"),
    ("ous", "JJ"),
    ("ful", "JJ"),
    ("able", "JJ"),
    ("ible", "JJ"),
    ("ive", "JJ"),
    ("ical", "JJ"),
    ("less", "JJ"),
    ("ish", "JJ"),
    ("est", "JJS"),
    ("ly", "RB"),
    ("ed", "VBD"),
];

/// Deterministic tagger. Every token gets exactly one tag.
#[derive(Debug, Clone)]
pub struct HeuristicTagger {
    lexicon: HashMap<&'static str, &'static str>,
}

impl HeuristicTagger {
    pub fn new() -> Self {
        Self {
            lexicon: LEXICON.iter().copied().collect(),
        }
    }

    pub fn tag(&self, tokens: &[String]) -> Vec<(String, String)> {
        tokens
            .iter()
            .enumerate()
            .map(|(i, token)| (token.clone(), self.tag_one(token, i == 0).to_string()))
            .collect()
    }

    fn tag_one(&self, token: &str, sentence_start: bool) -> &'static str {
        if let Some(tag) = punctuation_tag(token) {
            return tag;
        }
        if is_number(token) {
            return "CD";
        }

        let lower = token.to_lowercase();
        if let Some(tag) = clitic_tag(&lower) {
            return tag;
        }
        if let Some(&tag) = self.lexicon.get(lower.as_str()) {
            return tag;
        }
        if !sentence_start && token.chars().next().is_some_and(char::is_uppercase) {
            return "NNP";
        }

        let len = lower.chars().count();
        for &(suffix, tag) in SUFFIX_RULES {
            if len > suffix.len() + 1 && lower.ends_with(suffix) {
                return tag;
            }
        }
        if len > 3 && lower.ends_with('s') && !lower.ends_with("ss") && !lower.ends_with("us") {
            return "NNS";
        }
        "NN"
    }
}

impl Default for HeuristicTagger {
    fn default() -> Self {
        Self::new()
    }
}

fn punctuation_tag(token: &str) -> Option<&'static str> {
    let tag = match token {
        "." | "!" | "?" => ".",
        "," => ",",
        ":" | ";" | "..." | "-" | "--" => ":",
        "(" | "[" | "{" => "(",
        ")" | "]" | "}" => ")",
        "\"" | "'" | "`" => "''",
        "$" => "$",
        "#" => "#",
        _ if token.chars().all(|c| !c.is_alphanumeric()) => "SYM",
        _ => return None,
    };
    Some(tag)
}

fn clitic_tag(lower: &str) -> Option<&'static str> {
    let normalized = lower.replace('’', "'");
    let tag = match normalized.as_str() {
        "n't" => "RB",
        "'s" => "POS",
        "'re" | "'ve" | "'m" => "VBP",
        "'ll" | "'d" => "MD",
        _ => return None,
    };
    Some(tag)
}

fn is_number(token: &str) -> bool {
    token.chars().next().is_some_and(|c| c.is_ascii_digit())
        && token.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(words: &[&str]) -> Vec<String> {
        let tokens: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        HeuristicTagger::new()
            .tag(&tokens)
            .into_iter()
            .map(|(_, t)| t)
            .collect()
    }

    #[test]
    fn tags_closed_class_words() {
        assert_eq!(tags(&["how", "are", "you"]), vec!["WRB", "VBP", "PRP"]);
    }

    #[test]
    fn tags_punctuation_and_numbers() {
        assert_eq!(tags(&["42", ",", "?"]), vec!["CD", ",", "."]);
    }

    #[test]
    fn uses_suffix_rules() {
        assert_eq!(
            tags(&["running", "quickly", "happiness", "cats"]),
            vec!["VBG", "RB", "NN", "NNS"]
        );
    }

    #[test]
    fn capitalized_word_mid_sentence_is_proper_noun() {
        assert_eq!(tags(&["Hello", "Gustavo"]), vec!["UH", "NNP"]);
    }
}
