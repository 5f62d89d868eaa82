use std::sync::Arc;

use brccs_core::models::{FeatureValue, FeatureVector};
use brccs_core::traits::INlpToolkit;
use brccs_core::BrccsError;
use brccs_features::{keys, FeatureExtractor};
use brccs_nlp::DefaultToolkit;
use proptest::prelude::*;

/// Whitespace tokenizer tagging every token "NNS", stem = first three chars.
struct SplitToolkit;

impl INlpToolkit for SplitToolkit {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    fn tag(&self, tokens: &[String]) -> Vec<(String, String)> {
        tokens.iter().map(|t| (t.clone(), "NNS".to_string())).collect()
    }

    fn stem(&self, token: &str) -> String {
        token.chars().take(3).collect()
    }
}

/// Breaks the toolkit contract in both ways the extractor checks.
struct BrokenToolkit {
    drop_tags: bool,
}

impl INlpToolkit for BrokenToolkit {
    fn tokenize(&self, _text: &str) -> Vec<String> {
        vec!["ok".to_string(), String::new()]
    }

    fn tag(&self, tokens: &[String]) -> Vec<(String, String)> {
        let tagged = tokens.iter().map(|t| (t.clone(), "NN".to_string()));
        if self.drop_tags {
            tagged.take(1).collect()
        } else {
            tagged.collect()
        }
    }

    fn stem(&self, token: &str) -> String {
        token.to_string()
    }
}

fn split_extractor() -> FeatureExtractor {
    FeatureExtractor::new(Arc::new(SplitToolkit))
}

fn text(s: &str) -> FeatureValue {
    FeatureValue::Text(s.to_string())
}

#[test]
fn scalar_features_are_always_present() {
    let features = split_extractor()
        .extract("how are you", &[], true, &FeatureVector::new())
        .unwrap();
    assert_eq!(features[keys::TOTAL_CHARS], FeatureValue::Number(11));
    assert_eq!(features[keys::TOTAL_WORDS], FeatureValue::Number(3));
    assert_eq!(features[keys::TOTAL_TOKENS], FeatureValue::Number(3));
}

#[test]
fn empty_sentence_has_only_scalars() {
    let features = split_extractor()
        .extract("", &[], true, &FeatureVector::new())
        .unwrap();
    assert_eq!(features.len(), 3);
    assert_eq!(features[keys::TOTAL_WORDS], FeatureValue::Number(1));
    assert_eq!(features[keys::TOTAL_TOKENS], FeatureValue::Number(0));
}

#[test]
fn per_token_families_use_exact_key_grammar() {
    let features = split_extractor()
        .extract("cats purr", &[], true, &FeatureVector::new())
        .unwrap();

    assert_eq!(features["tag #0"], text("NNS"));
    assert_eq!(features["tag #-2"], text("NNS"));
    assert_eq!(features["token #1"], text("purr"));
    assert_eq!(features["token #-1"], text("purr"));
    assert_eq!(
        features["pos #0"],
        FeatureValue::Pair("cats".into(), "NNS".into())
    );
    assert_eq!(features["token chars #0"], FeatureValue::Number(4));
    assert_eq!(features["tag stem #0"], text("NN"));
    assert_eq!(features["tag branch #0"], text("S"));
    assert_eq!(features["token stem #1"], text("pur"));
    assert_eq!(features["first letter #0"], text("c"));
    assert_eq!(features["last letter #0"], text("s"));

    // 3 scalars + 9 families * 2 directions * 2 tokens
    assert_eq!(features.len(), 3 + 9 * 2 * 2);
}

#[test]
fn extra_fields_are_seeded_into_the_result() {
    let features = split_extractor().extract_at("hi", &[], 7).unwrap();
    assert_eq!(features["response_index"], FeatureValue::Number(7));
}

#[test]
fn history_is_namespaced_by_offset() {
    let history = vec!["hello there".to_string(), "general kenobi".to_string()];
    let features = split_extractor().extract_at("hi", &history, 0).unwrap();

    assert_eq!(features["-0 token #0"], text("hello"));
    assert_eq!(features["-0 token #-1"], text("there"));
    assert_eq!(features["-1 token #1"], text("kenobi"));
    assert_eq!(features["-1 total tokens"], FeatureValue::Number(2));
    // Context vectors carry no extra fields and never nest.
    assert!(!features.contains_key("-0 response_index"));
    assert!(!features.keys().any(|k| k.starts_with("-0 -") || k.starts_with("-1 -")));
}

#[test]
fn context_is_skipped_when_disabled() {
    let history = vec!["hello there".to_string()];
    let features = split_extractor()
        .extract("hi", &history, false, &FeatureVector::new())
        .unwrap();
    assert!(!features.keys().any(|k| k.starts_with("-0 ")));
}

#[test]
fn empty_token_is_a_contract_violation() {
    let extractor = FeatureExtractor::new(Arc::new(BrokenToolkit { drop_tags: false }));
    let err = extractor.extract_at("anything", &[], 0).unwrap_err();
    assert!(matches!(err, BrccsError::ToolkitContract { .. }));
}

#[test]
fn tag_count_mismatch_is_a_contract_violation() {
    let extractor = FeatureExtractor::new(Arc::new(BrokenToolkit { drop_tags: true }));
    let err = extractor.extract_at("anything", &[], 0).unwrap_err();
    assert!(matches!(err, BrccsError::ToolkitContract { .. }));
}

#[test]
fn default_toolkit_features_cover_every_token() {
    let extractor = FeatureExtractor::new(Arc::new(DefaultToolkit::default()));
    let features = extractor.extract_at("I don't know!", &[], 0).unwrap();
    // I / do / n't / know / !
    assert_eq!(features[keys::TOTAL_TOKENS], FeatureValue::Number(5));
    assert_eq!(features["token #2"], text("n't"));
    assert_eq!(features["token #-1"], text("!"));
}

proptest! {
    #[test]
    fn extraction_is_deterministic(
        sentence in "[a-zA-Z ,.?']{0,60}",
        history in proptest::collection::vec("[a-z ]{0,30}", 0..4),
        index in 0usize..60,
    ) {
        let extractor = FeatureExtractor::new(Arc::new(DefaultToolkit::default()));
        let a = extractor.extract_at(&sentence, &history, index).unwrap();
        let b = extractor.extract_at(&sentence, &history, index).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn forward_and_backward_keys_mirror(sentence in "[a-zA-Z ,.!?']{1,60}") {
        let toolkit = DefaultToolkit::default();
        let n = toolkit.tokenize(&sentence).len();
        let extractor = FeatureExtractor::new(Arc::new(toolkit));
        let features = extractor
            .extract(&sentence, &[], false, &FeatureVector::new())
            .unwrap();

        for i in 0..n {
            for family in keys::TOKEN_FAMILIES {
                let forward = features.get(&keys::forward(family, i));
                let backward = features.get(&keys::backward(family, n - i));
                prop_assert!(forward.is_some());
                prop_assert_eq!(forward, backward);
            }
        }
    }
}
