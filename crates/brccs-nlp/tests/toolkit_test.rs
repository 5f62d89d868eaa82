use brccs_core::traits::INlpToolkit;
use brccs_nlp::DefaultToolkit;
use proptest::prelude::*;

#[test]
fn tokenize_then_tag_pairs_every_token() {
    let toolkit = DefaultToolkit::default();
    let tokens = toolkit.tokenize("How are you doing today, friend?");
    let tagged = toolkit.tag(&tokens);

    assert_eq!(tokens.len(), tagged.len());
    for (token, (tagged_token, tag)) in tokens.iter().zip(&tagged) {
        assert_eq!(token, tagged_token);
        assert!(!tag.is_empty());
    }
}

#[test]
fn stem_is_case_insensitive() {
    let toolkit = DefaultToolkit::default();
    assert_eq!(toolkit.stem("Talking"), toolkit.stem("talking"));
}

proptest! {
    #[test]
    fn tokens_are_never_empty(s in ".{0,120}") {
        let toolkit = DefaultToolkit::default();
        for token in toolkit.tokenize(&s) {
            prop_assert!(!token.is_empty());
        }
    }

    #[test]
    fn tagging_preserves_token_count(s in "[a-zA-Z ,.!?']{0,80}") {
        let toolkit = DefaultToolkit::default();
        let tokens = toolkit.tokenize(&s);
        prop_assert_eq!(toolkit.tag(&tokens).len(), tokens.len());
    }

    #[test]
    fn tokenization_is_deterministic(s in ".{0,80}") {
        let toolkit = DefaultToolkit::default();
        prop_assert_eq!(toolkit.tokenize(&s), toolkit.tokenize(&s));
    }
}
