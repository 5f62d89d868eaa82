//! Feature key grammar. Classifiers learn associations by exact key identity,
//! so these strings must never change.

pub const TOTAL_CHARS: &str = "total chars";
pub const TOTAL_WORDS: &str = "total words";
pub const TOTAL_TOKENS: &str = "total tokens";

pub const TAG: &str = "tag";
pub const TOKEN: &str = "token";
pub const POS: &str = "pos";
pub const TOKEN_CHARS: &str = "token chars";
pub const TAG_STEM: &str = "tag stem";
pub const TAG_BRANCH: &str = "tag branch";
pub const TOKEN_STEM: &str = "token stem";
pub const FIRST_LETTER: &str = "first letter";
pub const LAST_LETTER: &str = "last letter";

/// Every per-token family, in emission order.
pub const TOKEN_FAMILIES: [&str; 9] = [
    TAG,
    TOKEN,
    POS,
    TOKEN_CHARS,
    TAG_STEM,
    TAG_BRANCH,
    TOKEN_STEM,
    FIRST_LETTER,
    LAST_LETTER,
];

/// `"{family} #{index}"`, counted from the start of the sentence.
pub fn forward(family: &str, index: usize) -> String {
    format!("{family} #{index}")
}

/// `"{family} #-{distance}"`, where `distance = n - index` counts from the end.
pub fn backward(family: &str, distance: usize) -> String {
    format!("{family} #-{distance}")
}

/// `"-{offset} {key}"`, namespacing a key by its history offset.
pub fn context(offset: usize, key: &str) -> String {
    format!("-{offset} {key}")
}
