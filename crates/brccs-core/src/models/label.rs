use std::fmt;

use serde::{Deserialize, Serialize};

/// Classifier output: a word to emit at the current position, or end of response.
///
/// `Terminator` is a dedicated variant so no real word can collide with it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    Word(String),
    Terminator,
}

impl Label {
    pub fn word(word: impl Into<String>) -> Self {
        Label::Word(word.into())
    }

    pub fn is_terminator(&self) -> bool {
        matches!(self, Label::Terminator)
    }

    /// The word carried by this label, if any.
    pub fn as_word(&self) -> Option<&str> {
        match self {
            Label::Word(w) => Some(w),
            Label::Terminator => None,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Word(w) => f.write_str(w),
            Label::Terminator => f.write_str("<end>"),
        }
    }
}
