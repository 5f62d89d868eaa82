//! Reading conversations from JSON files.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use brccs_core::models::Conversation;

/// Accepted layouts: a bare array of conversations, or an object with a
/// `conversations` array (extra keys such as `name` are ignored).
#[derive(Deserialize)]
#[serde(untagged)]
enum ConversationFile {
    Bare(Vec<Conversation>),
    Wrapped { conversations: Vec<Conversation> },
}

/// Parse conversations from JSON text.
pub fn parse_conversations(source: &str) -> Result<Vec<Conversation>> {
    let file: ConversationFile =
        serde_json::from_str(source).context("expected an array of conversations")?;
    Ok(match file {
        ConversationFile::Bare(conversations) => conversations,
        ConversationFile::Wrapped { conversations } => conversations,
    })
}

/// Read and parse a conversation file.
pub fn load_conversations(path: &Path) -> Result<Vec<Conversation>> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_conversations(&source).with_context(|| format!("invalid file {}", path.display()))
}
