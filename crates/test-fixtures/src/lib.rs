//! Conversation fixtures shared by the workspace's tests.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// A named set of conversations used to build a snapshot in tests.
#[derive(Debug, Clone, Deserialize)]
pub struct ConversationFixture {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub conversations: Vec<Vec<String>>,
}

impl ConversationFixture {
    /// Every distinct whitespace-separated word in the fixture.
    pub fn vocabulary(&self) -> std::collections::BTreeSet<String> {
        self.conversations
            .iter()
            .flatten()
            .flat_map(|s| s.split_whitespace())
            .map(str::to_string)
            .collect()
    }
}

/// Root directory of the fixture files.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load `conversations/{name}.json`.
pub fn load_conversations(name: &str) -> ConversationFixture {
    load_fixture(&format!("conversations/{name}.json"))
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}
