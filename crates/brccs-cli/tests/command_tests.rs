use brccs_cli::commands::{parse_chat_line, ChatCommand};
use brccs_cli::input::{load_conversations, parse_conversations};

// ========================================================================
// Chat line parsing
// ========================================================================

#[test]
fn test_plain_text_is_a_sentence() {
    assert_eq!(
        parse_chat_line("  how are you \n"),
        ChatCommand::Say("how are you".to_string())
    );
}

#[test]
fn test_blank_line_is_empty() {
    assert_eq!(parse_chat_line("   \n"), ChatCommand::Empty);
}

#[test]
fn test_quit_aliases() {
    for line in ["/quit", "/exit", "/q"] {
        assert_eq!(parse_chat_line(line), ChatCommand::Quit);
    }
}

#[test]
fn test_use_switches_snapshot() {
    assert_eq!(
        parse_chat_line("/use small_talk"),
        ChatCommand::Switch("small_talk".to_string())
    );
}

#[test]
fn test_use_without_argument_is_unknown() {
    assert!(matches!(parse_chat_line("/use"), ChatCommand::Unknown(_)));
}

#[test]
fn test_history_and_help() {
    assert_eq!(parse_chat_line("/history"), ChatCommand::History);
    assert_eq!(parse_chat_line("/h"), ChatCommand::Help);
}

// ========================================================================
// Conversation files
// ========================================================================

#[test]
fn test_bare_array_is_accepted() {
    let conversations = parse_conversations(r#"[["hi", "hello"], ["a", "b", "c"]]"#).unwrap();
    assert_eq!(conversations.len(), 2);
    assert_eq!(conversations[1], vec!["a", "b", "c"]);
}

#[test]
fn test_fixture_layout_is_accepted() {
    let path = test_fixtures::fixture_path("conversations/small_talk.json");
    let conversations = load_conversations(&path).unwrap();
    assert_eq!(conversations.len(), 4);
    assert_eq!(conversations[0][0], "hi");
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, r#"{"conversations": "nope"}"#).unwrap();
    let err = load_conversations(&path).unwrap_err();
    assert!(err.to_string().contains("bad.json"));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_conversations(&dir.path().join("missing.json")).is_err());
}
