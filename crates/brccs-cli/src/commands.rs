/// One line typed into `brccs chat`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    /// Leave the chat.
    Quit,
    /// Show the speaker's history so far.
    History,
    /// Switch to another snapshot.
    Switch(String),
    /// Show available commands.
    Help,
    /// Slash command we don't know.
    Unknown(String),
    /// Blank line; nothing to do.
    Empty,
    /// Anything else is a sentence to respond to.
    Say(String),
}

pub const HELP: &str = "\
Commands:
  /history         show this speaker's history
  /use <snapshot>  respond with another snapshot
  /help            show this message
  /quit            leave";

pub fn parse_chat_line(line: &str) -> ChatCommand {
    let line = line.trim();
    if line.is_empty() {
        return ChatCommand::Empty;
    }
    let Some(command) = line.strip_prefix('/') else {
        return ChatCommand::Say(line.to_string());
    };

    let mut parts = command.splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or_default();
    let arg = parts.next().map(str::trim).unwrap_or_default();
    match name {
        "quit" | "exit" | "q" => ChatCommand::Quit,
        "history" => ChatCommand::History,
        "help" | "h" => ChatCommand::Help,
        "use" if !arg.is_empty() => ChatCommand::Switch(arg.to_string()),
        _ => ChatCommand::Unknown(line.to_string()),
    }
}
