//! Read-only view of an inbound chat message
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use serenity::model::channel::Message;

/// The parts of a gateway message the dispatcher looks at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    pub author_id: u64,
    pub author_name: String,
    pub channel_id: u64,
    pub content: String,
}

impl IncomingMessage {
    pub fn new(
        author_id: u64,
        author_name: impl Into<String>,
        channel_id: u64,
        content: impl Into<String>,
    ) -> Self {
        Self {
            author_id,
            author_name: author_name.into(),
            channel_id,
            content: content.into(),
        }
    }
}

impl From<&Message> for IncomingMessage {
    fn from(msg: &Message) -> Self {
        Self {
            author_id: msg.author.id.0,
            author_name: msg.author.name.clone(),
            channel_id: msg.channel_id.0,
            content: msg.content.clone(),
        }
    }
}

/// A prefixed command split into its name and arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub name: String,
    pub args: Vec<String>,
}

/// Parse `content` as a prefixed command
///
/// Returns None when the prefix is missing or nothing follows it.
/// Whitespace between the prefix and the command name is ignored.
pub fn parse_command(content: &str, prefix: &str) -> Option<ParsedCommand> {
    let rest = content.strip_prefix(prefix)?;
    let mut tokens = rest.split_whitespace();
    let name = tokens.next()?.to_string();
    let args = tokens.map(str::to_string).collect();
    Some(ParsedCommand { name, args })
}
