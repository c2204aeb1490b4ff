//! Chat transcript kept alongside the dialog state.
//!
//! Only presentation layers read it; scoring never does.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Bot,
    User,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Bot => write!(f, "bot"),
            Role::User => write!(f, "user"),
        }
    }
}

/// One line of the conversation.
///
/// Ids are sequential within a session and restart at 1 after a reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub id: u32,
    pub role: Role,
    pub content: String,
    /// Options offered with a bot question; empty for user messages
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    fn next_id(&self) -> u32 {
        self.messages.len() as u32 + 1
    }

    pub(crate) fn push_bot(&mut self, content: &str, options: &[&str]) {
        let message = ChatMessage {
            id: self.next_id(),
            role: Role::Bot,
            content: content.to_string(),
            options: options.iter().map(|option| option.to_string()).collect(),
        };
        self.messages.push(message);
    }

    pub(crate) fn push_user(&mut self, content: &str) {
        let message = ChatMessage {
            id: self.next_id(),
            role: Role::User,
            content: content.to_string(),
            options: Vec::new(),
        };
        self.messages.push(message);
    }

    pub(crate) fn clear(&mut self) {
        self.messages.clear();
    }

    pub(crate) fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}
