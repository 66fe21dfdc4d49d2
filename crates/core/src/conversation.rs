//! Conversation message types passed in by the chat backend

use serde::{Deserialize, Serialize};

/// Speaker of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Visitor typing into the widget
    User,
    /// The realtor's assistant
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for MessageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single message of a chat transcript
///
/// `content` is optional because tool-call-only assistant messages carry no
/// text. Missing content is treated as absent text everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub role: MessageRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl ConversationMessage {
    /// Create a new message
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: Some(content.into()),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }

    /// Create a message without any text
    pub fn empty(role: MessageRole) -> Self {
        Self {
            role,
            content: None,
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == MessageRole::User
    }

    /// Non-empty text of the message, if any
    pub fn text(&self) -> Option<&str> {
        self.content.as_deref().filter(|c| !c.is_empty())
    }
}

/// Join the text of every user message with a single space
///
/// Assistant messages and messages without text are skipped. Returns `None`
/// when no user message carries text.
pub fn user_text(messages: &[ConversationMessage]) -> Option<String> {
    let parts: Vec<&str> = messages
        .iter()
        .filter(|m| m.is_user())
        .filter_map(|m| m.text())
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_text_skips_assistant_and_empty() {
        let messages = vec![
            ConversationMessage::assistant("Hi! How can I help?"),
            ConversationMessage::user("Looking for a condo"),
            ConversationMessage::empty(MessageRole::User),
            ConversationMessage::user(""),
            ConversationMessage::user("near the water"),
        ];

        assert_eq!(
            user_text(&messages).as_deref(),
            Some("Looking for a condo near the water")
        );
    }

    #[test]
    fn test_user_text_none_without_user_messages() {
        assert!(user_text(&[]).is_none());
        assert!(user_text(&[ConversationMessage::assistant("hello")]).is_none());
    }

    #[test]
    fn test_deserialize_missing_content() {
        let msg: ConversationMessage = serde_json::from_str(r#"{"role":"user"}"#).unwrap();
        assert_eq!(msg.role, MessageRole::User);
        assert!(msg.text().is_none());
    }
}
