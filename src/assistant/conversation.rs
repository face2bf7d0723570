//! Conversation turns exchanged with the assistant.

use serde::{Deserialize, Serialize};

/// Who authored a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A site visitor. Also accepted as `user` on the wire.
    #[serde(alias = "user")]
    Visitor,
    /// The assistant. Also accepted as `model` on the wire.
    #[serde(alias = "model")]
    Assistant,
}

/// One role-tagged message in a chat history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
}

impl ConversationTurn {
    /// A turn written by the visitor.
    #[must_use]
    pub fn visitor(content: impl Into<String>) -> Self {
        Self {
            role: Role::Visitor,
            content: content.into(),
        }
    }

    /// A turn written by the assistant.
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}
