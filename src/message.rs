// src/message.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub session_id: Option<String>,
}

/// Body of `POST /chat`. A body carrying `error` is always the error shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatResponse {
    Error {
        error: String,
    },
    Reply {
        response: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        session_id: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearSessionRequest {
    pub session_id: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Bot,
}

impl MessageRole {
    /// Label used when a bubble is drawn as plain text.
    pub fn label(self) -> &'static str {
        match self {
            MessageRole::User => "You",
            MessageRole::Bot => "Bot",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub content: String,
    pub origin: MessageRole,
}

impl Message {
    pub fn new(content: impl Into<String>, origin: MessageRole) -> Self {
        Self { content: content.into(), origin }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(content, MessageRole::User)
    }

    pub fn bot(content: impl Into<String>) -> Self {
        Self::new(content, MessageRole::Bot)
    }
}
