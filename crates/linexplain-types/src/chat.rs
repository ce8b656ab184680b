//! Chat session and message types.
//!
//! A session has no record of its own: it is the set of messages sharing a
//! client-chosen [`SessionId`]. Messages are append-only and ordered by
//! their `timestamp` within a session.

use serde::{Deserialize, Serialize};

use std::fmt;

// Re-export MessageRole from llm module (stored rows and model input share it).
pub use crate::llm::MessageRole;

/// Opaque, client-generated session identifier.
///
/// The only check performed is non-emptiness. Any caller may name any
/// session; there is no ownership or authentication attached to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Parse a session identifier, rejecting the empty string.
    pub fn parse(raw: impl Into<String>) -> Result<Self, String> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err("session id must not be empty".to_string());
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stored chat message.
///
/// `timestamp` is unix epoch milliseconds, strictly increasing within a
/// session (the store bumps it past the previous row on ties). `id` is the
/// store's insertion sequence number and breaks any remaining ordering ties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub session_id: SessionId,
    pub role: MessageRole,
    pub content: String,
    pub timestamp: i64,
}

/// A message to be appended to a session's history.
#[derive(Debug, Clone)]
pub struct NewMessage {
    pub session_id: SessionId,
    pub role: MessageRole,
    pub content: String,
}

impl NewMessage {
    pub fn user(session_id: SessionId, content: impl Into<String>) -> Self {
        Self {
            session_id,
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(session_id: SessionId, content: impl Into<String>) -> Self {
        Self {
            session_id,
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// The `{role, content}` pair returned by the history endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub role: MessageRole,
    pub content: String,
}

impl From<Message> for HistoryEntry {
    fn from(m: Message) -> Self {
        Self {
            role: m.role,
            content: m.content,
        }
    }
}
