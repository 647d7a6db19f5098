//! Message entity - a single utterance in a debate conversation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::DebateError;

/// Who produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Bot => write!(f, "bot"),
        }
    }
}

/// A single message in a conversation. Immutable after creation; owned
/// exclusively by its conversation's ordered message log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub content: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Create a new message with trimmed content.
    ///
    /// Fails with [`DebateError::EmptyMessage`] when the content is empty or
    /// whitespace-only.
    pub fn new(content: &str, role: Role) -> Result<Self, DebateError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(DebateError::EmptyMessage);
        }

        Ok(Message {
            id: Uuid::new_v4(),
            content: trimmed.to_string(),
            role,
            created_at: Utc::now(),
        })
    }
}
