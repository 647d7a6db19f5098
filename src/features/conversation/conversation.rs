//! Conversation entity - the ordered message log and its debate topic

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::DebateError;

use super::message::{Message, Role};
use super::topic::DebateTopic;

/// A debate conversation between one user and the bot.
///
/// The message log is append-only and strictly alternates roles. The topic
/// starts unassigned and is set on the first turn the topic selection policy
/// produces one; single assignment is the orchestration layer's business,
/// the entity itself stays permissive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    id: Uuid,
    topic: Option<DebateTopic>,
    created_at: DateTime<Utc>,
    messages: Vec<Message>,
}

impl Conversation {
    /// Create a new, empty conversation with no topic assigned.
    pub fn new() -> Self {
        Conversation {
            id: Uuid::new_v4(),
            topic: None,
            created_at: Utc::now(),
            messages: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn topic(&self) -> Option<&DebateTopic> {
        self.topic.as_ref()
    }

    /// Assign the debate topic for this conversation.
    pub fn set_topic(&mut self, topic: DebateTopic) {
        self.topic = Some(topic);
    }

    /// Append a message to the log.
    ///
    /// Messages must alternate between user and bot; appending two
    /// consecutive messages with the same role fails and leaves the log
    /// untouched.
    pub fn push(&mut self, message: Message) -> Result<(), DebateError> {
        if let Some(last) = self.messages.last() {
            if last.role == message.role {
                return Err(DebateError::ConsecutiveMessages { role: message.role });
            }
        }
        self.messages.push(message);
        Ok(())
    }

    /// All messages in chronological order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The most recent messages, up to `limit`, in chronological order.
    pub fn recent_messages(&self, limit: usize) -> &[Message] {
        let start = self.messages.len().saturating_sub(limit);
        &self.messages[start..]
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// One-line summary used for logging.
    pub fn summary(&self) -> String {
        match &self.topic {
            Some(topic) => format!(
                "conversation about '{}' ({}) with {} messages",
                topic.title,
                topic.stance,
                self.messages.len()
            ),
            None => format!("conversation with {} messages, no topic yet", self.messages.len()),
        }
    }

    /// Role the next message must have to keep the log alternating, if the
    /// log is non-empty.
    pub fn expected_next_role(&self) -> Option<Role> {
        self.messages.last().map(|m| match m.role {
            Role::User => Role::Bot,
            Role::Bot => Role::User,
        })
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}
