//! DebateTopic entity - a controversial claim and the bot's stance on it

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::DebateError;

/// The side the bot argues for a topic, fixed for the whole conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stance {
    For,
    Against,
}

impl std::fmt::Display for Stance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stance::For => write!(f, "for"),
            Stance::Against => write!(f, "against"),
        }
    }
}

/// A controversial topic the bot can debate about.
///
/// Immutable value object: a fallback topic with an intro phrase is a new
/// object derived from a base topic, never a mutation of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebateTopic {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub stance: Stance,
    pub key_arguments: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub metadata: HashMap<String, String>,
}

impl DebateTopic {
    /// Create a new debate topic.
    ///
    /// Title and description are trimmed; both must be non-empty and there
    /// must be at least one key argument.
    pub fn new(
        title: &str,
        description: &str,
        stance: Stance,
        key_arguments: Vec<String>,
    ) -> Result<Self, DebateError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(DebateError::EmptyTitle);
        }
        let description = description.trim();
        if description.is_empty() {
            return Err(DebateError::EmptyDescription);
        }
        if key_arguments.is_empty() || key_arguments.iter().any(|a| a.trim().is_empty()) {
            return Err(DebateError::NoKeyArguments);
        }

        Ok(DebateTopic {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: description.to_string(),
            stance,
            key_arguments,
            created_at: Utc::now(),
            metadata: HashMap::new(),
        })
    }

    /// Human-readable description of the bot's stance.
    pub fn stance_description(&self) -> String {
        let stance_word = match self.stance {
            Stance::For => "supports",
            Stance::Against => "opposes",
        };
        format!("The bot {} the position: {}", stance_word, self.title)
    }

    /// Derive a fallback topic with a conversational intro phrase.
    ///
    /// The new topic keeps this topic's id, created_at, description, stance
    /// and a copy of the argument list. The title becomes
    /// `"{intro} {lowercased original title}"` and the metadata records that
    /// this is a fallback along with the original title.
    pub fn with_fallback_intro(&self, intro: &str) -> DebateTopic {
        let mut metadata = HashMap::new();
        metadata.insert("is_fallback".to_string(), "true".to_string());
        metadata.insert("original_title".to_string(), self.title.clone());

        DebateTopic {
            id: self.id,
            title: format!("{} {}", intro, self.title.to_lowercase()),
            description: self.description.clone(),
            stance: self.stance,
            key_arguments: self.key_arguments.clone(),
            created_at: self.created_at,
            metadata,
        }
    }
}
