//! # Debate Orchestrator
//!
//! Top-level flow for starting and continuing a debate with one user.

use std::sync::Arc;

use log::{debug, info, warn};
use uuid::Uuid;

use crate::core::error::DebateError;
use crate::features::conversation::{Conversation, Message, Role};
use crate::features::responses::ResponseGenerator;
use crate::llm::LlmBackend;
use crate::storage::ConversationRepository;

/// Longest user message accepted per turn.
pub const MAX_MESSAGE_LEN: usize = 1000;

/// Coordinates repository access and response generation for a debate.
///
/// Response generation itself never fails; errors surfacing from the
/// orchestrator are validation or storage problems.
pub struct DebateOrchestrator {
    repository: Arc<dyn ConversationRepository>,
    generator: ResponseGenerator,
}

impl DebateOrchestrator {
    pub fn new(repository: Arc<dyn ConversationRepository>, backend: LlmBackend) -> Self {
        DebateOrchestrator {
            repository,
            generator: ResponseGenerator::new(backend),
        }
    }

    /// Start a new conversation from the user's first message.
    ///
    /// The returned conversation holds the user message and the bot's reply,
    /// and has already been persisted.
    pub async fn start_conversation(&self, user_message: &str) -> Result<Conversation, DebateError> {
        let trimmed = validate_message(user_message)?;

        let request_id = Uuid::new_v4();
        info!("[{request_id}] Starting conversation");

        let mut conversation = Conversation::new();
        conversation.push(Message::new(trimmed, Role::User)?)?;

        let reply = self.generator.next_reply(&mut conversation, trimmed).await;
        conversation.push(Message::new(&reply, Role::Bot)?)?;

        self.repository.save(&conversation).await?;

        debug!(
            "[{request_id}] Conversation {} created, topic: {:?}",
            conversation.id(),
            conversation.topic().map(|t| t.title.as_str())
        );
        Ok(conversation)
    }

    /// Append a user message to an existing conversation and reply to it.
    pub async fn continue_conversation(
        &self,
        conversation_id: &str,
        user_message: &str,
    ) -> Result<Conversation, DebateError> {
        let trimmed = validate_message(user_message)?;

        let id = Uuid::parse_str(conversation_id)
            .map_err(|_| DebateError::InvalidConversationId(conversation_id.to_string()))?;

        let request_id = Uuid::new_v4();
        debug!("[{request_id}] Continuing conversation {id}");

        let mut conversation = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(DebateError::ConversationNotFound(id))?;

        conversation.push(Message::new(trimmed, Role::User)?)?;

        let reply = self.generator.next_reply(&mut conversation, trimmed).await;
        if let Err(e) = conversation.push(Message::new(&reply, Role::Bot)?) {
            warn!("[{request_id}] Dropping bot reply: {e}");
            return Err(e);
        }

        self.repository.save(&conversation).await?;

        info!(
            "[{request_id}] Conversation {id} now has {} messages",
            conversation.len()
        );
        Ok(conversation)
    }

    /// Fetch a conversation without modifying it.
    pub async fn get_conversation(
        &self,
        conversation_id: &str,
    ) -> Result<Conversation, DebateError> {
        let id = Uuid::parse_str(conversation_id)
            .map_err(|_| DebateError::InvalidConversationId(conversation_id.to_string()))?;

        self.repository
            .get_by_id(id)
            .await?
            .ok_or(DebateError::ConversationNotFound(id))
    }

    /// Delete a conversation. Returns whether it existed.
    pub async fn delete_conversation(&self, conversation_id: &str) -> Result<bool, DebateError> {
        let id = Uuid::parse_str(conversation_id)
            .map_err(|_| DebateError::InvalidConversationId(conversation_id.to_string()))?;

        Ok(self.repository.delete(id).await?)
    }
}

fn validate_message(user_message: &str) -> Result<&str, DebateError> {
    let trimmed = user_message.trim();
    if trimmed.is_empty() {
        return Err(DebateError::EmptyMessage);
    }
    if trimmed.chars().count() > MAX_MESSAGE_LEN {
        return Err(DebateError::MessageTooLong {
            max: MAX_MESSAGE_LEN,
        });
    }
    Ok(trimmed)
}
