//! In-memory conversation repository

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::features::conversation::Conversation;

use super::{ConversationRepository, StorageError};

/// Process-local repository backed by a concurrent map. Cheap to clone;
/// clones share the same underlying storage.
#[derive(Clone, Default)]
pub struct MemoryConversationRepository {
    conversations: std::sync::Arc<DashMap<Uuid, Conversation>>,
}

impl MemoryConversationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored conversations.
    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }
}

#[async_trait]
impl ConversationRepository for MemoryConversationRepository {
    async fn save(&self, conversation: &Conversation) -> Result<(), StorageError> {
        self.conversations
            .insert(conversation.id(), conversation.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Conversation>, StorageError> {
        Ok(self.conversations.get(&id).map(|c| c.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StorageError> {
        Ok(self.conversations.remove(&id).is_some())
    }

    async fn exists(&self, id: Uuid) -> Result<bool, StorageError> {
        Ok(self.conversations.contains_key(&id))
    }
}
