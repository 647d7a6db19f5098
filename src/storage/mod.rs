//! # Storage
//!
//! Conversation persistence behind the [`ConversationRepository`] trait.
//! Ships an in-memory repository for tests and ephemeral runs and a
//! SQLite-backed one for durable state.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.3.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Initial release with memory and SQLite repositories

pub mod memory;
pub mod sqlite;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::features::conversation::Conversation;

pub use memory::MemoryConversationRepository;
pub use sqlite::SqliteConversationRepository;

/// Infrastructure failures from a repository backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<::sqlite::Error> for StorageError {
    fn from(e: ::sqlite::Error) -> Self {
        StorageError::Backend(e.to_string())
    }
}

/// Persistence boundary for conversations.
#[async_trait]
pub trait ConversationRepository: Send + Sync {
    /// Insert or replace a conversation by its id.
    async fn save(&self, conversation: &Conversation) -> Result<(), StorageError>;

    /// Fetch a conversation by id, `None` when unknown.
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Conversation>, StorageError>;

    /// Remove a conversation. Returns whether it existed.
    async fn delete(&self, id: Uuid) -> Result<bool, StorageError>;

    /// Whether a conversation with this id is stored.
    async fn exists(&self, id: Uuid) -> Result<bool, StorageError>;
}
